//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config, dictionary, random and instance modules produce:
//!     → tracing events (warn for dropped overrides, debug for cache
//!       rebuilds, trace for random refills)
//!
//! Consumers:
//!     → logging.rs subscriber (stderr), installed by the binary only
//! ```
//!
//! # Design Decisions
//! - The library never installs a subscriber; embedding applications choose
//! - Events carry structured fields (key, path, counts) rather than
//!   preformatted text
//! - Level is taken from RUST_LOG when set, otherwise from the CLI flag

pub mod logging;
