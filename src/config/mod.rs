//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults.rs (canonical defaults)
//!     + overrides (TOML file via loader.rs, or built in code)
//!     → validation.rs (per-key, then whole-config and cross-field checks)
//!     → Configuration (validated)
//!     → cloned into an Instance together with its word caches
//!
//! On set_config / update_config:
//!     → candidate validated in full
//!     → word caches rebuilt if the dictionary or length range changed
//!     → configuration and caches swapped in as one unit
//! ```
//!
//! # Design Decisions
//! - The schema is a static table; there is no way to register keys at runtime
//! - Values are a tagged union, the schema decides which variant a key expects
//! - Validation never mutates; installing is a separate step

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use defaults::{clone_config, default_config};
pub use loader::load_overrides;
pub use schema::{key_spec, key_specs, keys, ConfigValue, Configuration, KeySpec, PaddingType, Shape};
pub use validation::{validate_config, validate_key};
