//! Randomness subsystem.
//!
//! # Data Flow
//! ```text
//! random_function (config)
//!     → source.rs (RandomFunction handle over a RandomSource)
//!     → cache.rs (FIFO queue, refilled random_increment values at a time)
//!     → next_value() / next_int() for password assembly
//! ```
//!
//! # Design Decisions
//! - Sources are always asked for a whole batch, never a single value,
//!   so sources with per-call overhead stay cheap to use
//! - Every batch is checked against the source contract before any of it
//!   is queued
//! - Bounded integers use rejection sampling, so they carry no modulo bias

pub mod cache;
pub mod source;

pub use cache::{RandomCache, RANDOM_SCALE};
pub use source::{RandomFunction, RandomSource, ThreadRngSource};
