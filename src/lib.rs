//! Configuration and data preparation for a memorable-password generator.
//!
//! This crate validates generation parameters against a fixed schema, loads
//! and filters a word dictionary, and buffers random numbers from a
//! pluggable source. Assembling the final password is left to the caller,
//! which reads [`Instance::filtered_words`] and draws from
//! [`Instance::next_random_int`].
//!
//! ```no_run
//! use mempass::{default_config, keys, ConfigValue, Configuration, Instance};
//!
//! let overrides = Configuration::new()
//!     .with(keys::DICTIONARY_FILE_PATH, ConfigValue::scalar("/usr/share/dict/words"))
//!     .with(keys::WORD_LENGTH_MAX, ConfigValue::scalar(6));
//! let config = default_config(Some(&overrides))?;
//!
//! let mut instance = Instance::new(Some(&config))?;
//! let words = instance.filtered_words();
//! let pick = &words[instance.next_random_int(words.len())?];
//! println!("{pick}");
//! # Ok::<(), mempass::Error>(())
//! ```

pub mod config;
pub mod dictionary;
pub mod error;
pub mod instance;
pub mod observability;
pub mod random;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{
    clone_config, default_config, keys, load_overrides, validate_config, validate_key,
    ConfigValue, Configuration,
};
pub use error::{Error, Result};
pub use instance::{Instance, SharedInstance};
pub use random::{RandomFunction, RandomSource};
