//! Error definitions shared by every subsystem.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::schema::Shape;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while validating configuration, preparing the
/// word caches or drawing random numbers.
#[derive(Debug, Error)]
pub enum Error {
    /// The key is not part of the configuration schema.
    #[error("unknown configuration key '{0}'")]
    UnknownKey(String),

    /// The value has a different shape than the schema expects.
    #[error("key '{key}' expects a {expected} value, got {found}")]
    TypeMismatch {
        key: String,
        expected: Shape,
        found: Shape,
    },

    /// The value has the right shape but failed the key's predicate.
    #[error("invalid value {value} for key '{key}'")]
    ValueRejected { key: String, value: String },

    /// A required key is absent.
    #[error("missing required key '{0}'")]
    MissingRequiredKey(String),

    /// A rule spanning several keys does not hold.
    #[error("cross-field constraint violated: {0}")]
    CrossFieldViolation(String),

    /// The dictionary file could not be opened or read.
    #[error("failed to read dictionary {}: {source}", .path.display())]
    DictionaryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Too few words survived length filtering.
    #[error("only {found} words within the configured length range, need at least {required}")]
    InsufficientWords { found: usize, required: usize },

    /// The random source broke its contract.
    #[error("random source error: {0}")]
    RandomSource(String),

    /// The random cache is still empty after a replenish.
    #[error("random source produced no values")]
    RandomSourceExhausted,

    /// Bad call-site usage.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The override file could not be read.
    #[error("failed to read config file {}: {source}", .path.display())]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The override file is not valid TOML.
    #[error("failed to parse config file {}: {source}", .path.display())]
    ConfigFileParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// An override value has no configuration shape.
    #[error("override '{key}': {reason}")]
    InvalidOverride { key: String, reason: String },
}
