//! Configuration validation.
//!
//! # Responsibilities
//! - Per-key checks: key is known, value has the right shape, predicate holds
//! - Whole-config checks: required keys present, then every key, then the
//!   cross-field rules
//!
//! # Design Decisions
//! - Returns the first error found; callers branch on the error kind
//! - Validation is a pure function of its input and may be repeated freely
//! - Runs before any configuration is accepted into an instance

use crate::config::schema::{key_spec, key_specs, keys, ConfigValue, Configuration, PaddingType};
use crate::error::{Error, Result};

/// Check a single key/value pair against the schema.
pub fn validate_key(key: &str, value: &ConfigValue) -> Result<()> {
    let spec = key_spec(key).ok_or_else(|| Error::UnknownKey(key.to_string()))?;

    if value.shape() != spec.shape {
        return Err(Error::TypeMismatch {
            key: key.to_string(),
            expected: spec.shape,
            found: value.shape(),
        });
    }

    if !(spec.validate)(value) {
        return Err(Error::ValueRejected {
            key: key.to_string(),
            value: value.to_string(),
        });
    }

    Ok(())
}

/// Check a complete configuration.
pub fn validate_config(config: &Configuration) -> Result<()> {
    if let Some(spec) = key_specs()
        .iter()
        .find(|spec| spec.required && !config.contains_key(spec.name))
    {
        return Err(Error::MissingRequiredKey(spec.name.to_string()));
    }

    for (key, value) in config {
        validate_key(key, value)?;
    }

    validate_cross_fields(config)
}

fn validate_cross_fields(config: &Configuration) -> Result<()> {
    let padding = config
        .scalar(keys::PADDING_TYPE)
        .and_then(PaddingType::parse)
        .ok_or_else(|| Error::MissingRequiredKey(keys::PADDING_TYPE.to_string()))?;

    if padding != PaddingType::None && !config.contains_key(keys::PADDING_CHARACTER) {
        return Err(Error::CrossFieldViolation(format!(
            "{} required when padding_type is not NONE",
            keys::PADDING_CHARACTER
        )));
    }

    if padding == PaddingType::Fixed {
        for key in [keys::PADDING_CHARACTERS_BEFORE, keys::PADDING_CHARACTERS_AFTER] {
            if !config.contains_key(key) {
                return Err(Error::CrossFieldViolation(format!(
                    "{key} required when padding_type is FIXED"
                )));
            }
        }
    }

    if padding == PaddingType::Adaptive && !config.contains_key(keys::PAD_TO_LENGTH) {
        return Err(Error::CrossFieldViolation(format!(
            "{} required when padding_type is ADAPTIVE",
            keys::PAD_TO_LENGTH
        )));
    }

    let min = config.usize_value(keys::WORD_LENGTH_MIN);
    let max = config.usize_value(keys::WORD_LENGTH_MAX);
    if let (Some(min), Some(max)) = (min, max) {
        if min > max {
            return Err(Error::CrossFieldViolation(format!(
                "word_length_min ({min}) is greater than word_length_max ({max})"
            )));
        }
    }

    Ok(())
}
