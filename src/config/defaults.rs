//! Default configuration and override merging.

use std::collections::BTreeMap;

use crate::config::schema::{keys, ConfigValue, Configuration};
use crate::config::validation::{validate_config, validate_key};
use crate::error::Result;
use crate::random::RandomFunction;

/// Symbols used for separators and padding unless overridden.
pub const DEFAULT_SYMBOL_ALPHABET: [char; 15] = [
    '!', '@', '$', '%', '^', '&', '*', '-', '_', '+', '=', ':', '|', '~', '?',
];

/// Dictionary path used unless overridden, relative to the working directory.
pub const DEFAULT_DICTIONARY_FILE: &str = "dict.txt";

fn canonical_defaults() -> Configuration {
    Configuration::new()
        .with(keys::DICTIONARY_FILE_PATH, ConfigValue::scalar(DEFAULT_DICTIONARY_FILE))
        .with(keys::SYMBOL_ALPHABET, ConfigValue::chars(DEFAULT_SYMBOL_ALPHABET))
        .with(keys::WORD_LENGTH_MIN, ConfigValue::scalar(4))
        .with(keys::WORD_LENGTH_MAX, ConfigValue::scalar(8))
        .with(keys::SEPARATOR_CHARACTER, ConfigValue::scalar("RANDOM"))
        .with(keys::PADDING_DIGITS_BEFORE, ConfigValue::scalar(2))
        .with(keys::PADDING_DIGITS_AFTER, ConfigValue::scalar(2))
        .with(keys::PADDING_TYPE, ConfigValue::scalar("FIXED"))
        .with(keys::PADDING_CHARACTER, ConfigValue::scalar("RANDOM"))
        .with(keys::PADDING_CHARACTERS_BEFORE, ConfigValue::scalar(2))
        .with(keys::PADDING_CHARACTERS_AFTER, ConfigValue::scalar(2))
        .with(keys::CASE_TRANSFORM, ConfigValue::scalar("NONE"))
        .with(keys::RANDOM_FUNCTION, ConfigValue::RandomFn(RandomFunction::thread_rng()))
        .with(keys::RANDOM_INCREMENT, ConfigValue::scalar(10))
        .with(
            keys::CHARACTER_SUBSTITUTIONS,
            ConfigValue::SubstitutionMap(BTreeMap::new()),
        )
}

/// Build the default configuration, applying `overrides` on top.
///
/// Overrides with unknown keys or invalid values are dropped with a warning.
/// The merged result must still validate as a whole, otherwise this fails.
pub fn default_config(overrides: Option<&Configuration>) -> Result<Configuration> {
    let mut config = canonical_defaults();

    for (key, value) in overrides.into_iter().flatten() {
        match validate_key(key, value) {
            Ok(()) => {
                config.insert(key.clone(), value.clone());
            }
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Ignoring invalid config override");
            }
        }
    }

    validate_config(&config)?;
    Ok(config)
}

/// Deep copy of a configuration.
///
/// Every value is duplicated except the random source behind
/// `random_function`, which is a shared capability.
pub fn clone_config(config: &Configuration) -> Configuration {
    config.clone()
}
