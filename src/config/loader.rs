//! Configuration override loading from disk.
//!
//! Override files are flat TOML tables keyed by configuration key name:
//!
//! ```toml
//! dictionary_file_path = "words.txt"
//! word_length_max = 7
//! symbol_alphabet = ["!", "@", "#", "$", "%"]
//!
//! [character_substitutions]
//! a = "@"
//! ```
//!
//! Values are converted to their [`ConfigValue`] shape here; whether they are
//! acceptable is decided by validation later.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::schema::{keys, ConfigValue, Configuration};
use crate::error::{Error, Result};

/// Load overrides from a TOML file.
///
/// A relative `dictionary_file_path` is resolved against the directory
/// holding the file.
pub fn load_overrides(path: &Path) -> Result<Configuration> {
    let content = fs::read_to_string(path).map_err(|source| Error::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut overrides = parse_overrides(&content, path)?;

    let resolved = match (overrides.scalar(keys::DICTIONARY_FILE_PATH), path.parent()) {
        (Some(dict), Some(base)) if Path::new(dict).is_relative() => Some(base.join(dict)),
        _ => None,
    };
    if let Some(resolved) = resolved {
        overrides.insert(
            keys::DICTIONARY_FILE_PATH,
            ConfigValue::scalar(resolved.display()),
        );
    }

    tracing::debug!(path = %path.display(), keys = overrides.len(), "Config overrides loaded");
    Ok(overrides)
}

/// Parse TOML text into a partial configuration.
///
/// `origin` names where the text came from and is only used in errors.
pub fn parse_overrides(content: &str, origin: &Path) -> Result<Configuration> {
    let table: toml::Table = content.parse().map_err(|source| Error::ConfigFileParse {
        path: origin.to_path_buf(),
        source,
    })?;

    table
        .iter()
        .map(|(key, value)| convert(key, value).map(|value| (key.clone(), value)))
        .collect()
}

fn invalid(key: &str, reason: impl Into<String>) -> Error {
    Error::InvalidOverride {
        key: key.to_string(),
        reason: reason.into(),
    }
}

fn convert(key: &str, value: &toml::Value) -> Result<ConfigValue> {
    match value {
        toml::Value::String(s) => Ok(ConfigValue::Scalar(s.clone())),
        toml::Value::Integer(i) => Ok(ConfigValue::scalar(i)),
        toml::Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .and_then(single_char)
                    .ok_or_else(|| invalid(key, "entries must be single characters"))
            })
            .collect::<Result<Vec<char>>>()
            .map(ConfigValue::CharList),
        toml::Value::Table(table) => table
            .iter()
            .map(|(from, to)| -> Result<(char, String)> {
                let from = single_char(from)
                    .ok_or_else(|| invalid(key, format!("keys must be single characters, got '{from}'")))?;
                let to = to
                    .as_str()
                    .ok_or_else(|| invalid(key, "replacements must be strings"))?;
                Ok((from, to.to_string()))
            })
            .collect::<Result<BTreeMap<char, String>>>()
            .map(ConfigValue::SubstitutionMap),
        other => Err(invalid(key, format!("unsupported {} value", other.type_str()))),
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
