//! Configuration schema definitions.
//!
//! A [`Configuration`] is an ordered map from key name to [`ConfigValue`].
//! The set of recognised keys, their expected shape and the predicate each
//! value must satisfy live in a single static table of [`KeySpec`]s.

use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Serialize, Serializer};

use crate::random::{RandomFunction, RANDOM_SCALE};

/// Names of every recognised configuration key.
pub mod keys {
    pub const DICTIONARY_FILE_PATH: &str = "dictionary_file_path";
    pub const SYMBOL_ALPHABET: &str = "symbol_alphabet";
    pub const WORD_LENGTH_MIN: &str = "word_length_min";
    pub const WORD_LENGTH_MAX: &str = "word_length_max";
    pub const SEPARATOR_CHARACTER: &str = "separator_character";
    pub const PADDING_DIGITS_BEFORE: &str = "padding_digits_before";
    pub const PADDING_DIGITS_AFTER: &str = "padding_digits_after";
    pub const PADDING_TYPE: &str = "padding_type";
    pub const PADDING_CHARACTER: &str = "padding_character";
    pub const PADDING_CHARACTERS_BEFORE: &str = "padding_characters_before";
    pub const PADDING_CHARACTERS_AFTER: &str = "padding_characters_after";
    pub const PAD_TO_LENGTH: &str = "pad_to_length";
    pub const CASE_TRANSFORM: &str = "case_transform";
    pub const RANDOM_FUNCTION: &str = "random_function";
    pub const RANDOM_INCREMENT: &str = "random_increment";
    pub const CHARACTER_SUBSTITUTIONS: &str = "character_substitutions";
}

/// The structural kind of a configuration value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A single string or number.
    Scalar,
    /// A list of single characters.
    CharList,
    /// A map from single characters to replacement strings.
    SubstitutionMap,
    /// A random number source.
    RandomFn,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::CharList => write!(f, "character list"),
            Self::SubstitutionMap => write!(f, "substitution map"),
            Self::RandomFn => write!(f, "random function"),
        }
    }
}

/// A single configuration value.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    Scalar(String),
    CharList(Vec<char>),
    SubstitutionMap(BTreeMap<char, String>),
    RandomFn(RandomFunction),
}

impl ConfigValue {
    /// Build a scalar from anything printable (strings, integers).
    pub fn scalar(value: impl ToString) -> Self {
        Self::Scalar(value.to_string())
    }

    /// Build a character list.
    pub fn chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self::CharList(chars.into_iter().collect())
    }

    pub fn shape(&self) -> Shape {
        match self {
            Self::Scalar(_) => Shape::Scalar,
            Self::CharList(_) => Shape::CharList,
            Self::SubstitutionMap(_) => Shape::SubstitutionMap,
            Self::RandomFn(_) => Shape::RandomFn,
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Parse a scalar as a non-negative integer.
    pub fn as_usize(&self) -> Option<usize> {
        self.as_scalar().and_then(|s| s.trim().parse().ok())
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "'{s}'"),
            Self::CharList(chars) => write!(f, "{chars:?}"),
            Self::SubstitutionMap(map) => write!(f, "{map:?}"),
            Self::RandomFn(source) => write!(f, "<{}>", source.name()),
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(s) => serializer.serialize_str(s),
            Self::CharList(chars) => serializer.collect_seq(chars),
            Self::SubstitutionMap(map) => serializer.collect_map(map),
            Self::RandomFn(source) => serializer.serialize_str(source.name()),
        }
    }
}

/// Padding mode selected by `padding_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingType {
    None,
    Fixed,
    Adaptive,
}

impl PaddingType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "NONE" => Some(Self::None),
            "FIXED" => Some(Self::Fixed),
            "ADAPTIVE" => Some(Self::Adaptive),
            _ => None,
        }
    }
}

/// A set of generation parameters, possibly partial.
///
/// Cloning produces an independent copy; the random source inside a
/// `random_function` value is a shared capability and is not duplicated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Configuration {
    values: BTreeMap<String, ConfigValue>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Insert a value, returning the one it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: ConfigValue) -> Option<ConfigValue> {
        self.values.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<ConfigValue> {
        self.values.remove(key)
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: ConfigValue) -> Self {
        self.insert(key, value);
        self
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, ConfigValue> {
        self.values.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(ConfigValue::as_scalar)
    }

    pub fn usize_value(&self, key: &str) -> Option<usize> {
        self.get(key).and_then(ConfigValue::as_usize)
    }
}

impl FromIterator<(String, ConfigValue)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (String, ConfigValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = (&'a String, &'a ConfigValue);
    type IntoIter = btree_map::Iter<'a, String, ConfigValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Schema entry for one configuration key.
#[derive(Debug)]
pub struct KeySpec {
    pub name: &'static str,
    pub required: bool,
    pub shape: Shape,
    /// Predicate over a value already known to have `shape`.
    pub validate: fn(&ConfigValue) -> bool,
    pub description: &'static str,
}

static SCHEMA: &[KeySpec] = &[
    KeySpec {
        name: keys::DICTIONARY_FILE_PATH,
        required: true,
        shape: Shape::Scalar,
        validate: is_existing_file,
        description: "Path to the word list, one word per line",
    },
    KeySpec {
        name: keys::SYMBOL_ALPHABET,
        required: true,
        shape: Shape::CharList,
        validate: is_symbol_alphabet,
        description: "Symbols to choose from for separators and padding (at least 5)",
    },
    KeySpec {
        name: keys::WORD_LENGTH_MIN,
        required: true,
        shape: Shape::Scalar,
        validate: is_word_length,
        description: "Shortest word to use, must be greater than 3",
    },
    KeySpec {
        name: keys::WORD_LENGTH_MAX,
        required: true,
        shape: Shape::Scalar,
        validate: is_word_length,
        description: "Longest word to use, must be greater than 3",
    },
    KeySpec {
        name: keys::SEPARATOR_CHARACTER,
        required: true,
        shape: Shape::Scalar,
        validate: is_separator_character,
        description: "A single character, NONE, or RANDOM",
    },
    KeySpec {
        name: keys::PADDING_DIGITS_BEFORE,
        required: true,
        shape: Shape::Scalar,
        validate: is_count,
        description: "Number of random digits to put before the words",
    },
    KeySpec {
        name: keys::PADDING_DIGITS_AFTER,
        required: true,
        shape: Shape::Scalar,
        validate: is_count,
        description: "Number of random digits to put after the words",
    },
    KeySpec {
        name: keys::PADDING_TYPE,
        required: true,
        shape: Shape::Scalar,
        validate: is_padding_type,
        description: "NONE, FIXED, or ADAPTIVE",
    },
    KeySpec {
        name: keys::PADDING_CHARACTER,
        required: false,
        shape: Shape::Scalar,
        validate: is_padding_character,
        description: "A single character, NONE, RANDOM, or SEPARATOR",
    },
    KeySpec {
        name: keys::PADDING_CHARACTERS_BEFORE,
        required: false,
        shape: Shape::Scalar,
        validate: is_count,
        description: "Number of padding characters before the password (FIXED padding)",
    },
    KeySpec {
        name: keys::PADDING_CHARACTERS_AFTER,
        required: false,
        shape: Shape::Scalar,
        validate: is_count,
        description: "Number of padding characters after the password (FIXED padding)",
    },
    KeySpec {
        name: keys::PAD_TO_LENGTH,
        required: false,
        shape: Shape::Scalar,
        validate: is_pad_length,
        description: "Total length to pad to (ADAPTIVE padding), at least 12",
    },
    KeySpec {
        name: keys::CASE_TRANSFORM,
        required: true,
        shape: Shape::Scalar,
        validate: is_case_transform,
        description: "NONE, UPPER, LOWER, CAPITALISE, INVERSE, or RANDOM",
    },
    KeySpec {
        name: keys::RANDOM_FUNCTION,
        required: true,
        shape: Shape::RandomFn,
        validate: is_random_function,
        description: "Source returning the requested number of values in [0, 1]",
    },
    KeySpec {
        name: keys::RANDOM_INCREMENT,
        required: true,
        shape: Shape::Scalar,
        validate: is_increment,
        description: "Random numbers to request from the source per batch, at most 1000000",
    },
    KeySpec {
        name: keys::CHARACTER_SUBSTITUTIONS,
        required: false,
        shape: Shape::SubstitutionMap,
        validate: is_substitution_map,
        description: "Word character to replacement string, may be empty",
    },
];

/// Look up the schema entry for `name`.
pub fn key_spec(name: &str) -> Option<&'static KeySpec> {
    SCHEMA.iter().find(|spec| spec.name == name)
}

/// Every schema entry, in declaration order.
pub fn key_specs() -> &'static [KeySpec] {
    SCHEMA
}

fn single_char(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some() && chars.next().is_none()
}

fn is_existing_file(value: &ConfigValue) -> bool {
    value
        .as_scalar()
        .is_some_and(|path| !path.is_empty() && Path::new(path).is_file())
}

fn is_symbol_alphabet(value: &ConfigValue) -> bool {
    matches!(value, ConfigValue::CharList(chars) if chars.len() >= 5)
}

fn is_word_length(value: &ConfigValue) -> bool {
    value.as_usize().is_some_and(|n| n > 3)
}

fn is_count(value: &ConfigValue) -> bool {
    value.as_usize().is_some()
}

fn is_increment(value: &ConfigValue) -> bool {
    value
        .as_usize()
        .is_some_and(|n| (1..=RANDOM_SCALE).contains(&n))
}

fn is_pad_length(value: &ConfigValue) -> bool {
    value.as_usize().is_some_and(|n| n >= 12)
}

fn is_separator_character(value: &ConfigValue) -> bool {
    value
        .as_scalar()
        .is_some_and(|s| single_char(s) || s == "NONE" || s == "RANDOM")
}

fn is_padding_character(value: &ConfigValue) -> bool {
    value
        .as_scalar()
        .is_some_and(|s| single_char(s) || matches!(s, "NONE" | "RANDOM" | "SEPARATOR"))
}

fn is_padding_type(value: &ConfigValue) -> bool {
    value.as_scalar().and_then(PaddingType::parse).is_some()
}

fn is_case_transform(value: &ConfigValue) -> bool {
    value.as_scalar().is_some_and(|s| {
        matches!(
            s,
            "NONE" | "UPPER" | "LOWER" | "CAPITALISE" | "INVERSE" | "RANDOM"
        )
    })
}

fn is_random_function(value: &ConfigValue) -> bool {
    matches!(value, ConfigValue::RandomFn(_))
}

fn is_substitution_map(value: &ConfigValue) -> bool {
    match value {
        ConfigValue::SubstitutionMap(map) => map
            .iter()
            .all(|(from, to)| (from.is_ascii_alphanumeric() || *from == '_') && !to.is_empty()),
        _ => false,
    }
}
