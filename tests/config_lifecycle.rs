//! Configuration lifecycle tests: validation, install, update, rollback.

use std::collections::BTreeMap;
use std::fs;

use mempass::{keys, validate_config, ConfigValue, Configuration, Error, Instance};

mod common;

#[test]
fn test_set_then_get_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let dict = common::write_dictionary(dir.path(), "dict.txt", 4..=8, 120);
    let mut instance = Instance::new(Some(&common::config_for(&dict))).unwrap();

    let mut subs = BTreeMap::new();
    subs.insert('a', "@".to_string());
    let wanted = common::config_for(&dict)
        .with(keys::PADDING_TYPE, ConfigValue::scalar("ADAPTIVE"))
        .with(keys::PAD_TO_LENGTH, ConfigValue::scalar(24))
        .with(keys::SEPARATOR_CHARACTER, ConfigValue::scalar("."))
        .with(keys::CASE_TRANSFORM, ConfigValue::scalar("CAPITALISE"))
        .with(keys::CHARACTER_SUBSTITUTIONS, ConfigValue::SubstitutionMap(subs));
    assert!(validate_config(&wanted).is_ok());

    instance.set_config(&wanted).unwrap();
    assert_eq!(instance.get_config(), wanted);
}

#[test]
fn test_returned_config_is_a_copy() {
    let dir = tempfile::tempdir().unwrap();
    let dict = common::write_dictionary(dir.path(), "dict.txt", 4..=8, 120);
    let instance = Instance::new(Some(&common::config_for(&dict))).unwrap();

    let mut copy = instance.get_config();
    copy.insert(keys::WORD_LENGTH_MIN, ConfigValue::scalar(7));
    copy.remove(keys::CASE_TRANSFORM);

    let fresh = instance.get_config();
    assert_eq!(fresh.usize_value(keys::WORD_LENGTH_MIN), Some(4));
    assert_eq!(fresh.scalar(keys::CASE_TRANSFORM), Some("NONE"));
}

#[test]
fn test_caller_config_not_aliased() {
    let dir = tempfile::tempdir().unwrap();
    let dict = common::write_dictionary(dir.path(), "dict.txt", 4..=8, 120);
    let mut config = common::config_for(&dict);
    let instance = Instance::new(Some(&config)).unwrap();

    config.insert(keys::SEPARATOR_CHARACTER, ConfigValue::scalar("NONE"));
    assert_eq!(instance.get_config().scalar(keys::SEPARATOR_CHARACTER), Some("RANDOM"));
}

#[test]
fn test_adaptive_padding_requires_length() {
    let dir = tempfile::tempdir().unwrap();
    let dict = common::write_dictionary(dir.path(), "dict.txt", 4..=8, 120);
    let config = common::config_for(&dict).with(keys::PADDING_TYPE, ConfigValue::scalar("ADAPTIVE"));

    assert!(matches!(validate_config(&config), Err(Error::CrossFieldViolation(_))));
    assert!(validate_config(&config.with(keys::PAD_TO_LENGTH, ConfigValue::scalar(12))).is_ok());
}

#[test]
fn test_update_min_length_rebuilds_filtered_cache() {
    let dir = tempfile::tempdir().unwrap();
    let dict = common::write_dictionary(dir.path(), "dict.txt", 4..=8, 120);
    let mut instance = Instance::new(Some(&common::config_for(&dict))).unwrap();
    assert!(instance.filtered_words().iter().any(|w| w.len() == 4));
    let before = instance.get_config();

    let partial = Configuration::new().with(keys::WORD_LENGTH_MIN, ConfigValue::scalar(5));
    instance.update_config(&partial).unwrap();

    let words = instance.filtered_words();
    assert_eq!(words.len(), 480);
    assert!(words.iter().all(|w| w.len() >= 5));

    let after = instance.get_config();
    for (key, value) in &before {
        if key != keys::WORD_LENGTH_MIN {
            assert_eq!(after.get(key), Some(value), "{key} changed");
        }
    }
    assert_eq!(after.usize_value(keys::WORD_LENGTH_MIN), Some(5));
}

#[test]
fn test_rejected_update_leaves_state_intact() {
    let dir = tempfile::tempdir().unwrap();
    let dict = common::write_dictionary(dir.path(), "dict.txt", 4..=8, 120);
    let mut instance = Instance::new(Some(&common::config_for(&dict))).unwrap();
    let config = instance.get_config();
    let all = instance.all_words();
    let filtered = instance.filtered_words();

    let partial = Configuration::new()
        .with(keys::WORD_LENGTH_MIN, ConfigValue::scalar(6))
        .with(keys::SYMBOL_ALPHABET, ConfigValue::chars(['!', '@']));
    assert!(matches!(instance.update_config(&partial), Err(Error::ValueRejected { .. })));

    // Valid value, but too few words survive the new range.
    let partial = Configuration::new()
        .with(keys::WORD_LENGTH_MIN, ConfigValue::scalar(9))
        .with(keys::WORD_LENGTH_MAX, ConfigValue::scalar(12));
    assert!(matches!(
        instance.update_config(&partial),
        Err(Error::InsufficientWords { found: 0, .. })
    ));

    assert_eq!(instance.get_config(), config);
    assert_eq!(instance.all_words(), all);
    assert_eq!(instance.filtered_words(), filtered);
}

#[test]
fn test_rejected_set_leaves_state_intact() {
    let dir = tempfile::tempdir().unwrap();
    let dict = common::write_dictionary(dir.path(), "dict.txt", 4..=8, 120);
    let small = common::write_dictionary(dir.path(), "small.txt", 4..=8, 10);
    let mut instance = Instance::new(Some(&common::config_for(&dict))).unwrap();
    let config = instance.get_config();

    assert!(matches!(
        instance.set_config(&common::config_for(&small)),
        Err(Error::InsufficientWords { found: 50, .. })
    ));

    let mut missing = common::config_for(&dict);
    missing.remove(keys::RANDOM_INCREMENT);
    assert!(matches!(
        instance.set_config(&missing),
        Err(Error::MissingRequiredKey(_))
    ));

    assert_eq!(instance.get_config(), config);
    assert_eq!(instance.filtered_words().len(), 600);
}

#[test]
fn test_switching_dictionary_path_reloads_words() {
    let dir = tempfile::tempdir().unwrap();
    let first = common::write_dictionary(dir.path(), "first.txt", 4..=8, 120);
    let second = common::write_dictionary(dir.path(), "second.txt", 5..=5, 200);
    let mut instance = Instance::new(Some(&common::config_for(&first))).unwrap();

    let partial = Configuration::new().with(
        keys::DICTIONARY_FILE_PATH,
        ConfigValue::scalar(second.display()),
    );
    instance.update_config(&partial).unwrap();

    assert_eq!(instance.all_words().len(), 200);
    assert!(instance.filtered_words().iter().all(|w| w.len() == 5));
}

#[test]
fn test_config_file_overrides_apply() {
    let dir = tempfile::tempdir().unwrap();
    common::write_dictionary(dir.path(), "words.txt", 4..=8, 120);
    let path = dir.path().join("mempass.toml");
    fs::write(
        &path,
        "dictionary_file_path = \"words.txt\"\nword_length_max = 6\ncase_transform = \"LOWER\"\n\
         separator_character = \"too long\"\n",
    )
    .unwrap();

    let overrides = mempass::load_overrides(&path).unwrap();
    let config = mempass::default_config(Some(&overrides)).unwrap();
    let instance = Instance::new(Some(&config)).unwrap();

    assert_eq!(instance.filtered_words().len(), 360);
    assert_eq!(instance.get_config().scalar(keys::CASE_TRANSFORM), Some("LOWER"));
    assert_eq!(instance.get_config().scalar(keys::SEPARATOR_CHARACTER), Some("RANDOM"));
}
