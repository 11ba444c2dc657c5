//! Shared fixtures for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use mempass::{default_config, keys, ConfigValue, Configuration};

/// A lowercase word of `len` letters encoding `n` in base 26.
pub fn word(mut n: usize, len: usize) -> String {
    (0..len)
        .map(|_| {
            let c = char::from(b'a' + (n % 26) as u8);
            n /= 26;
            c
        })
        .collect()
}

/// Write a dictionary with `per_length` words of each length in `lengths`.
pub fn write_dictionary(
    dir: &Path,
    name: &str,
    lengths: std::ops::RangeInclusive<usize>,
    per_length: usize,
) -> PathBuf {
    let mut content = String::from("# generated fixture\n\n");
    for len in lengths {
        for i in 0..per_length {
            content.push_str(&word(i, len));
            content.push('\n');
        }
    }
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Defaults pointed at `dictionary`.
pub fn config_for(dictionary: &Path) -> Configuration {
    let overrides = Configuration::new().with(
        keys::DICTIONARY_FILE_PATH,
        ConfigValue::scalar(dictionary.display()),
    );
    default_config(Some(&overrides)).unwrap()
}
