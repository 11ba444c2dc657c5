//! Word-list fixtures shared by the unit tests.

use std::fs;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// A lowercase word of `len` letters encoding `n` in base 26.
pub(crate) fn word(mut n: usize, len: usize) -> String {
    (0..len)
        .map(|_| {
            let c = char::from(b'a' + (n % 26) as u8);
            n /= 26;
            c
        })
        .collect()
}

/// `count` distinct words of `len` letters.
pub(crate) fn words_of_len(count: usize, len: usize) -> Vec<String> {
    (0..count).map(|i| word(i, len)).collect()
}

/// Write a dictionary with `per_length` words of each length in `lengths`.
pub(crate) fn write_dictionary(
    dir: &Path,
    name: &str,
    lengths: RangeInclusive<usize>,
    per_length: usize,
) -> PathBuf {
    let mut content = String::from("# fixture\n\n");
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
