//! Dictionary loading from disk.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Read a word list, one word per line.
///
/// Blank lines and lines starting with `#` are skipped, as is anything that
/// is not at least four alphabetic characters. Kept lines are returned
/// verbatim, in file order, without deduplication.
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|source| Error::DictionaryRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_words(&content))
}

pub(crate) fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter(|line| !line.starts_with('#'))
        .filter(|line| is_word(line))
        .map(str::to_string)
        .collect()
}

fn is_word(line: &str) -> bool {
    line.chars().count() >= 4 && line.chars().all(char::is_alphabetic)
}
