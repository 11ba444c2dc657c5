//! Word dictionary preparation.
//!
//! # Data Flow
//! ```text
//! dictionary file
//!     → loader.rs (comments, blanks and non-words dropped)
//!     → full word cache
//!     → filter.rs (word_length_min..=word_length_max)
//!     → filtered word cache (at least MIN_WORDS entries)
//! ```

pub mod filter;
pub mod loader;

pub use filter::{filter_words, MIN_WORDS};
pub use loader::load_words;

/// The two word caches derived from one dictionary and length range.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCache {
    /// Every usable word in the dictionary, in file order.
    pub all: Vec<String>,
    /// The subset of `all` within the configured length range.
    pub filtered: Vec<String>,
}

impl WordCache {
    /// Load `path` and filter it to `min_len..=max_len`.
    pub fn build(
        path: &std::path::Path,
        min_len: usize,
        max_len: usize,
    ) -> crate::error::Result<Self> {
        let all = load_words(path)?;
        let filtered = filter_words(&all, min_len, max_len)?;
        tracing::debug!(
            path = %path.display(),
            total = all.len(),
            usable = filtered.len(),
            min_len,
            max_len,
            "Word cache built"
        );
        Ok(Self { all, filtered })
    }
}
