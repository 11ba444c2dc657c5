//! Word length filtering.

use crate::error::{Error, Result};

/// Fewest words a filtered cache may hold. Passwords drawn from a smaller
/// pool are too guessable, so this floor is fixed.
pub const MIN_WORDS: usize = 100;

/// Keep the words whose character count lies in `min_len..=max_len`.
pub fn filter_words(words: &[String], min_len: usize, max_len: usize) -> Result<Vec<String>> {
    let filtered: Vec<String> = words
        .iter()
        .filter(|word| (min_len..=max_len).contains(&word.chars().count()))
        .cloned()
        .collect();

    if filtered.len() < MIN_WORDS {
        return Err(Error::InsufficientWords {
            found: filtered.len(),
            required: MIN_WORDS,
        });
    }

    Ok(filtered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::words_of_len;

    #[test]
    fn test_ninety_nine_is_not_enough() {
        let mut words = words_of_len(99, 5);
        words.extend(words_of_len(50, 10));

        let err = filter_words(&words, 4, 8).unwrap_err();
        assert!(matches!(err, Error::InsufficientWords { found: 99, required: 100 }));
    }

    #[test]
    fn test_one_hundred_is_enough() {
        let words = words_of_len(100, 5);
        assert_eq!(filter_words(&words, 4, 8).unwrap().len(), 100);
    }

    #[test]
    fn test_bounds_inclusive_and_order_kept() {
        let mut words = Vec::new();
        for (short, long) in words_of_len(60, 4).into_iter().zip(words_of_len(60, 6)) {
            words.push(long);
            words.push(short);
        }
        words.extend(words_of_len(10, 7));

        let filtered = filter_words(&words, 4, 6).unwrap();
        assert_eq!(filtered.len(), 120);
        assert_eq!(filtered[0].len(), 6);
        assert_eq!(filtered[1].len(), 4);

        let err = filter_words(&words, 5, 6).unwrap_err();
        assert!(matches!(err, Error::InsufficientWords { found: 60, .. }));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let mut words = words_of_len(99, 4);
        words.push("épée".to_string());
        assert_eq!(filter_words(&words, 4, 4).unwrap().len(), 100);
    }
}
