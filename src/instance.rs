//! Instance state: the active configuration and everything derived from it.
//!
//! # Responsibilities
//! - Own a private copy of the active configuration
//! - Keep the word caches in step with the dictionary path and length range
//! - Serve random numbers from a cache keyed to the configured source
//!
//! # Design Decisions
//! - Every candidate is validated and its caches built before anything is
//!   replaced; the final swap cannot fail, so a rejected change leaves the
//!   instance exactly as it was
//! - Callers only ever receive clones of configuration and words
//! - `SharedInstance` holds one lock for the whole of each operation

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::schema::{key_spec, keys, ConfigValue, Configuration};
use crate::config::{clone_config, default_config, validate_config, validate_key};
use crate::dictionary::WordCache;
use crate::error::{Error, Result};
use crate::random::{RandomCache, RandomFunction};

/// Keys whose change invalidates the word caches.
const WORD_CACHE_KEYS: [&str; 3] = [
    keys::DICTIONARY_FILE_PATH,
    keys::WORD_LENGTH_MIN,
    keys::WORD_LENGTH_MAX,
];

/// Typed view of the keys an instance acts on directly.
struct Resolved {
    dictionary: PathBuf,
    min_len: usize,
    max_len: usize,
    source: RandomFunction,
    increment: usize,
}

impl Resolved {
    fn from_config(config: &Configuration) -> Result<Self> {
        let dictionary = config
            .scalar(keys::DICTIONARY_FILE_PATH)
            .map(PathBuf::from)
            .ok_or_else(|| missing(keys::DICTIONARY_FILE_PATH))?;
        let source = match config.get(keys::RANDOM_FUNCTION) {
            Some(ConfigValue::RandomFn(source)) => source.clone(),
            _ => return Err(missing(keys::RANDOM_FUNCTION)),
        };

        Ok(Self {
            dictionary,
            min_len: required_usize(config, keys::WORD_LENGTH_MIN)?,
            max_len: required_usize(config, keys::WORD_LENGTH_MAX)?,
            source,
            increment: required_usize(config, keys::RANDOM_INCREMENT)?,
        })
    }

    fn build_words(&self) -> Result<WordCache> {
        WordCache::build(&self.dictionary, self.min_len, self.max_len)
    }
}

fn missing(key: &str) -> Error {
    Error::MissingRequiredKey(key.to_string())
}

fn required_usize(config: &Configuration, key: &str) -> Result<usize> {
    config.usize_value(key).ok_or_else(|| missing(key))
}

/// A validated configuration together with its word and random caches.
#[derive(Debug)]
pub struct Instance {
    config: Configuration,
    words: WordCache,
    random: RandomCache,
}

impl Instance {
    /// Build an instance from `config`, or from the defaults when `None`.
    pub fn new(config: Option<&Configuration>) -> Result<Self> {
        let config = match config {
            Some(config) => clone_config(config),
            None => default_config(None)?,
        };

        validate_config(&config)?;
        let resolved = Resolved::from_config(&config)?;
        let words = resolved.build_words()?;
        let random = RandomCache::new(resolved.source, resolved.increment);

        tracing::info!(
            dictionary = %resolved.dictionary.display(),
            words = words.filtered.len(),
            random_source = random.source().name(),
            "Instance created"
        );

        Ok(Self {
            config,
            words,
            random,
        })
    }

    /// Independent copy of the active configuration.
    pub fn get_config(&self) -> Configuration {
        clone_config(&self.config)
    }

    /// Replace the whole configuration.
    pub fn set_config(&mut self, config: &Configuration) -> Result<()> {
        let candidate = clone_config(config);
        validate_config(&candidate)?;
        let resolved = Resolved::from_config(&candidate)?;
        let words = resolved.build_words()?;

        self.commit(candidate, Some(words), resolved);
        tracing::info!("Configuration replaced");
        Ok(())
    }

    /// Merge `partial` onto the active configuration.
    ///
    /// Unknown keys are ignored. Any known key with an invalid value aborts
    /// the update. Word caches are rebuilt only when the dictionary path or
    /// length range changed.
    pub fn update_config(&mut self, partial: &Configuration) -> Result<()> {
        let mut candidate = clone_config(&self.config);
        for (key, value) in partial {
            if key_spec(key).is_none() {
                tracing::debug!(key = %key, "Ignoring unknown key in config update");
                continue;
            }
            validate_key(key, value)?;
            candidate.insert(key.clone(), value.clone());
        }

        validate_config(&candidate)?;
        let resolved = Resolved::from_config(&candidate)?;

        let words = if WORD_CACHE_KEYS
            .iter()
            .any(|key| candidate.get(key) != self.config.get(key))
        {
            Some(resolved.build_words()?)
        } else {
            None
        };

        tracing::info!(rebuilt_words = words.is_some(), "Configuration updated");
        self.commit(candidate, words, resolved);
        Ok(())
    }

    fn commit(&mut self, config: Configuration, words: Option<WordCache>, resolved: Resolved) {
        if let Some(words) = words {
            self.words = words;
        }
        self.random.rekey(resolved.source, resolved.increment);
        self.config = config;
    }

    /// Every usable dictionary word, in file order.
    pub fn all_words(&self) -> Vec<String> {
        self.words.all.clone()
    }

    /// Dictionary words within the configured length range.
    pub fn filtered_words(&self) -> Vec<String> {
        self.words.filtered.clone()
    }

    /// Random values queued and not yet served.
    pub fn pending_random(&self) -> usize {
        self.random.len()
    }

    /// Next random fraction in `[0, 1]`.
    pub fn next_random(&mut self) -> Result<f64> {
        self.random.next_value()
    }

    /// Next random integer in `0..max`.
    pub fn next_random_int(&mut self, max: usize) -> Result<usize> {
        self.random.next_int(max)
    }
}

/// An [`Instance`] that can be shared between threads.
///
/// Each method holds a single lock for its full duration.
#[derive(Debug, Clone)]
pub struct SharedInstance {
    inner: Arc<Mutex<Instance>>,
}

impl SharedInstance {
    pub fn new(instance: Instance) -> Self {
        Self {
            inner: Arc::new(Mutex::new(instance)),
        }
    }

    // Instance state only changes through infallible swaps, so a poisoned
    // lock still guards consistent data.
    fn lock(&self) -> MutexGuard<'_, Instance> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get_config(&self) -> Configuration {
        self.lock().get_config()
    }

    pub fn set_config(&self, config: &Configuration) -> Result<()> {
        self.lock().set_config(config)
    }

    pub fn update_config(&self, partial: &Configuration) -> Result<()> {
        self.lock().update_config(partial)
    }

    pub fn all_words(&self) -> Vec<String> {
        self.lock().all_words()
    }

    pub fn filtered_words(&self) -> Vec<String> {
        self.lock().filtered_words()
    }

    pub fn next_random(&self) -> Result<f64> {
        self.lock().next_random()
    }

    pub fn next_random_int(&self, max: usize) -> Result<usize> {
        self.lock().next_random_int(max)
    }
}
