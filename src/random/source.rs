//! Pluggable random number sources.

use std::fmt;
use std::sync::{Arc, OnceLock};

use rand::Rng;

/// Something that can produce batches of random fractions.
///
/// Implementations must return exactly `count` values, each in the closed
/// interval `[0, 1]`. The cache verifies this and rejects batches that do
/// not comply.
pub trait RandomSource: Send + Sync {
    fn values(&self, count: usize) -> Vec<f64>;
}

impl<F> RandomSource for F
where
    F: Fn(usize) -> Vec<f64> + Send + Sync,
{
    fn values(&self, count: usize) -> Vec<f64> {
        self(count)
    }
}

/// Default source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn values(&self, count: usize) -> Vec<f64> {
        let mut rng = rand::thread_rng();
        (0..count).map(|_| rng.gen::<f64>()).collect()
    }
}

/// A named, shareable handle to a [`RandomSource`].
///
/// Two handles are equal when they point at the same source instance.
#[derive(Clone)]
pub struct RandomFunction {
    name: Arc<str>,
    source: Arc<dyn RandomSource>,
}

impl RandomFunction {
    pub fn new(name: impl Into<Arc<str>>, source: impl RandomSource + 'static) -> Self {
        Self {
            name: name.into(),
            source: Arc::new(source),
        }
    }

    /// Wrap an already shared source.
    pub fn from_arc(name: impl Into<Arc<str>>, source: Arc<dyn RandomSource>) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }

    /// The process-wide default source.
    pub fn thread_rng() -> Self {
        static DEFAULT: OnceLock<RandomFunction> = OnceLock::new();
        DEFAULT
            .get_or_init(|| Self::new("thread_rng", ThreadRngSource))
            .clone()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self, count: usize) -> Vec<f64> {
        self.source.values(count)
    }

    /// True when both handles share one underlying source.
    pub fn same_source(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.source), Arc::as_ptr(&other.source))
    }
}

impl PartialEq for RandomFunction {
    fn eq(&self, other: &Self) -> bool {
        self.same_source(other)
    }
}

impl fmt::Debug for RandomFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomFunction")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_rng_source_contract() {
        let values = ThreadRngSource.values(50);
        assert_eq!(values.len(), 50);
        assert!(values.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_identity_equality() {
        let a = RandomFunction::new("half", |n: usize| vec![0.5; n]);
        let b = RandomFunction::new("half", |n: usize| vec![0.5; n]);

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(RandomFunction::thread_rng(), RandomFunction::thread_rng());
    }

    #[test]
    fn test_closure_source() {
        let f = RandomFunction::new("ramp", |n: usize| (0..n).map(|i| i as f64 / n as f64).collect());
        assert_eq!(f.values(4), vec![0.0, 0.25, 0.5, 0.75]);
        assert_eq!(f.name(), "ramp");
    }
}
