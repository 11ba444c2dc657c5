//! Buffered random number cache.

use std::collections::VecDeque;

use crate::error::{Error, Result};
use crate::random::source::RandomFunction;

/// Granularity used when turning a fraction into a bounded integer.
pub const RANDOM_SCALE: usize = 1_000_000;

/// Consecutive rejected draws tolerated by [`RandomCache::next_int`].
const MAX_REJECTIONS: usize = 64;

/// FIFO buffer of random fractions, refilled in batches from a source.
#[derive(Debug)]
pub struct RandomCache {
    queue: VecDeque<f64>,
    source: RandomFunction,
    increment: usize,
}

impl RandomCache {
    /// Create an empty cache drawing `increment` values per refill.
    pub fn new(source: RandomFunction, increment: usize) -> Self {
        Self {
            queue: VecDeque::new(),
            source,
            increment,
        }
    }

    /// Number of values waiting to be served.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn source(&self) -> &RandomFunction {
        &self.source
    }

    pub fn increment(&self) -> usize {
        self.increment
    }

    /// Point the cache at a (possibly new) source and batch size.
    ///
    /// Values queued from a different source are discarded.
    pub(crate) fn rekey(&mut self, source: RandomFunction, increment: usize) {
        if !self.source.same_source(&source) {
            tracing::debug!(
                old = self.source.name(),
                new = source.name(),
                discarded = self.queue.len(),
                "Random source replaced, flushing queue"
            );
            self.queue.clear();
        }
        self.source = source;
        self.increment = increment;
    }

    /// Pop the oldest value, refilling first if the queue is empty.
    pub fn next_value(&mut self) -> Result<f64> {
        if self.queue.is_empty() {
            self.replenish()?;
        }
        self.queue.pop_front().ok_or(Error::RandomSourceExhausted)
    }

    /// Request one batch from the source and append it to the queue.
    ///
    /// The batch is checked as a whole; nothing is queued if any part of it
    /// breaks the source contract.
    pub fn replenish(&mut self) -> Result<()> {
        if self.increment == 0 {
            return Err(Error::InvalidArgument(
                "random increment must be at least 1".to_string(),
            ));
        }

        let batch = self.source.values(self.increment);
        if batch.len() != self.increment {
            return Err(Error::RandomSource(format!(
                "{} returned {} values, expected {}",
                self.source.name(),
                batch.len(),
                self.increment
            )));
        }
        if let Some(bad) = batch.iter().find(|v| !(0.0..=1.0).contains(*v)) {
            return Err(Error::RandomSource(format!(
                "{} returned {bad}, outside [0, 1]",
                self.source.name()
            )));
        }

        tracing::trace!(source = self.source.name(), count = batch.len(), "Random cache replenished");
        self.queue.extend(batch);
        Ok(())
    }

    /// Draw an integer uniformly from `0..max`.
    ///
    /// Each fraction is scaled onto `0..RANDOM_SCALE`; draws landing in the
    /// incomplete final block of `max` are rejected and redrawn.
    pub fn next_int(&mut self, max: usize) -> Result<usize> {
        if max == 0 || max > RANDOM_SCALE {
            return Err(Error::InvalidArgument(format!(
                "max must be between 1 and {RANDOM_SCALE}, got {max}"
            )));
        }

        let limit = (RANDOM_SCALE / max) * max;
        for _ in 0..MAX_REJECTIONS {
            let scaled = (self.next_value()? * RANDOM_SCALE as f64) as usize;
            if scaled < limit {
                return Ok(scaled % max);
            }
        }

        Err(Error::RandomSource(format!(
            "{MAX_REJECTIONS} consecutive draws rejected for max {max}"
        )))
    }
}
