use std::sync::atomic::{AtomicU64, Ordering};

/// Manually driven tick source backing [`Counter::manual`].
///
/// Shared through an `Arc`; tests advance, rewind, or set it between loop
/// steps to script exact timelines without sleeping.
///
/// [`Counter::manual`]: super::Counter::manual
#[derive(Debug)]
pub struct ManualCounter {
    ticks: AtomicU64,
    frequency: u64,
}

impl ManualCounter {
    pub(crate) fn new(frequency: u64) -> Self {
        Self {
            ticks: AtomicU64::new(0),
            frequency,
        }
    }

    /// Current tick value.
    pub fn value(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }

    /// Ticks per second this counter claims.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Moves the counter forward by `ticks`.
    pub fn advance(&self, ticks: u64) {
        self.ticks.fetch_add(ticks, Ordering::AcqRel);
    }

    /// Moves the counter forward by a duration in seconds, rounded to the
    /// nearest tick.
    pub fn advance_seconds(&self, seconds: f64) {
        self.advance((seconds * self.frequency as f64).round() as u64);
    }

    /// Moves the counter backward by `ticks`, wrapping below zero.
    ///
    /// Lets tests drive a timer past its baseline the way a hardware counter
    /// rollover would.
    pub fn rewind(&self, ticks: u64) {
        self.ticks.fetch_sub(ticks, Ordering::AcqRel);
    }

    /// Sets the counter to an absolute tick value.
    pub fn set(&self, ticks: u64) {
        self.ticks.store(ticks, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(ManualCounter::new(1_000).value(), 0);
    }

    #[test]
    fn advance_and_rewind() {
        let counter = ManualCounter::new(1_000);
        counter.advance(5);
        assert_eq!(counter.value(), 5);
        counter.rewind(2);
        assert_eq!(counter.value(), 3);
    }

    #[test]
    fn set_is_absolute() {
        let counter = ManualCounter::new(1_000);
        counter.advance(100);
        counter.set(42);
        assert_eq!(counter.value(), 42);
    }

    #[test]
    fn advance_seconds_scales_by_frequency() {
        let counter = ManualCounter::new(1_000);
        counter.advance_seconds(0.5);
        assert_eq!(counter.value(), 500);
    }

    #[test]
    fn rewind_wraps_below_zero() {
        let counter = ManualCounter::new(1_000);
        counter.rewind(1);
        assert_eq!(counter.value(), u64::MAX);
    }
}
