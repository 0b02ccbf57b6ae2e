use std::fmt;

/// Sub-second timer readout: whole milliseconds plus hundredths of a
/// millisecond.
///
/// Invariants: `millis` is in `0..1000`, `hundredths` is in `0..100`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TimerValue {
    /// Whole milliseconds within the current second.
    pub millis: u32,
    /// Hundredths of a millisecond below that.
    pub hundredths: u32,
}

impl TimerValue {
    /// Decomposes seconds-since-start into the on-screen readout.
    ///
    /// The duration is rounded to the nearest 1/100,000 s, reduced modulo one
    /// second, and split into whole milliseconds and hundredths of a
    /// millisecond. 0.999995 s therefore rounds up and wraps to `000.00`.
    pub fn from_seconds(seconds: f64) -> Self {
        // `as u64` truncates toward zero, so +0.5 rounds half-up over the
        // non-negative range. Negative input, possible only after a counter
        // rollover, saturates to zero.
        let hundred_thousandths = (seconds * 100_000.0 + 0.5) as u64;
        let sub_second = hundred_thousandths % 100_000;
        Self {
            millis: (sub_second / 100) as u32,
            hundredths: (sub_second % 100) as u32,
        }
    }

    /// Readout as fractional milliseconds.
    pub fn as_millis_f64(self) -> f64 {
        self.millis as f64 + self.hundredths as f64 / 100.0
    }
}

impl fmt::Display for TimerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}.{:02}", self.millis, self.hundredths)
    }
}
