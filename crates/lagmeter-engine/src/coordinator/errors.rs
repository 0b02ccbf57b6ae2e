use std::fmt;

/// Error conditions surfaced on the status line.
///
/// At most one condition is surfaced at a time. Permanent kinds latch until
/// the process restarts; transient kinds clear half a second after their last
/// report.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TimerError {
    /// The counter wrapped past its baseline. Every later reading is
    /// unusable, so this latches for the process lifetime.
    CounterOverflow,
    /// The spread between the fastest and slowest output's render time
    /// exceeded the configured limit.
    RenderVarianceTooHigh,
    /// An output's frame duration exceeded the configured limit.
    FrameTimeTooLong,
    /// The worst-case readout staleness exceeded the configured limit.
    AccuracyTooLow,
}

impl TimerError {
    /// Whether this kind latches for the process lifetime.
    pub fn is_permanent(self) -> bool {
        matches!(self, TimerError::CounterOverflow)
    }
}

impl fmt::Display for TimerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TimerError::CounterOverflow => "counter overflow, restart required",
            TimerError::RenderVarianceTooHigh => "render time variance too high",
            TimerError::FrameTimeTooLong => "frame time too long",
            TimerError::AccuracyTooLow => "timer accuracy too low",
        };
        f.write_str(text)
    }
}

impl std::error::Error for TimerError {}
