use std::fmt;

use crate::config::{ConfigError, TimerConfig};
use crate::coordinator::{TimerError, TimingCoordinator};
use crate::counter::Counter;
use crate::display::RefreshRate;

use super::value::TimerValue;

/// Construction failure for an [`OutputTimer`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SetupError {
    /// The display reported the "default rate" sentinel. The refresh fraction
    /// must be resolved before refresh arithmetic can divide by it.
    DefaultRefreshRate,
    /// A zero denominator would collapse the refresh interval to nothing.
    ZeroDenominator,
    /// The counter claims zero ticks per second; no duration can be derived
    /// from it.
    ZeroFrequency,
    /// The shared timing configuration is unusable.
    Config(ConfigError),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::DefaultRefreshRate => {
                write!(f, "refresh rate is the default-rate sentinel")
            }
            SetupError::ZeroDenominator => write!(f, "refresh rate has a zero denominator"),
            SetupError::ZeroFrequency => write!(f, "counter frequency is zero"),
            SetupError::Config(err) => write!(f, "invalid timer config: {err}"),
        }
    }
}

impl std::error::Error for SetupError {}

impl From<ConfigError> for SetupError {
    fn from(err: ConfigError) -> Self {
        SetupError::Config(err)
    }
}

/// Per-output frame timer.
///
/// One `OutputTimer` exists per active display output for the process
/// lifetime. Every instance shares the same starting count so all readouts
/// show the same digits; what differs per output is the refresh fraction and
/// the measured render time.
#[derive(Debug)]
pub struct OutputTimer {
    counter: Counter,
    /// Ticks per second. Constant for the counter's lifetime, cached once.
    frequency: f64,

    /// Baseline shared by every output.
    starting_count: u64,
    /// Counter sample taken by the most recent `update`.
    last_count: u64,

    /// Ticks in one refresh interval of this output's display.
    counts_per_refresh: u64,
    /// Accumulator toward the next refresh boundary.
    counts_since_refresh: u64,

    /// Current column slot, `0..num_columns`.
    column: u32,
    num_columns: u32,

    timer_value: TimerValue,

    /// Seconds since the baseline as of the latest `update`.
    seconds_since_start: f64,
    /// Seconds between the two most recent `update` calls.
    last_frame_seconds: f64,
    /// Seconds from the latest `update` sample to the following
    /// `render_complete`.
    last_render_seconds: f64,
}

impl OutputTimer {
    /// Creates a timer for one output.
    ///
    /// `starting_count` is sampled once by the caller and shared across every
    /// output. `refresh` must be a resolved fraction; the sentinel, a zero
    /// denominator and a zero-frequency counter are rejected here so nothing
    /// malformed can reach the refresh and duration divisions.
    pub fn new(
        counter: &Counter,
        starting_count: u64,
        refresh: RefreshRate,
        config: &TimerConfig,
    ) -> Result<Self, SetupError> {
        if refresh.is_default() {
            return Err(SetupError::DefaultRefreshRate);
        }
        if refresh.denominator == 0 {
            return Err(SetupError::ZeroDenominator);
        }
        config.validate()?;

        let frequency = counter.frequency();
        if frequency == 0 {
            return Err(SetupError::ZeroFrequency);
        }
        let counts_per_refresh =
            frequency * refresh.denominator as u64 / refresh.numerator as u64;

        log::debug!("output timer: {refresh}, {counts_per_refresh} counts per refresh");

        Ok(Self {
            counter: counter.clone(),
            frequency: frequency as f64,
            starting_count,
            last_count: starting_count,
            counts_per_refresh,
            counts_since_refresh: 0,
            column: 0,
            num_columns: config.num_columns,
            timer_value: TimerValue::default(),
            seconds_since_start: 0.0,
            last_frame_seconds: 0.0,
            last_render_seconds: 0.0,
        })
    }

    /// Samples the counter and advances this output's per-frame state.
    ///
    /// Called once per global frame for every timer, after
    /// [`TimingCoordinator::loop_started`] and before any render work. The
    /// work after the sample is identical across instances so each output
    /// sees the same sample-to-display latency.
    pub fn update(&mut self, coordinator: &mut TimingCoordinator) {
        let current_count = self.counter.raw();

        // The counter has no defined maximum. Falling below the baseline
        // means it wrapped and every later reading is unusable.
        if current_count < self.starting_count {
            coordinator.report_error(TimerError::CounterOverflow);
        }

        self.seconds_since_start = self.seconds_between(self.starting_count, current_count);
        coordinator.record_timeline(self.seconds_since_start);

        self.last_frame_seconds = self.seconds_between(self.last_count, current_count);

        self.timer_value = TimerValue::from_seconds(self.seconds_since_start);

        // Refresh accumulator. At most one column step per update; a stall
        // spanning several refresh intervals catches up on later frames.
        self.counts_since_refresh = self
            .counts_since_refresh
            .wrapping_add(current_count.wrapping_sub(self.last_count));
        if self.counts_since_refresh >= self.counts_per_refresh {
            self.counts_since_refresh -= self.counts_per_refresh;
            self.column = (self.column + 1) % self.num_columns;
        }

        self.last_count = current_count;
    }

    /// Records the render time for the frame being presented.
    ///
    /// Call immediately after the buffer flip. The duration runs from this
    /// frame's `update` sample to now, so it covers start-of-update through
    /// post-present.
    pub fn render_complete(&mut self) {
        let now = self.counter.raw();
        self.last_render_seconds = self.seconds_between(self.last_count, now);
    }

    /// Sub-second readout for the current column. Pure read.
    pub fn timer_value(&self) -> TimerValue {
        self.timer_value
    }

    /// Column slot the readout should render into. Pure read.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Seconds since the shared baseline as of the latest `update`.
    pub fn seconds_since_start(&self) -> f64 {
        self.seconds_since_start
    }

    /// Seconds between the two most recent `update` calls.
    pub fn last_frame_seconds(&self) -> f64 {
        self.last_frame_seconds
    }

    /// Seconds from the latest `update` sample to `render_complete`.
    pub fn last_render_seconds(&self) -> f64 {
        self.last_render_seconds
    }

    /// Signed tick delta in seconds.
    ///
    /// Reinterpreting the wrapped difference as two's complement keeps the
    /// delta meaningful (small and negative rather than enormous) if the
    /// counter ever lands behind the baseline.
    fn seconds_between(&self, from: u64, to: u64) -> f64 {
        to.wrapping_sub(from) as i64 as f64 / self.frequency
    }
}
