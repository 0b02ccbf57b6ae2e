use crate::config::{ConfigError, SecondaryMetric, TimerConfig};
use crate::timer::OutputTimer;

use super::errors::TimerError;

/// Seconds a transient error stays surfaced after its last report.
const ERROR_HOLD_SECONDS: f64 = 0.5;

/// Seconds per display-aggregate cycle.
const DISPLAY_CYCLE_SECONDS: f64 = 1.0;

/// Process-wide timing aggregator and error policy.
///
/// Exactly one coordinator exists per process. It is built once and passed
/// by `&mut` through the presentation loop, so all writes happen on the loop
/// thread. The per-frame call order is caller-enforced:
///
/// 1. [`loop_started`] with every live timer, which reads the *previous*
///    frame's render times;
/// 2. [`OutputTimer::update`] on every timer;
/// 3. render work and present;
/// 4. [`OutputTimer::render_complete`] on every timer;
/// 5. [`loop_complete`].
///
/// [`loop_started`]: Self::loop_started
/// [`loop_complete`]: Self::loop_complete
#[derive(Debug)]
pub struct TimingCoordinator {
    config: TimerConfig,

    current_error: Option<TimerError>,
    /// Timeline second at which the surfaced error was last reported.
    last_error_seconds: f64,

    /// Shared timeline: seconds since the common baseline, written by
    /// whichever timer updated most recently so policy code never samples
    /// the counter itself.
    timeline_seconds: f64,
    previous_timeline_seconds: f64,

    /// Highest render-time spread seen in the current display cycle.
    max_variance: f64,
    display_variance: f64,

    /// Worst secondary-metric sample in the current display cycle.
    worst_secondary: f64,
    display_secondary: f64,

    frame_count: u32,
    fps: u32,
    /// Elapsed time in the current display cycle. Flips keep the remainder
    /// so the cycle holds its phase.
    cycle_seconds: f64,
}

impl TimingCoordinator {
    /// Creates the process-wide coordinator from a validated configuration.
    pub fn new(config: TimerConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        log::info!(
            "timing coordinator: {} columns, variance limit {:.1} ms, {}",
            config.num_columns,
            config.max_render_variance * 1_000.0,
            config.secondary,
        );

        Ok(Self {
            config,
            current_error: None,
            last_error_seconds: 0.0,
            timeline_seconds: 0.0,
            previous_timeline_seconds: 0.0,
            max_variance: 0.0,
            display_variance: 0.0,
            worst_secondary: 0.0,
            display_secondary: 0.0,
            frame_count: 0,
            fps: 0,
            cycle_seconds: 0.0,
        })
    }

    /// Aggregates the previous frame's measurements across every live timer.
    ///
    /// Must run before any timer's `update` for the current frame, with at
    /// least one timer. Raises [`TimerError::RenderVarianceTooHigh`] when the
    /// render-time spread exceeds its limit, and the configured secondary
    /// error when that metric exceeds its own.
    pub fn loop_started<'a, I>(&mut self, timers: I)
    where
        I: IntoIterator<Item = &'a OutputTimer>,
    {
        let mut timers = timers.into_iter();
        let Some(first) = timers.next() else {
            debug_assert!(false, "loop_started needs at least one timer");
            return;
        };

        let mut fastest = first.last_render_seconds();
        let mut slowest = fastest;
        let mut longest_frame = first.last_frame_seconds();
        for timer in timers {
            let render = timer.last_render_seconds();
            fastest = fastest.min(render);
            slowest = slowest.max(render);
            longest_frame = longest_frame.max(timer.last_frame_seconds());
        }

        let variance = slowest - fastest;
        if variance > self.config.max_render_variance {
            self.report_error(TimerError::RenderVarianceTooHigh);
        }
        if variance > self.max_variance {
            self.max_variance = variance;
        }

        let (kind, limit, sample) = match self.config.secondary {
            SecondaryMetric::FrameTime { limit } => {
                (TimerError::FrameTimeTooLong, limit, longest_frame)
            }
            // Worst-case staleness: the slowest output's frame duration plus
            // the spread between outputs.
            SecondaryMetric::Accuracy { limit } => {
                (TimerError::AccuracyTooLow, limit, longest_frame + variance)
            }
        };
        if sample > limit {
            self.report_error(kind);
        }
        if sample > self.worst_secondary {
            self.worst_secondary = sample;
        }

        self.record_display_values();
        self.reset_errors();
    }

    /// Marks the end of one global frame.
    pub fn loop_complete(&mut self) {
        self.frame_count += 1;
    }

    /// Surfaces an error on the status line.
    ///
    /// A latched permanent error is never displaced. Otherwise the new kind
    /// replaces whatever was surfaced, and the hold window restarts even when
    /// the kind is unchanged.
    pub fn report_error(&mut self, error: TimerError) {
        if self.current_error.is_some_and(TimerError::is_permanent) {
            return;
        }
        if self.current_error != Some(error) {
            log::warn!("timer error raised: {error}");
        }
        self.current_error = Some(error);
        self.last_error_seconds = self.timeline_seconds;
    }

    /// Error currently surfaced on the status line, if any. Pure read.
    pub fn current_error(&self) -> Option<TimerError> {
        self.current_error
    }

    /// Frames counted over the last full display cycle. Pure read.
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Highest render-time spread seen over the last full display cycle, in
    /// seconds. Pure read.
    pub fn render_variance(&self) -> f64 {
        self.display_variance
    }

    /// Worst secondary-metric sample over the last full display cycle, in
    /// seconds: the longest frame time or the lowest accuracy, depending on
    /// the configured mode. Pure read.
    pub fn secondary_metric(&self) -> f64 {
        self.display_secondary
    }

    /// Which secondary metric this process tracks.
    pub fn secondary_mode(&self) -> SecondaryMetric {
        self.config.secondary
    }

    /// Publishes the shared timeline. Each timer calls this at the end of its
    /// `update` so policy code reuses the freshest counter sample.
    pub(crate) fn record_timeline(&mut self, seconds: f64) {
        self.timeline_seconds = seconds;
    }

    /// Advances the display cycle and snapshots the aggregates when a full
    /// cycle has elapsed.
    fn record_display_values(&mut self) {
        self.cycle_seconds += self.timeline_seconds - self.previous_timeline_seconds;

        if self.cycle_seconds >= DISPLAY_CYCLE_SECONDS {
            self.fps = self.frame_count;
            self.frame_count = 0;
            self.cycle_seconds -= DISPLAY_CYCLE_SECONDS;

            self.display_variance = self.max_variance;
            self.max_variance = 0.0;

            self.display_secondary = self.worst_secondary;
            self.worst_secondary = 0.0;
        }

        self.previous_timeline_seconds = self.timeline_seconds;
    }

    /// Clears a transient error once its hold window has passed.
    fn reset_errors(&mut self) {
        let Some(error) = self.current_error else {
            return;
        };
        if error.is_permanent() {
            return;
        }

        if self.timeline_seconds - self.last_error_seconds > ERROR_HOLD_SECONDS {
            log::debug!("timer error cleared: {error}");
            self.current_error = None;
        }
    }
}
