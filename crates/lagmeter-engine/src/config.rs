use std::fmt;

/// Cross-output health metric tracked next to the render-time variance.
///
/// One mode is chosen for the process lifetime. Each variant carries its own
/// limit in seconds so the two readings can never be confused for each other.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum SecondaryMetric {
    /// Longest per-output frame duration (time between consecutive updates).
    FrameTime { limit: f64 },

    /// Worst-case readout staleness: the longest frame duration plus the
    /// render-time spread across outputs.
    Accuracy { limit: f64 },
}

impl SecondaryMetric {
    /// Limit in seconds for whichever mode is active.
    #[inline]
    pub fn limit(self) -> f64 {
        match self {
            SecondaryMetric::FrameTime { limit } | SecondaryMetric::Accuracy { limit } => limit,
        }
    }
}

impl fmt::Display for SecondaryMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecondaryMetric::FrameTime { limit } => {
                write!(f, "frame time limit {:.1} ms", limit * 1_000.0)
            }
            SecondaryMetric::Accuracy { limit } => {
                write!(f, "accuracy limit {:.1} ms", limit * 1_000.0)
            }
        }
    }
}

/// Process-lifetime timing configuration.
///
/// Values are fixed before the first timer is constructed and shared by every
/// output.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerConfig {
    /// Column slots each readout cycles through, advancing one per display
    /// refresh. Must be at least 1.
    pub num_columns: u32,

    /// Highest acceptable spread between the fastest and slowest output's
    /// render time, in seconds.
    pub max_render_variance: f64,

    /// Secondary health metric and its limit.
    pub secondary: SecondaryMetric,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            num_columns: 3,
            max_render_variance: 0.005,
            secondary: SecondaryMetric::FrameTime { limit: 0.1 },
        }
    }
}

impl TimerConfig {
    /// Checks the configuration before any timer or coordinator is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        if !(self.max_render_variance.is_finite() && self.max_render_variance > 0.0) {
            return Err(ConfigError::InvalidVarianceLimit(self.max_render_variance));
        }
        let limit = self.secondary.limit();
        if !(limit.is_finite() && limit > 0.0) {
            return Err(ConfigError::InvalidSecondaryLimit(limit));
        }
        Ok(())
    }
}

/// Rejected configuration values.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ConfigError {
    /// `num_columns` was 0; a column index must always exist.
    NoColumns,
    /// The render-variance limit was not a positive, finite number of seconds.
    InvalidVarianceLimit(f64),
    /// The secondary-metric limit was not a positive, finite number of seconds.
    InvalidSecondaryLimit(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoColumns => write!(f, "num_columns must be at least 1"),
            ConfigError::InvalidVarianceLimit(v) => {
                write!(f, "render variance limit must be positive and finite, got {v}")
            }
            ConfigError::InvalidSecondaryLimit(v) => {
                write!(f, "secondary metric limit must be positive and finite, got {v}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
