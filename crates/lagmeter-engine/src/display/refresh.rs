use std::fmt;

/// Display refresh rate as an exact per-second fraction.
///
/// The rate is `numerator / denominator` Hz, kept as integers so refresh
/// arithmetic stays exact. A numerator of 0 is the reserved "default rate"
/// sentinel meaning the real rate is unknown; it must be resolved to an
/// actual fraction before any timer is built on it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct RefreshRate {
    pub numerator: u32,
    pub denominator: u32,
}

impl RefreshRate {
    /// Sentinel for an unknown rate.
    pub const DEFAULT: Self = Self {
        numerator: 0,
        denominator: 0,
    };

    #[inline]
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Whole-Hz rate.
    #[inline]
    pub const fn from_hz(hz: u32) -> Self {
        Self {
            numerator: hz,
            denominator: 1,
        }
    }

    /// Maps a reported display frequency to a refresh fraction.
    ///
    /// Display enumeration APIs report 0 or 1 when the hardware-defined rate
    /// is unavailable; both collapse to the sentinel.
    pub fn from_display_frequency(hz: u32) -> Self {
        if hz <= 1 {
            Self::DEFAULT
        } else {
            Self::from_hz(hz)
        }
    }

    /// Whether this is the unresolved "default rate" sentinel.
    #[inline]
    pub fn is_default(self) -> bool {
        self.numerator == 0
    }

    /// Seconds per refresh, if the fraction is resolved.
    pub fn seconds_per_refresh(self) -> Option<f64> {
        if self.numerator == 0 || self.denominator == 0 {
            None
        } else {
            Some(self.denominator as f64 / self.numerator as f64)
        }
    }
}

impl fmt::Display for RefreshRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default() {
            write!(f, "default rate")
        } else {
            write!(f, "{}/{} Hz", self.numerator, self.denominator)
        }
    }
}
