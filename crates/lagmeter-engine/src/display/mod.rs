//! Display subsystem.
//!
//! Describes what the timers need to know about an output: its refresh rate
//! as an exact rational, including the "default rate" sentinel reported when
//! the hardware rate could not be determined.

mod refresh;

pub use refresh::RefreshRate;
