//! Timer subsystem.
//!
//! One `OutputTimer` per display output, all stepped in lock-step by the
//! presentation loop. Intended usage per global frame:
//! - `TimingCoordinator::loop_started` with every live timer
//! - `update()` on every timer
//! - render and present
//! - `render_complete()` on every timer
//! - `TimingCoordinator::loop_complete`

mod output;
mod value;

pub use output::{OutputTimer, SetupError};
pub use value::TimerValue;
