//! Coordinator subsystem.
//!
//! Process-wide view over every per-output timer: the shared timeline, the
//! cross-output health checks, the surfaced error slot, and the once-per-
//! second aggregates the status line shows.

mod errors;
mod frame_loop;

pub use errors::TimerError;
pub use frame_loop::TimingCoordinator;
