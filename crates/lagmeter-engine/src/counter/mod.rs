//! Counter subsystem.
//!
//! Provides the monotonic tick source every timer samples. Intended usage:
//! - one `Counter` per process, cloned into each timer
//! - `Counter::system()` in production, `Counter::manual()` in tests so
//!   timelines can be scripted tick by tick

mod manual;
mod source;

pub use manual::ManualCounter;
pub use source::Counter;
