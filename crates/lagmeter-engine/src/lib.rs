//! Lagmeter engine crate.
//!
//! This crate owns the timing model behind the per-output latency readouts:
//! counter sources, per-output frame timers, and the process-wide coordinator
//! that aggregates their health.

pub mod config;
pub mod counter;
pub mod coordinator;
pub mod display;
pub mod timer;

pub mod logging;
