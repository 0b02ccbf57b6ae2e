//! Logging subsystem.
//!
//! Thin wrapper over `env_logger` so binaries get one consistent logger.
//! Call `init_logging` once, early in `main`.

mod init;

pub use init::{LoggingConfig, init_logging};
