//! Logging utilities.
//!
//! Libraries in this workspace log through the `log` facade only; binaries
//! call [`init_logging`] once at startup to install `env_logger`.

mod init;

pub use init::{LoggingConfig, init_logging};
