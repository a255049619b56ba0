//! Logging utilities.
//!
//! The crate itself only talks to the `log` facade. This module offers an
//! optional `env_logger` setup for binaries and tests that want output.

mod init;

pub use init::{init_logging, init_test_logging, LoggingConfig};
