//! Logging utilities.
//!
//! The engine only speaks the `log` facade. A Rust host may install its own
//! logger; a foreign host gets `env_logger` lazily through the C ABI.

mod init;

pub use init::{init_logging, LoggingConfig};
