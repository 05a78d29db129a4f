//! Logging setup for hosts embedding the engine.
//!
//! The engine only emits through the `log` facade (cache rebuilds at `debug`,
//! pointer and hit-test traces at `trace`, rejected configuration at `warn`).
//! Hosts without their own logger can call [`init_logging`] once at startup.

mod init;

pub use init::{init_logging, LoggingConfig};
