//! Logging for blockbox.

#[macro_use]
mod macros;

pub use log::{Level, LevelFilter, debug, error, info, log_enabled, trace, warn};
