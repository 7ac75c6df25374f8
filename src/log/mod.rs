//! Logging
//!
//! Linux kernel-style `pr_*` macros feeding a bounded in-memory ring. Entries at
//! or above the console level are also handed to an optional console sink the
//! host installs with [`set_console_sink`].
//!
//! ```ignore
//! pr_info!("RAM volume mounted at {}", path);
//! pr_err!("growth by {} bytes failed", n);
//! ```
#[macro_use]
pub mod macros;

pub mod config;
pub mod entry;
pub mod level;
pub mod log_core;

pub use entry::LogEntry;
pub use level::LogLevel;
pub use log_core::LogCore;

use config::{DEFAULT_CONSOLE_LEVEL, DEFAULT_LOG_LEVEL};

static GLOBAL_LOG: LogCore = LogCore::new(DEFAULT_LOG_LEVEL, DEFAULT_CONSOLE_LEVEL);

/// Records a formatted message in the global log (macro backend).
#[doc(hidden)]
pub fn log_impl(level: LogLevel, args: core::fmt::Arguments<'_>) {
    GLOBAL_LOG._log(level, args);
}

/// Checks the global threshold before any formatting happens.
#[inline(always)]
#[doc(hidden)]
pub fn is_level_enabled(level: LogLevel) -> bool {
    GLOBAL_LOG.is_level_enabled(level)
}

/// Pops the oldest unread entry from the global log.
pub fn read_log() -> Option<LogEntry> {
    GLOBAL_LOG._read_log()
}

/// Number of unread entries in the global log.
pub fn log_len() -> usize {
    GLOBAL_LOG._log_len()
}

/// Entries overwritten before anyone read them.
pub fn log_dropped_count() -> usize {
    GLOBAL_LOG._log_dropped_count()
}

/// Sets the threshold for recording.
pub fn set_global_level(level: LogLevel) {
    GLOBAL_LOG._set_global_level(level);
}

/// Current recording threshold.
pub fn get_global_level() -> LogLevel {
    GLOBAL_LOG._get_global_level()
}

/// Sets the threshold for immediate console output.
pub fn set_console_level(level: LogLevel) {
    GLOBAL_LOG._set_console_level(level);
}

/// Current console threshold.
pub fn get_console_level() -> LogLevel {
    GLOBAL_LOG._get_console_level()
}

/// Installs (or removes) the function that prints urgent entries.
///
/// The sink runs on the logging thread. Warnings and errors are logged with
/// no volume lock held, so a sink at the default console level may query a
/// volume. Debug traces are emitted under the volume lock; a sink that takes
/// them must not call back into the volume.
pub fn set_console_sink(sink: Option<fn(&LogEntry)>) {
    GLOBAL_LOG._set_console_sink(sink);
}

#[cfg(test)]
mod tests;
