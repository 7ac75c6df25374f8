//! Logging configuration

use super::level::LogLevel;

/// Number of entries kept in the ring before the oldest is overwritten
pub const MAX_LOG_ENTRIES: usize = 64;

/// Maximum length of a single log message
pub const MAX_LOG_MESSAGE_LENGTH: usize = 128;

/// Default recording level
pub const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

/// Default console level
pub const DEFAULT_CONSOLE_LEVEL: LogLevel = LogLevel::Warning;
