//! Log levels, numbered like the Linux kernel's `KERN_*` priorities

/// Log priority, lower is more urgent.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// System unusable
    Emergency = 0,
    /// Action must be taken immediately
    Alert = 1,
    /// Critical conditions
    Critical = 2,
    /// Error conditions
    Error = 3,
    /// Warning conditions
    Warning = 4,
    /// Normal but significant
    Notice = 5,
    /// Informational
    Info = 6,
    /// Debug-level messages
    Debug = 7,
}

impl LogLevel {
    /// Bracketed tag used when an entry is displayed.
    pub const fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Emergency => "[EMERG]",
            LogLevel::Alert => "[ALERT]",
            LogLevel::Critical => "[CRIT]",
            LogLevel::Error => "[ERR]",
            LogLevel::Warning => "[WARNING]",
            LogLevel::Notice => "[NOTICE]",
            LogLevel::Info => "[INFO]",
            LogLevel::Debug => "[DEBUG]",
        }
    }

    /// Inverse of `level as u8`; out-of-range values clamp to `Debug`.
    pub const fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Emergency,
            1 => LogLevel::Alert,
            2 => LogLevel::Critical,
            3 => LogLevel::Error,
            4 => LogLevel::Warning,
            5 => LogLevel::Notice,
            6 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }
}
