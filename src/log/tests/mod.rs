use super::level::LogLevel;
use super::log_core::LogCore;

/// Logs into a private `LogCore` the way the `pr_*` macros log into the
/// global one.
macro_rules! test_log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {
        $logger._log($level, format_args!($($arg)*))
    };
}
