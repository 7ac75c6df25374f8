//! Logging macros
//!
//! `pr_*` macros, one per [`LogLevel`](super::LogLevel). The level check runs
//! before `format_args!` is evaluated, so disabled levels cost one atomic load.

/// Internal implementation macro with level filtering
#[macro_export]
#[doc(hidden)]
macro_rules! __log_impl_filtered {
    ($level:expr, $args:expr) => {
        if $crate::log::is_level_enabled($level) {
            $crate::log::log_impl($level, $args);
        }
    };
}

/// Logs a message at the EMERGENCY level (system unusable)
#[macro_export]
macro_rules! pr_emerg {
    ($($arg:tt)*) => {
        $crate::__log_impl_filtered!(
            $crate::log::LogLevel::Emergency,
            format_args!($($arg)*)
        )
    }
}

/// Logs a message at the ALERT level
#[macro_export]
macro_rules! pr_alert {
    ($($arg:tt)*) => {
        $crate::__log_impl_filtered!(
            $crate::log::LogLevel::Alert,
            format_args!($($arg)*)
        )
    }
}

/// Logs a message at the CRITICAL level
#[macro_export]
macro_rules! pr_crit {
    ($($arg:tt)*) => {
        $crate::__log_impl_filtered!(
            $crate::log::LogLevel::Critical,
            format_args!($($arg)*)
        )
    }
}

/// Logs a message at the ERROR level
///
/// ```ignore
/// pr_err!("growth by {} bytes failed", n);
/// ```
#[macro_export]
macro_rules! pr_err {
    ($($arg:tt)*) => {
        $crate::__log_impl_filtered!(
            $crate::log::LogLevel::Error,
            format_args!($($arg)*)
        )
    }
}

/// Logs a message at the WARNING level
#[macro_export]
macro_rules! pr_warn {
    ($($arg:tt)*) => {
        $crate::__log_impl_filtered!(
            $crate::log::LogLevel::Warning,
            format_args!($($arg)*)
        )
    }
}

/// Logs a message at the NOTICE level
#[macro_export]
macro_rules! pr_notice {
    ($($arg:tt)*) => {
        $crate::__log_impl_filtered!(
            $crate::log::LogLevel::Notice,
            format_args!($($arg)*)
        )
    }
}

/// Logs a message at the INFO level
#[macro_export]
macro_rules! pr_info {
    ($($arg:tt)*) => {
        $crate::__log_impl_filtered!(
            $crate::log::LogLevel::Info,
            format_args!($($arg)*)
        )
    }
}

/// Logs a message at the DEBUG level
///
/// Filtered out by the default global level.
#[macro_export]
macro_rules! pr_debug {
    ($($arg:tt)*) => {
        $crate::__log_impl_filtered!(
            $crate::log::LogLevel::Debug,
            format_args!($($arg)*)
        )
    }
}
