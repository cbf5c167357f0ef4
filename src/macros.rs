//! Leveled, format-style logging macros over a [`LogStack`](crate::LogStack).
//!
//! # Feature Flags
//! Specific log levels are controlled by cargo features:
//! `log-debug`, `log-info`, `log-warning`, `log-error`, `log-critical`.
//!
//! If a feature is disabled, the corresponding macros expand to `()`, removing
//! all formatting and allocation overhead at compile time. Runtime thresholds
//! still apply to whatever remains compiled in.

#[macro_export]
macro_rules! stack_log {
    ($stack:expr, $lvl:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $stack.log($lvl, Some(__msg.as_str()), None);
    }};
}

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! stack_debug { ($stack:expr, $($arg:tt)*) => { $crate::stack_log!($stack, $crate::level::Severity::Debug, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! stack_debug {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! stack_info { ($stack:expr, $($arg:tt)*) => { $crate::stack_log!($stack, $crate::level::Severity::Info, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! stack_info {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- WARNING ----------------------
#[cfg(feature = "log-warning")]
#[macro_export]
macro_rules! stack_warning { ($stack:expr, $($arg:tt)*) => { $crate::stack_log!($stack, $crate::level::Severity::Warning, $($arg)*) } }

#[cfg(not(feature = "log-warning"))]
#[macro_export]
macro_rules! stack_warning {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! stack_error { ($stack:expr, $($arg:tt)*) => { $crate::stack_log!($stack, $crate::level::Severity::Error, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! stack_error {
    ($($arg:tt)*) => {
        ()
    };
}

// ---------------------- CRITICAL ----------------------
#[cfg(feature = "log-critical")]
#[macro_export]
macro_rules! stack_critical { ($stack:expr, $($arg:tt)*) => { $crate::stack_log!($stack, $crate::level::Severity::Critical, $($arg)*) } }

#[cfg(not(feature = "log-critical"))]
#[macro_export]
macro_rules! stack_critical {
    ($($arg:tt)*) => {
        ()
    };
}
