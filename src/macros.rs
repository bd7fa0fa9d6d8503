//! Logging macros for ergonomic message formatting.
//!
//! These wrap the plain emit methods with `format!` interpolation, for
//! call sites that prefer Rust format strings over the positional
//! `*f` template variants.
//!
//! # Examples
//!
//! ```no_run
//! use trace_logger::prelude::*;
//! use trace_logger::information;
//!
//! let logger = Logger::new("app.log").expect("open log file");
//!
//! let port = 8080;
//! information!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit severity with automatic formatting.
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        match $severity {
            $crate::Severity::Debug => $logger.debug(format!($($arg)+)),
            $crate::Severity::Information => $logger.information(format!($($arg)+)),
            $crate::Severity::Warning => $logger.warning(format!($($arg)+)),
            $crate::Severity::Error => $logger.error(format!($($arg)+)),
            $crate::Severity::Fatal => $logger.fatal(format!($($arg)+)),
        }
    };
}

/// Log a debug-severity message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an information-severity message.
#[macro_export]
macro_rules! information {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Information, $($arg)+)
    };
}

/// Log a warning-severity message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-severity message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a fatal-severity message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Fatal, $($arg)+)
    };
}
