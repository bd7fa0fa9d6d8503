//! # Trace Logger
//!
//! A leveled logging facade: events carry one of five severities (Debug,
//! Information, Warning, Error, Fatal), are filtered against a
//! configurable minimum-severity threshold, and fan out to registered
//! sinks — a console sink with its own hardwired Information-and-above
//! filter, and a file sink with auto-flushed writes.
//!
//! ## Features
//!
//! - **Cumulative severity masks**: a threshold of `Warning` accepts
//!   Warning, Error, and Fatal
//! - **Per-severity metadata**: every line carries a timestamp; Error and
//!   Fatal lines additionally carry a call-stack trace
//! - **Single open log file**: at most one file sink is open per slot;
//!   constructing a new `Logger` supersedes the previous file sink
//!
//! ## Example
//!
//! ```no_run
//! use trace_logger::prelude::*;
//!
//! let logger = Logger::new("app.log").expect("open log file");
//! logger.set_threshold(SeverityLevel::Warning);
//!
//! logger.debug("not recorded");
//! logger.warning("low disk space");
//! logger.errorf("request {0} failed with {1}", &[&"GET /", &500]).unwrap();
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        format_positional, Logger, LoggerError, LogRecord, OutputOptions, Result, Severity,
        SeverityLevel, Sink, SinkRegistry, SinkTarget, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, FileSinkSlot};
}

pub use crate::core::{
    format_positional, Logger, LoggerError, LogRecord, OutputOptions, Result, Severity,
    SeverityLevel, Sink, SinkRegistry, SinkTarget, TimestampFormat,
};
pub use crate::sinks::{ConsoleSink, FileSink, FileSinkSlot};
