//! Core logger types and traits

pub mod error;
pub mod format;
pub mod logger;
pub mod output_options;
pub mod record;
pub mod severity;
pub mod sink;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use format::format_positional;
pub use logger::Logger;
pub use output_options::OutputOptions;
pub use record::LogRecord;
pub use severity::{Severity, SeverityLevel};
pub use sink::{Sink, SinkRegistry, SinkTarget};
pub use timestamp::TimestampFormat;
