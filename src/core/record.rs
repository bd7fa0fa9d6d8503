//! Log record structure
//!
//! A `LogRecord` exists only for the duration of one emit call: it carries
//! the event severity, the sanitized message, and whatever optional
//! metadata the call's `OutputOptions` requested.

use super::output_options::OutputOptions;
use super::severity::Severity;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Utc};
use std::backtrace::Backtrace;

#[derive(Debug, Clone)]
pub struct LogRecord {
    pub severity: Severity,
    pub message: String,
    /// Present iff the call's options requested a timestamp.
    pub timestamp: Option<DateTime<Utc>>,
    /// Present iff the call's options requested a call stack. Flattened
    /// to a single sanitized line.
    pub call_stack: Option<String>,
}

impl LogRecord {
    /// Sanitize text to keep each record on a single output line.
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a message cannot inject fake log entries.
    fn sanitize(text: &str) -> String {
        text.replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(severity: Severity, message: String, options: OutputOptions) -> Self {
        let call_stack = if options.include_call_stack {
            Some(Self::sanitize(&Backtrace::force_capture().to_string()))
        } else {
            None
        };

        Self {
            severity,
            message: Self::sanitize(&message),
            timestamp: options.include_timestamp.then(Utc::now),
            call_stack,
        }
    }

    /// Render this record as a plain text line: the optional timestamp,
    /// the severity label, the message, and the optional call stack.
    pub fn render(&self, timestamp_format: &TimestampFormat) -> String {
        let mut line = String::new();

        if let Some(ref timestamp) = self.timestamp {
            line.push('[');
            line.push_str(&timestamp_format.format(timestamp));
            line.push_str("] ");
        }

        line.push('[');
        line.push_str(self.severity.to_str());
        line.push_str("] ");
        line.push_str(&self.message);

        if let Some(ref stack) = self.call_stack {
            line.push_str(" | stack: ");
            line.push_str(stack);
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_without_metadata() {
        let record = LogRecord::new(
            Severity::Information,
            "hello".to_string(),
            OutputOptions::NONE,
        );
        assert!(record.timestamp.is_none());
        assert!(record.call_stack.is_none());
        assert_eq!(
            record.render(&TimestampFormat::Iso8601),
            "[INFORMATION] hello"
        );
    }

    #[test]
    fn test_record_with_timestamp_only() {
        let options = OutputOptions::for_severity(Severity::Warning);
        let record = LogRecord::new(Severity::Warning, "careful".to_string(), options);
        assert!(record.timestamp.is_some());
        assert!(record.call_stack.is_none());

        let line = record.render(&TimestampFormat::Iso8601);
        assert!(line.starts_with('['));
        assert!(line.contains("[WARNING] careful"));
        assert!(!line.contains("stack:"));
    }

    #[test]
    fn test_record_with_call_stack() {
        let options = OutputOptions::for_severity(Severity::Error);
        let record = LogRecord::new(Severity::Error, "boom".to_string(), options);
        assert!(record.timestamp.is_some());
        assert!(record.call_stack.is_some());

        let line = record.render(&TimestampFormat::Iso8601);
        assert!(line.contains("[ERROR] boom"));
        assert!(line.contains("| stack: "));
    }

    #[test]
    fn test_message_sanitization() {
        let record = LogRecord::new(
            Severity::Information,
            "line1\nline2\twith\rextras".to_string(),
            OutputOptions::NONE,
        );
        assert_eq!(record.message, "line1\\nline2\\twith\\rextras");
        assert_eq!(record.render(&TimestampFormat::Iso8601).lines().count(), 1);
    }

    #[test]
    fn test_call_stack_is_single_line() {
        let options = OutputOptions::for_severity(Severity::Fatal);
        let record = LogRecord::new(Severity::Fatal, "x".to_string(), options);
        let stack = record.call_stack.expect("fatal records carry a stack");
        assert!(!stack.contains('\n'));
    }
}
