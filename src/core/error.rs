//! Error types for the logging facade

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// File sink could not be opened or created. Fatal to Logger
    /// construction; always propagated to the caller.
    #[error("failed to open log sink at '{path}': {source}")]
    SinkOpen {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Positional template and argument list do not agree.
    #[error("format argument mismatch in template '{template}': {reason}")]
    FormatArgumentMismatch { template: String, reason: String },

    /// Generic IO error from a sink transport
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sink error (generic)
    #[error("sink error: {0}")]
    Sink(String),
}

impl LoggerError {
    /// Create a sink open error for the given path
    pub fn sink_open(path: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::SinkOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a format argument mismatch error
    pub fn format_mismatch(template: impl Into<String>, reason: impl Into<String>) -> Self {
        LoggerError::FormatArgumentMismatch {
            template: template.into(),
            reason: reason.into(),
        }
    }

    /// Create a generic sink error
    pub fn sink<S: Into<String>>(msg: S) -> Self {
        LoggerError::Sink(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::sink_open("/var/log/app.log", io_err);
        assert!(matches!(err, LoggerError::SinkOpen { .. }));

        let err = LoggerError::format_mismatch("{0}-{1}", "missing argument 1");
        assert!(matches!(err, LoggerError::FormatArgumentMismatch { .. }));
    }

    #[test]
    fn test_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = LoggerError::sink_open("/missing/app.log", io_err);
        assert!(err.to_string().contains("/missing/app.log"));
        assert!(err.to_string().contains("no such directory"));

        let err = LoggerError::format_mismatch("{2}", "argument index 2 out of range");
        assert_eq!(
            err.to_string(),
            "format argument mismatch in template '{2}': argument index 2 out of range"
        );
    }
}
