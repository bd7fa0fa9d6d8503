//! Console sink implementation

use crate::core::{
    LogRecord, Result, Severity, SeverityLevel, Sink, SinkTarget, TimestampFormat,
};
use colored::Colorize;
use std::io::Write;

/// Console noise control: the console only ever shows
/// Information-tier-and-above, independent of the Logger threshold.
const CONSOLE_FILTER: SeverityLevel = SeverityLevel::Information;

pub struct ConsoleSink {
    use_colors: bool,
    timestamp_format: TimestampFormat,
    /// Test seam: when set, all output goes to this writer instead of the
    /// real stdout/stderr streams.
    writer: Option<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            timestamp_format: TimestampFormat::default(),
            writer: None,
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            timestamp_format: TimestampFormat::default(),
            writer: None,
        }
    }

    /// Redirect all console output to the given writer. Colors are
    /// disabled since the writer is usually not a terminal.
    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            use_colors: false,
            timestamp_format: TimestampFormat::default(),
            writer: Some(writer),
        }
    }

    /// Set the timestamp format for this sink
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Whether the console's own hardwired filter lets this severity
    /// through. Layered on top of the Logger's configurable threshold.
    pub fn accepts(severity: Severity) -> bool {
        CONSOLE_FILTER.accepts(severity)
    }

    fn format_line(&self, record: &LogRecord) -> String {
        let line = record.render(&self.timestamp_format);
        if self.use_colors {
            let label = format!("[{}]", record.severity.to_str());
            let colored_label = label.color(record.severity.color_code()).to_string();
            line.replacen(&label, &colored_label, 1)
        } else {
            line
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        if !Self::accepts(record.severity) {
            return Ok(());
        }

        let output = self.format_line(record);
        match self.writer {
            Some(ref mut writer) => writeln!(writer, "{}", output)?,
            None => match record.severity {
                // Error and Fatal go to stderr, the rest to stdout
                Severity::Error | Severity::Fatal => eprintln!("{}", output),
                _ => println!("{}", output),
            },
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.writer {
            Some(ref mut writer) => writer.flush()?,
            None => {
                std::io::stdout().flush()?;
                std::io::stderr().flush()?;
            }
        }
        Ok(())
    }

    fn target(&self) -> SinkTarget {
        SinkTarget::Console
    }
}
