//! Main logger facade
//!
//! A `Logger` owns a severity threshold and a sink registry and fans
//! accepted events out to every registered sink. Construction wires up
//! the console sink and the process's single file sink; see
//! [`FileSinkSlot`] for the single-open-file lifecycle.

use super::error::Result;
use super::format::format_positional;
use super::output_options::OutputOptions;
use super::record::LogRecord;
use super::severity::{Severity, SeverityLevel};
use super::sink::{Sink, SinkRegistry};
use crate::sinks::{ConsoleSink, FileSinkSlot};
use parking_lot::RwLock;
use std::fmt;
use std::path::PathBuf;

/// Diagnostic source name, resolved from the running executable.
fn resolve_source_name() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "logger".to_string())
}

pub struct Logger {
    source_name: String,
    threshold: RwLock<SeverityLevel>,
    sinks: RwLock<SinkRegistry>,
}

impl Logger {
    /// Create a logger writing to the given file path through the
    /// process-wide file sink slot. Opening the slot closes any file a
    /// previously constructed logger had open; an unwritable path fails
    /// construction with [`LoggerError::SinkOpen`].
    ///
    /// [`LoggerError::SinkOpen`]: super::error::LoggerError::SinkOpen
    pub fn new(log_path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_slot(log_path, &FileSinkSlot::global())
    }

    /// Create a logger writing through an explicit file sink slot.
    /// Loggers sharing a slot share the single-open-file invariant;
    /// loggers on separate slots are fully independent.
    pub fn with_slot(log_path: impl Into<PathBuf>, slot: &FileSinkSlot) -> Result<Self> {
        let source_name = resolve_source_name();
        let file_sink = slot.open(log_path)?;

        let mut registry = SinkRegistry::new();
        registry.add(Box::new(ConsoleSink::new()));
        registry.add(Box::new(file_sink));

        Ok(Self {
            source_name,
            threshold: RwLock::new(SeverityLevel::All),
            sinks: RwLock::new(registry),
        })
    }

    /// The logical source name, for diagnostic identification only.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Overwrite the minimum-severity threshold.
    pub fn set_threshold(&self, level: SeverityLevel) {
        *self.threshold.write() = level;
    }

    pub fn threshold(&self) -> SeverityLevel {
        *self.threshold.read()
    }

    /// Register an additional sink; a sink with an already-registered
    /// target is silently ignored.
    pub fn add_sink(&self, sink: Box<dyn Sink>) {
        self.sinks.write().add(sink);
    }

    /// Remove every registered sink. Sinks are dropped, which flushes
    /// them and releases their resources; a cleared file sink closes the
    /// slot's file.
    pub fn clear_sinks(&self) {
        self.sinks.write().clear();
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.read().len()
    }

    pub fn flush(&self) -> Result<()> {
        self.sinks.write().flush_all()
    }

    /// Shared emit path: decide the metadata policy for this severity,
    /// test the threshold, and on acceptance broadcast one record to
    /// every sink. Rejected events have no observable effect.
    fn emit(&self, severity: Severity, message: String) {
        let options = OutputOptions::for_severity(severity);

        if !self.threshold.read().accepts(severity) {
            return;
        }

        let record = LogRecord::new(severity, message, options);
        self.sinks.write().broadcast(&record);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.emit(Severity::Debug, message.into());
    }

    #[inline]
    pub fn information(&self, message: impl Into<String>) {
        self.emit(Severity::Information, message.into());
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.emit(Severity::Warning, message.into());
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.emit(Severity::Error, message.into());
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.emit(Severity::Fatal, message.into());
    }

    /// Emit with positional template substitution. A template/argument
    /// mismatch is a caller error and is returned, not swallowed.
    pub fn logf(
        &self,
        severity: Severity,
        template: &str,
        args: &[&dyn fmt::Display],
    ) -> Result<()> {
        let message = format_positional(template, args)?;
        self.emit(severity, message);
        Ok(())
    }

    pub fn debugf(&self, template: &str, args: &[&dyn fmt::Display]) -> Result<()> {
        self.logf(Severity::Debug, template, args)
    }

    pub fn informationf(&self, template: &str, args: &[&dyn fmt::Display]) -> Result<()> {
        self.logf(Severity::Information, template, args)
    }

    pub fn warningf(&self, template: &str, args: &[&dyn fmt::Display]) -> Result<()> {
        self.logf(Severity::Warning, template, args)
    }

    pub fn errorf(&self, template: &str, args: &[&dyn fmt::Display]) -> Result<()> {
        self.logf(Severity::Error, template, args)
    }

    pub fn fatalf(&self, template: &str, args: &[&dyn fmt::Display]) -> Result<()> {
        self.logf(Severity::Fatal, template, args)
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Flush on every exit path; the registry's file sink releases the
        // slot file when it drops.
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}
