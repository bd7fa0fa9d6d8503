//! Sink trait and the de-duplicating sink registry

use super::error::Result;
use super::record::LogRecord;
use std::path::PathBuf;

/// Identity of a sink's underlying write target, used for registry
/// de-duplication. Two sinks aimed at the same target compare equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkTarget {
    Console,
    File(PathBuf),
    Custom(String),
}

/// A destination that renders and persists accepted log records.
pub trait Sink: Send {
    fn append(&mut self, record: &LogRecord) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn target(&self) -> SinkTarget;
}

/// Ordered set of sinks with no-op-on-duplicate insertion.
#[derive(Default)]
pub struct SinkRegistry {
    sinks: Vec<Box<dyn Sink>>,
}

impl SinkRegistry {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    /// Insert a sink unless one with an equal target is already present.
    /// Silently dropping the duplicate is intentional idempotence.
    pub fn add(&mut self, sink: Box<dyn Sink>) {
        let target = sink.target();
        if self.sinks.iter().any(|existing| existing.target() == target) {
            return;
        }
        self.sinks.push(sink);
    }

    /// Remove every sink. Dropping a sink flushes it and releases any
    /// resource it owns, so cleared sinks are fully closed.
    pub fn clear(&mut self) {
        self.sinks.clear();
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    /// Hand the record to every registered sink. A failing sink does not
    /// stop the fan-out; its error is reported on stderr.
    pub fn broadcast(&mut self, record: &LogRecord) {
        for (idx, sink) in self.sinks.iter_mut().enumerate() {
            if let Err(e) = sink.append(record) {
                eprintln!("[LOGGER ERROR] Sink #{} failed: {}", idx, e);
            }
        }
    }

    pub fn flush_all(&mut self) -> Result<()> {
        for sink in self.sinks.iter_mut() {
            sink.flush()?;
        }
        Ok(())
    }
}
