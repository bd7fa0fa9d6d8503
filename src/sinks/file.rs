//! File sink implementation
//!
//! The process keeps at most one log file open for writing at a time.
//! That invariant lives in [`FileSinkSlot`], an explicit shared handle:
//! opening the slot closes whatever file it previously held and hands
//! back a [`FileSink`] bound to the new file's generation. A sink whose
//! generation has been superseded writes nowhere.

use crate::core::{LoggerError, LogRecord, Result, Sink, SinkTarget, TimestampFormat};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

static GLOBAL_SLOT: OnceLock<FileSinkSlot> = OnceLock::new();

struct SlotState {
    file: Option<File>,
    generation: u64,
}

/// Shared handle to the single open log file.
///
/// All open/write/close transitions are serialized by one mutex, so two
/// Loggers racing to construct cannot interleave the close of the old
/// file with the open of the new one. Clones share the same slot.
#[derive(Clone)]
pub struct FileSinkSlot {
    inner: Arc<Mutex<SlotState>>,
}

impl FileSinkSlot {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SlotState {
                file: None,
                generation: 0,
            })),
        }
    }

    /// The process-wide default slot. Loggers built with [`Logger::new`]
    /// share it; tests normally construct private slots instead.
    ///
    /// [`Logger::new`]: crate::core::Logger::new
    pub fn global() -> Self {
        GLOBAL_SLOT.get_or_init(Self::new).clone()
    }

    /// Close the currently open file, if any, and open a new one at
    /// `path` in create/append mode. Returns a sink bound to the new
    /// file; sinks from earlier opens become inert.
    pub fn open(&self, path: impl Into<PathBuf>) -> Result<FileSink> {
        let path = path.into();
        let mut state = self.inner.lock();

        if let Some(previous) = state.file.take() {
            // Release the predecessor before the new open so the slot
            // never holds two files.
            let _ = previous.sync_all();
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::sink_open(path.display().to_string(), e))?;

        state.generation += 1;
        state.file = Some(file);

        Ok(FileSink {
            slot: self.clone(),
            generation: state.generation,
            path,
            timestamp_format: TimestampFormat::default(),
        })
    }

    /// Write one line through the slot, provided `generation` still names
    /// the open file. A stale generation is a silent no-op: writes from a
    /// superseded Logger must not reach the current file.
    fn write_line(&self, generation: u64, line: &str) -> Result<()> {
        let mut state = self.inner.lock();
        if state.generation != generation {
            return Ok(());
        }

        if let Some(ref mut file) = state.file {
            file.write_all(line.as_bytes())?;
            file.write_all(b"\n")?;
            // Every write is immediately durable
            file.flush()?;
        }
        Ok(())
    }

    fn flush(&self, generation: u64) -> Result<()> {
        let mut state = self.inner.lock();
        if state.generation != generation {
            return Ok(());
        }
        if let Some(ref mut file) = state.file {
            file.flush()?;
        }
        Ok(())
    }

    /// Close the open file if `generation` still owns it. Closing an
    /// already-superseded or already-closed file is a no-op.
    fn close(&self, generation: u64) {
        let mut state = self.inner.lock();
        if state.generation != generation {
            return;
        }
        if let Some(file) = state.file.take() {
            let _ = file.sync_all();
        }
    }

    /// Whether the slot currently holds an open file.
    pub fn is_open(&self) -> bool {
        self.inner.lock().file.is_some()
    }
}

impl Default for FileSinkSlot {
    fn default() -> Self {
        Self::new()
    }
}

/// A registered sink writing through the slot's current file.
pub struct FileSink {
    slot: FileSinkSlot,
    generation: u64,
    path: PathBuf,
    timestamp_format: TimestampFormat,
}

impl FileSink {
    /// Set the timestamp format for this sink
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Sink for FileSink {
    fn append(&mut self, record: &LogRecord) -> Result<()> {
        let line = record.render(&self.timestamp_format);
        self.slot.write_line(self.generation, &line)
    }

    fn flush(&mut self) -> Result<()> {
        self.slot.flush(self.generation)
    }

    fn target(&self) -> SinkTarget {
        SinkTarget::File(self.path.clone())
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Release the file only if a newer open has not taken the slot
        self.slot.close(self.generation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{OutputOptions, Severity};
    use std::fs;
    use tempfile::TempDir;

    fn record(message: &str) -> LogRecord {
        LogRecord::new(
            Severity::Information,
            message.to_string(),
            OutputOptions::NONE,
        )
    }

    #[test]
    fn test_writes_are_durable_without_explicit_flush() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("durable.log");

        let slot = FileSinkSlot::new();
        let mut sink = slot.open(&path).expect("open file sink");
        sink.append(&record("first")).unwrap();

        // No flush() call; auto-flush must have persisted the line
        let content = fs::read_to_string(&path).expect("read log");
        assert!(content.contains("first"));
    }

    #[test]
    fn test_open_failure_propagates() {
        let slot = FileSinkSlot::new();
        let err = slot
            .open("/nonexistent-dir-for-sure/app.log")
            .err()
            .expect("open should fail");
        assert!(matches!(err, LoggerError::SinkOpen { .. }));
    }

    #[test]
    fn test_reopen_invalidates_previous_sink() {
        let temp_dir = TempDir::new().expect("temp dir");
        let first_path = temp_dir.path().join("first.log");
        let second_path = temp_dir.path().join("second.log");

        let slot = FileSinkSlot::new();
        let mut first = slot.open(&first_path).expect("open first");
        first.append(&record("before reopen")).unwrap();

        let mut second = slot.open(&second_path).expect("open second");

        // Writes through the stale sink reach neither file
        first.append(&record("after reopen")).unwrap();
        second.append(&record("current")).unwrap();

        let first_content = fs::read_to_string(&first_path).expect("read first");
        assert!(first_content.contains("before reopen"));
        assert!(!first_content.contains("after reopen"));

        let second_content = fs::read_to_string(&second_path).expect("read second");
        assert!(second_content.contains("current"));
        assert!(!second_content.contains("after reopen"));
    }

    #[test]
    fn test_stale_drop_does_not_close_current_file() {
        let temp_dir = TempDir::new().expect("temp dir");
        let slot = FileSinkSlot::new();

        let first = slot.open(temp_dir.path().join("a.log")).expect("open a");
        let mut second = slot.open(temp_dir.path().join("b.log")).expect("open b");

        drop(first);
        assert!(slot.is_open(), "dropping a stale sink must not close the slot");

        second.append(&record("still writable")).unwrap();
        let content = fs::read_to_string(temp_dir.path().join("b.log")).expect("read b");
        assert!(content.contains("still writable"));
    }

    #[test]
    fn test_drop_closes_own_file() {
        let temp_dir = TempDir::new().expect("temp dir");
        let slot = FileSinkSlot::new();

        let sink = slot.open(temp_dir.path().join("a.log")).expect("open");
        assert!(slot.is_open());
        drop(sink);
        assert!(!slot.is_open());
    }

    #[test]
    fn test_target_identity_is_path_based() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("a.log");
        let slot = FileSinkSlot::new();
        let sink = slot.open(&path).expect("open");
        assert_eq!(sink.target(), SinkTarget::File(path));
    }
}
