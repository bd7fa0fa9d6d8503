//! Sink implementations

pub mod console;
pub mod file;

pub use console::ConsoleSink;
pub use file::{FileSink, FileSinkSlot};

// Re-export the trait alongside its implementations
pub use crate::core::Sink;
