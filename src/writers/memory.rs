//! Writer that keeps entries in memory

use crate::core::{LogEntry, Result, Writer, WriterCore, WriterOptions};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct Storage {
    entries: Mutex<Vec<LogEntry>>,
    lines: Mutex<Vec<String>>,
    shutdowns: AtomicUsize,
}

/// Stores every accepted entry and its formatted line
///
/// Clones share storage, so a clone kept outside the logger can inspect
/// what the registered writer received. Filters and formatter are not
/// shared: a clone starts with an empty chain and [`SimpleFormatter`].
///
/// [`SimpleFormatter`]: crate::formatters::SimpleFormatter
///
/// # Example
///
/// ```
/// use rust_log_bridge::prelude::*;
///
/// let memory = MemoryWriter::new();
/// let logger = Logger::builder().writer(memory.clone()).build();
///
/// logger.notice("cache warmed")?;
/// assert_eq!(memory.entries()[0].message(), "cache warmed");
/// # Ok::<(), LoggerError>(())
/// ```
pub struct MemoryWriter {
    core: WriterCore,
    storage: Arc<Storage>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self {
            core: WriterCore::new(),
            storage: Arc::new(Storage::default()),
        }
    }

    pub fn with_options(options: WriterOptions) -> Result<Self> {
        Ok(Self {
            core: WriterCore::from_options("MemoryWriter", options)?,
            storage: Arc::new(Storage::default()),
        })
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        self.storage.entries.lock().clone()
    }

    /// Formatted lines, one per accepted entry
    pub fn lines(&self) -> Vec<String> {
        self.storage.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.storage.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.storage.entries.lock().clear();
        self.storage.lines.lock().clear();
    }

    /// How many times `shutdown` ran on this writer or any clone
    pub fn shutdown_count(&self) -> usize {
        self.storage.shutdowns.load(Ordering::Relaxed)
    }
}

impl Default for MemoryWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for MemoryWriter {
    fn clone(&self) -> Self {
        Self {
            core: WriterCore::new(),
            storage: Arc::clone(&self.storage),
        }
    }
}

impl Writer for MemoryWriter {
    fn core(&self) -> &WriterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WriterCore {
        &mut self.core
    }

    fn write(&mut self, entry: &LogEntry) -> Result<()> {
        if !self.core.accepts(entry) {
            return Ok(());
        }

        let line = self.core.format(entry);
        self.storage.entries.lock().push(entry.clone());
        self.storage.lines.lock().push(line);
        Ok(())
    }

    fn shutdown(&mut self) -> Result<()> {
        self.storage.shutdowns.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
