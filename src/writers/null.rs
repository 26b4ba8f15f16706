//! Writer that discards everything

use crate::core::{LogEntry, Result, Writer, WriterCore, WriterOptions};

/// Runs the filter chain, then drops the entry
///
/// Filters still observe each entry, which makes this writer useful
/// for counting or sampling without producing output.
#[derive(Default)]
pub struct NullWriter {
    core: WriterCore,
    discarded: u64,
}

impl NullWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: WriterOptions) -> Result<Self> {
        Ok(Self {
            core: WriterCore::from_options("NullWriter", options)?,
            discarded: 0,
        })
    }

    /// Entries that passed the filters and were dropped
    pub fn discarded(&self) -> u64 {
        self.discarded
    }
}

impl Writer for NullWriter {
    fn core(&self) -> &WriterCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut WriterCore {
        &mut self.core
    }

    fn write(&mut self, entry: &LogEntry) -> Result<()> {
        if self.core.accepts(entry) {
            self.discarded += 1;
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}
