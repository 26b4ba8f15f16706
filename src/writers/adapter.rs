//! Writer that delegates to an external logger

use crate::core::{
    ExternalLogger, LevelMap, LogEntry, Result, Writer, WriterCore, WriterOptions,
};
use crate::sinks::NullLogger;
use std::sync::Arc;

/// Routes entries into an [`ExternalLogger`]
///
/// For each entry that passes the filter chain, the severity is
/// translated with [`LevelMap`] and the external logger receives exactly
/// one `log(level_name, message, context)` call. The message and context
/// are passed through untouched: the configured formatter is not applied,
/// since the external logger interpolates on its own.
///
/// Errors from the external logger are returned unchanged.
///
/// # Example
///
/// ```
/// use rust_log_bridge::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemoryLogger::new());
/// let mut logger = Logger::new();
/// logger.add_writer(Box::new(AdapterWriter::new(sink.clone())));
///
/// logger.log(Severity::Emergency, "foo", context! { "bar" => "baz" })?;
///
/// let calls = sink.calls();
/// assert_eq!(calls.len(), 1);
/// assert_eq!(calls[0].level, "emergency");
/// assert_eq!(calls[0].message, "foo");
/// # Ok::<(), LoggerError>(())
/// ```
pub struct AdapterWriter {
    core: WriterCore,
    logger: Arc<dyn ExternalLogger>,
}

impl AdapterWriter {
    /// Delegate to `logger`, with no filters and the default formatter
    pub fn new(logger: Arc<dyn ExternalLogger>) -> Self {
        Self {
            core: WriterCore::new(),
            logger,
        }
    }

    /// Build from options; without a `logger` the writer uses [`NullLogger`]
    pub fn with_options(mut options: WriterOptions) -> Result<Self> {
        let logger = options
            .logger
            .take()
            .unwrap_or_else(|| Arc::new(NullLogger) as Arc<dyn ExternalLogger>);
        let core = WriterCore::from_options("AdapterWriter", options)?;
        Ok(Self { core, logger })
    }

    pub fn logger(&self) -> &Arc<dyn ExternalLogger> {
        &self.logger
    }
}

impl Default for AdapterWriter {
    fn default() -> Self {
        Self::new(Arc::new(NullLogger))
    }
}

impl From<Arc<dyn ExternalLogger>> for AdapterWriter {
    fn from(logger: Arc<dyn ExternalLogger>) -> Self {
        Self::new(logger)
    }
}

impl Writer for AdapterWriter {
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

        let level = LevelMap::to_external_name(entry.level());
        self.logger.log(level, entry.message(), entry.context())
    }

    fn name(&self) -> &str {
        "adapter"
    }
}
