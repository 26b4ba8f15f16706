//! Expose a [`Logger`] through the external logger contract

use crate::core::{ExternalLogger, LevelMap, LogContext, Logger, Result};
use std::sync::Arc;

/// Lets code written against [`ExternalLogger`] log into this framework
///
/// The level name is translated back with
/// [`LevelMap::from_external_name`]; unknown names are rejected before
/// anything is dispatched.
///
/// Do not wrap a bridge in an [`AdapterWriter`](crate::writers::AdapterWriter)
/// registered on the same logger: dispatch would re-enter the logger.
///
/// # Example
///
/// ```
/// use rust_log_bridge::prelude::*;
/// use std::sync::Arc;
///
/// let memory = MemoryWriter::new();
/// let logger = Arc::new(Logger::builder().writer(memory.clone()).build());
/// let bridge = LoggerBridge::new(Arc::clone(&logger));
///
/// bridge.log("warning", "quota at 90%", &LogContext::new())?;
/// assert_eq!(memory.entries()[0].level(), Severity::Warning);
/// # Ok::<(), LoggerError>(())
/// ```
#[derive(Clone)]
pub struct LoggerBridge {
    logger: Arc<Logger>,
}

impl LoggerBridge {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Arc<Logger> {
        &self.logger
    }
}

impl ExternalLogger for LoggerBridge {
    fn log(&self, level: &str, message: &str, context: &LogContext) -> Result<()> {
        let level = LevelMap::from_external_name(level)?;
        self.logger.log(level, message, context.clone())
    }
}
