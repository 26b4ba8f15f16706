//! Main logger implementation

use super::{
    dispatch_policy::DispatchPolicy,
    error::{LoggerError, Result, WriterFailure},
    log_context::{ContextGuard, FieldValue, LogContext, LoggerContext},
    log_entry::LogEntry,
    metrics::LoggerMetrics,
    severity::Severity,
    writer::Writer,
};
use parking_lot::Mutex;

/// Dispatches log entries to an ordered list of writers
///
/// Every call to [`Logger::log`] builds one [`LogEntry`] and hands it to
/// each writer in registration order, synchronously, on the calling
/// thread. How a failing writer affects the rest of the chain is set by
/// [`DispatchPolicy`].
///
/// Adding writers takes `&mut self`, so the writer list cannot change
/// while the logger is shared. A writer must not log back into the
/// logger that owns it; the writer list is locked during dispatch.
pub struct Logger {
    writers: Mutex<Vec<Box<dyn Writer>>>,
    policy: DispatchPolicy,
    /// Fields merged into every entry
    context: LoggerContext,
    metrics: LoggerMetrics,
    shut_down: bool,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self::with_policy(DispatchPolicy::default())
    }

    #[must_use]
    pub fn with_policy(policy: DispatchPolicy) -> Self {
        Self {
            writers: Mutex::new(Vec::new()),
            policy,
            context: LoggerContext::new(),
            metrics: LoggerMetrics::new(),
            shut_down: false,
        }
    }

    /// Append a writer; no de-duplication is performed
    pub fn add_writer(&mut self, writer: Box<dyn Writer>) {
        self.writers.get_mut().push(writer);
    }

    pub fn writer_count(&self) -> usize {
        self.writers.lock().len()
    }

    pub fn dispatch_policy(&self) -> DispatchPolicy {
        self.policy
    }

    pub fn set_dispatch_policy(&mut self, policy: DispatchPolicy) {
        self.policy = policy;
    }

    /// Log `message` at `level` with structured `context`
    ///
    /// # Errors
    ///
    /// - [`LoggerError::NoWriters`] if no writer has been added
    /// - under [`DispatchPolicy::FailFast`], the first writer error, unchanged
    /// - under [`DispatchPolicy::Continue`], [`LoggerError::Dispatch`]
    ///   collecting every writer error
    pub fn log(
        &self,
        level: Severity,
        message: impl Into<String>,
        mut context: LogContext,
    ) -> Result<()> {
        let mut writers = self.writers.lock();
        if writers.is_empty() {
            return Err(LoggerError::NoWriters);
        }

        self.context.merge_into(&mut context);
        let entry = LogEntry::new(level, message, context);
        self.dispatch(&mut writers, &entry)
    }

    /// Log with an integer severity, validated before anything is dispatched
    pub fn log_ordinal(
        &self,
        ordinal: i64,
        message: impl Into<String>,
        context: LogContext,
    ) -> Result<()> {
        let level = Severity::from_ordinal(ordinal)?;
        self.log(level, message, context)
    }

    fn dispatch(&self, writers: &mut [Box<dyn Writer>], entry: &LogEntry) -> Result<()> {
        self.metrics.record_dispatched();

        match self.policy {
            DispatchPolicy::FailFast => {
                for writer in writers.iter_mut() {
                    if let Err(e) = writer.write(entry) {
                        self.metrics.record_writer_failure();
                        self.metrics.record_failed_dispatch();
                        return Err(e);
                    }
                }
                Ok(())
            }
            DispatchPolicy::Continue => {
                let total = writers.len();
                let mut failures = Vec::new();

                for (index, writer) in writers.iter_mut().enumerate() {
                    if let Err(error) = writer.write(entry) {
                        self.metrics.record_writer_failure();
                        eprintln!(
                            "[LOGGER ERROR] Writer #{} ({}) failed: {}",
                            index,
                            writer.name(),
                            error
                        );
                        failures.push(WriterFailure {
                            index,
                            writer: writer.name().to_string(),
                            error,
                        });
                    }
                }

                if failures.is_empty() {
                    Ok(())
                } else {
                    self.metrics.record_failed_dispatch();
                    Err(LoggerError::Dispatch { total, failures })
                }
            }
        }
    }

    #[inline]
    pub fn emergency(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Emergency, message, LogContext::new())
    }

    #[inline]
    pub fn alert(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Alert, message, LogContext::new())
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Critical, message, LogContext::new())
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Error, message, LogContext::new())
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Warning, message, LogContext::new())
    }

    #[inline]
    pub fn notice(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Notice, message, LogContext::new())
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Info, message, LogContext::new())
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) -> Result<()> {
        self.log(Severity::Debug, message, LogContext::new())
    }

    /// Persistent fields merged into every entry
    pub fn context(&self) -> &LoggerContext {
        &self.context
    }

    /// Add a persistent field for the lifetime of the returned guard
    pub fn with_context<K, V>(&self, key: K, value: V) -> ContextGuard
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.context.scoped(key, value)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        let mut writers = self.writers.lock();
        for writer in writers.iter_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    /// Shut every writer down
    ///
    /// All writers are shut down even if one fails; the first error is
    /// returned. Later calls (including the one from `Drop`) do nothing.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.shut_down {
            return Ok(());
        }
        self.shut_down = true;

        let mut first_error = None;
        for (idx, writer) in self.writers.get_mut().iter_mut().enumerate() {
            if let Err(e) = writer.shutdown() {
                eprintln!("[LOGGER ERROR] Writer #{} shutdown failed: {}", idx, e);
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            eprintln!("[LOGGER WARNING] Logger dropped with failed writer shutdown: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use rust_log_bridge::prelude::*;
/// use std::sync::Arc;
///
/// let logger = Logger::builder()
///     .writer(AdapterWriter::new(Arc::new(NullLogger)))
///     .writer(MemoryWriter::new())
///     .dispatch_policy(DispatchPolicy::Continue)
///     .context_field("service", "billing")
///     .build();
///
/// assert_eq!(logger.writer_count(), 2);
/// ```
pub struct LoggerBuilder {
    writers: Vec<Box<dyn Writer>>,
    policy: DispatchPolicy,
    context: LogContext,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            writers: Vec::new(),
            policy: DispatchPolicy::default(),
            context: LogContext::new(),
        }
    }

    /// Add a writer after those already added
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Writer + 'static>(mut self, writer: W) -> Self {
        self.writers.push(Box::new(writer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn dispatch_policy(mut self, policy: DispatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Add a persistent field merged into every entry
    #[must_use = "builder methods return a new value"]
    pub fn context_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.context.add_field(key, value);
        self
    }

    pub fn build(self) -> Logger {
        let mut logger = Logger::with_policy(self.policy);
        for (key, value) in self.context.iter() {
            logger.context.set(key, value.clone());
        }
        for writer in self.writers {
            logger.add_writer(writer);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
