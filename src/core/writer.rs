//! Writer trait, shared writer state, and writer construction options

use super::{
    error::{LoggerError, Result},
    external_logger::ExternalLogger,
    filter::Filter,
    formatter::Formatter,
    log_entry::LogEntry,
};
use crate::filters::PriorityFilter;
use crate::formatters::SimpleFormatter;
use std::sync::Arc;

/// A log destination with its own filter chain and formatter
///
/// Implementors expose their [`WriterCore`]; filter and formatter
/// management is provided on top of it.
pub trait Writer: Send {
    fn core(&self) -> &WriterCore;
    fn core_mut(&mut self) -> &mut WriterCore;

    /// Emit `entry` if every filter accepts it
    ///
    /// A rejected entry is not an error: the call returns `Ok(())` and
    /// nothing is written.
    fn write(&mut self, entry: &LogEntry) -> Result<()>;

    fn name(&self) -> &str;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    /// Called once when the owning logger shuts down
    fn shutdown(&mut self) -> Result<()> {
        self.flush()
    }

    /// Append a filter; filters run in the order they were added
    fn add_filter(&mut self, filter: Box<dyn Filter>) {
        self.core_mut().add_filter(filter);
    }

    fn set_formatter(&mut self, formatter: Box<dyn Formatter>) {
        self.core_mut().set_formatter(formatter);
    }

    fn filters(&self) -> &[Box<dyn Filter>] {
        self.core().filters()
    }

    fn formatter(&self) -> &dyn Formatter {
        self.core().formatter()
    }
}

/// Filter chain and formatter owned by every writer
pub struct WriterCore {
    filters: Vec<Box<dyn Filter>>,
    formatter: Box<dyn Formatter>,
}

impl WriterCore {
    /// Empty filter chain, [`SimpleFormatter`]
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
            formatter: Box::new(SimpleFormatter::new()),
        }
    }

    /// Build from options for a writer that does not delegate
    ///
    /// `component` names the writer in configuration errors. A `logger`
    /// left in `options` is rejected, so delegating writers must take it
    /// out first.
    pub fn from_options(component: &str, options: WriterOptions) -> Result<Self> {
        if options.logger.is_some() {
            return Err(LoggerError::config(
                component,
                "option 'logger' is only recognized by delegating writers",
            ));
        }

        let mut core = Self::new();
        for filter in options.filters {
            core.add_filter(filter.into_filter(component)?);
        }
        if let Some(formatter) = options.formatter {
            core.set_formatter(formatter);
        }
        Ok(core)
    }

    pub fn add_filter(&mut self, filter: Box<dyn Filter>) {
        self.filters.push(filter);
    }

    pub fn set_formatter(&mut self, formatter: Box<dyn Formatter>) {
        self.formatter = formatter;
    }

    pub fn filters(&self) -> &[Box<dyn Filter>] {
        &self.filters
    }

    pub fn formatter(&self) -> &dyn Formatter {
        self.formatter.as_ref()
    }

    /// Run the filter chain, stopping at the first rejection
    pub fn accepts(&self, entry: &LogEntry) -> bool {
        self.filters.iter().all(|filter| filter.accepts(entry))
    }

    pub fn format(&self, entry: &LogEntry) -> String {
        self.formatter.format(entry)
    }
}

impl Default for WriterCore {
    fn default() -> Self {
        Self::new()
    }
}

/// One entry of [`WriterOptions::filters`]
pub enum FilterSpec {
    /// A ready-made filter
    Filter(Box<dyn Filter>),
    /// Shorthand for a [`PriorityFilter`] at this ordinal
    Priority(i64),
}

impl FilterSpec {
    fn into_filter(self, component: &str) -> Result<Box<dyn Filter>> {
        match self {
            FilterSpec::Filter(filter) => Ok(filter),
            FilterSpec::Priority(ordinal) => PriorityFilter::from_ordinal(ordinal)
                .map(|filter| Box::new(filter) as Box<dyn Filter>)
                .map_err(|e| LoggerError::config(component, format!("filters: {}", e))),
        }
    }
}

impl<F: Filter + 'static> From<F> for FilterSpec {
    fn from(filter: F) -> Self {
        FilterSpec::Filter(Box::new(filter))
    }
}

impl From<Box<dyn Filter>> for FilterSpec {
    fn from(filter: Box<dyn Filter>) -> Self {
        FilterSpec::Filter(filter)
    }
}

/// Writer construction options
///
/// Every field is optional:
///
/// | field       | default                         |
/// |-------------|---------------------------------|
/// | `filters`   | empty (accept everything)       |
/// | `formatter` | [`SimpleFormatter`]             |
/// | `logger`    | [`NullLogger`](crate::sinks::NullLogger), delegating writers only |
///
/// # Example
///
/// ```
/// use rust_log_bridge::prelude::*;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemoryLogger::new());
/// let writer = AdapterWriter::with_options(
///     WriterOptions::new()
///         .filter(PriorityFilter::new(Severity::Warning))
///         .formatter(JsonFormatter::new())
///         .logger(sink),
/// )?;
/// assert_eq!(writer.filters().len(), 1);
/// # Ok::<(), LoggerError>(())
/// ```
#[derive(Default)]
pub struct WriterOptions {
    pub filters: Vec<FilterSpec>,
    pub formatter: Option<Box<dyn Formatter>>,
    pub logger: Option<Arc<dyn ExternalLogger>>,
}

impl WriterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single filter
    #[must_use = "builder methods return a new value"]
    pub fn filter(mut self, filter: impl Into<FilterSpec>) -> Self {
        self.filters.push(filter.into());
        self
    }

    /// Append several filters, keeping their order
    #[must_use = "builder methods return a new value"]
    pub fn filters<I>(mut self, filters: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<FilterSpec>,
    {
        self.filters.extend(filters.into_iter().map(Into::into));
        self
    }

    /// Append a priority threshold filter by ordinal
    #[must_use = "builder methods return a new value"]
    pub fn priority(mut self, ordinal: i64) -> Self {
        self.filters.push(FilterSpec::Priority(ordinal));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Some(Box::new(formatter));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn logger(mut self, logger: Arc<dyn ExternalLogger>) -> Self {
        self.logger = Some(logger);
        self
    }
}
