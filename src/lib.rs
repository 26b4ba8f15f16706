//! # Rust Log Bridge
//!
//! A small logging framework built around a [`Logger`] that dispatches
//! entries to an ordered list of [`Writer`]s. Each writer owns a chain of
//! [`Filter`]s and a [`Formatter`].
//!
//! The [`AdapterWriter`](writers::AdapterWriter) forwards entries to any
//! [`ExternalLogger`], translating the eight syslog severities into the
//! lowercase level names used by PSR-3 style loggers.
//!
//! ## Example
//!
//! ```
//! use rust_log_bridge::prelude::*;
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemoryLogger::new());
//! let logger = Logger::builder()
//!     .writer(AdapterWriter::new(sink.clone()))
//!     .build();
//!
//! logger.log(Severity::Critical, "db unreachable", context! { "attempt" => 3 })?;
//! assert_eq!(sink.calls()[0].level, "critical");
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod filters;
pub mod formatters;
pub mod macros;
pub mod sinks;
pub mod writers;

pub mod prelude {
    pub use crate::context;
    pub use crate::core::{
        ContextGuard, DispatchPolicy, ExternalLogger, FieldValue, Filter, FilterSpec, Formatter,
        LevelMap, LogContext, LogEntry, Logger, LoggerBuilder, LoggerContext, LoggerError,
        LoggerMetrics, Result, Severity, TimestampFormat, Writer, WriterCore, WriterFailure,
        WriterOptions,
    };
    pub use crate::filters::{
        MockFilter, PriorityFilter, PriorityOperator, RegexFilter, SamplingConfig,
        SamplingFilter, SuppressFilter,
    };
    pub use crate::formatters::{JsonFormatter, SimpleFormatter};
    pub use crate::sinks::{LoggedCall, LoggerBridge, MemoryLogger, NullLogger};
    pub use crate::writers::{AdapterWriter, MemoryWriter, NullWriter, StreamWriter};
}

pub use crate::core::{
    ContextGuard, DispatchPolicy, ExternalLogger, FieldValue, Filter, FilterSpec, Formatter,
    LevelMap, LogContext, LogEntry, Logger, LoggerBuilder, LoggerContext, LoggerError,
    LoggerMetrics, Result, Severity, TimestampFormat, Writer, WriterCore, WriterFailure,
    WriterOptions,
};
