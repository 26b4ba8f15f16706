//! Core logger types and traits

pub mod dispatch_policy;
pub mod error;
pub mod external_logger;
pub mod filter;
pub mod formatter;
pub mod level_map;
pub mod log_context;
pub mod log_entry;
pub mod logger;
pub mod metrics;
pub mod severity;
pub mod timestamp;
pub mod writer;

pub use dispatch_policy::DispatchPolicy;
pub use error::{LoggerError, Result, WriterFailure};
pub use external_logger::ExternalLogger;
pub use filter::Filter;
pub use formatter::Formatter;
pub use level_map::LevelMap;
pub use log_context::{ContextGuard, FieldValue, LogContext, LoggerContext};
pub use log_entry::LogEntry;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use severity::Severity;
pub use timestamp::TimestampFormat;
pub use writer::{FilterSpec, Writer, WriterCore, WriterOptions};
