//! Error types for the logger system

use std::fmt;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Severity ordinal outside the eight defined levels
    #[error("Invalid severity {value}: must be an integer >= 0 and < 8")]
    InvalidSeverity { value: i64 },

    /// Level name that the external vocabulary does not define
    #[error("Unknown log level name '{name}'")]
    UnknownLevelName { name: String },

    /// Failure raised by an external logger sink
    #[error("External logger '{sink}' failed: {message}")]
    Delegation { sink: String, message: String },

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Formatter error with format type
    #[error("Formatter error ({format_type}): {message}")]
    FormatterError {
        format_type: String,
        message: String,
    },

    /// Logger has nothing to dispatch to
    #[error("No log writer specified")]
    NoWriters,

    /// One or more writers failed under the lenient dispatch policy
    #[error("{} of {total} writers failed during dispatch", .failures.len())]
    Dispatch {
        total: usize,
        failures: Vec<WriterFailure>,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// A single writer failure collected by [`DispatchPolicy::Continue`](super::DispatchPolicy)
#[derive(Debug)]
pub struct WriterFailure {
    /// Position of the writer in registration order
    pub index: usize,
    /// Name reported by the writer
    pub writer: String,
    pub error: LoggerError,
}

impl fmt::Display for WriterFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "writer #{} ({}): {}", self.index, self.writer, self.error)
    }
}

impl LoggerError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create an invalid severity error
    pub fn invalid_severity(value: i64) -> Self {
        LoggerError::InvalidSeverity { value }
    }

    /// Create an unknown level name error
    pub fn unknown_level(name: impl Into<String>) -> Self {
        LoggerError::UnknownLevelName { name: name.into() }
    }

    /// Create a delegation error, for use by external logger implementations
    pub fn delegation(sink: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Delegation {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    /// Whether this error signals a configuration problem
    pub fn is_configuration(&self) -> bool {
        matches!(self, LoggerError::InvalidConfiguration { .. })
    }
}
