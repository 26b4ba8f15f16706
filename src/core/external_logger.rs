//! Contract for third-party loggers that writers can delegate to

use super::{error::Result, log_context::LogContext};

/// A logger outside this framework, addressed by level name
///
/// `level` is always one of the names in
/// [`level_map::external`](super::level_map::external). The message and
/// context arrive unformatted; interpolation is up to the implementation.
///
/// # Example
///
/// ```
/// use rust_log_bridge::core::{ExternalLogger, LogContext, Result};
///
/// struct StderrLogger;
///
/// impl ExternalLogger for StderrLogger {
///     fn log(&self, level: &str, message: &str, context: &LogContext) -> Result<()> {
///         eprintln!("{level}: {message} {}", context.to_json());
///         Ok(())
///     }
/// }
/// ```
pub trait ExternalLogger: Send + Sync {
    fn log(&self, level: &str, message: &str, context: &LogContext) -> Result<()>;
}
