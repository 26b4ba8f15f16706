//! What the logger does when a writer fails

use std::fmt;

/// Policy for handling writer failures during dispatch
///
/// # Example
///
/// ```
/// use rust_log_bridge::DispatchPolicy;
///
/// // Default behavior: stop at the first failing writer
/// assert_eq!(DispatchPolicy::default(), DispatchPolicy::FailFast);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DispatchPolicy {
    /// Stop at the first failing writer and return its error unchanged
    ///
    /// Writers registered after the failing one do not see the entry.
    #[default]
    FailFast,

    /// Keep dispatching to the remaining writers
    ///
    /// Each failure is reported on stderr, and the failures are returned
    /// together as [`LoggerError::Dispatch`](super::LoggerError::Dispatch)
    /// once every writer has run.
    Continue,
}

impl fmt::Display for DispatchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchPolicy::FailFast => write!(f, "FailFast"),
            DispatchPolicy::Continue => write!(f, "Continue"),
        }
    }
}
