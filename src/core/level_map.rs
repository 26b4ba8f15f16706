//! Mapping between [`Severity`] and the external level vocabulary
//!
//! External loggers identify levels by lowercase name (`"emergency"`,
//! `"warning"`, ...). The mapping is one-to-one: every severity has exactly
//! one name and no two severities share a name.

use super::error::{LoggerError, Result};
use super::severity::Severity;

/// Level names understood by external loggers
pub mod external {
    pub const EMERGENCY: &str = "emergency";
    pub const ALERT: &str = "alert";
    pub const CRITICAL: &str = "critical";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const NOTICE: &str = "notice";
    pub const INFO: &str = "info";
    pub const DEBUG: &str = "debug";
}

/// Static bidirectional severity mapping
///
/// # Example
///
/// ```
/// use rust_log_bridge::{LevelMap, Severity};
///
/// assert_eq!(LevelMap::to_external_name(Severity::Critical), "critical");
/// assert_eq!(LevelMap::from_external_name("notice").unwrap(), Severity::Notice);
/// ```
pub struct LevelMap;

impl LevelMap {
    #[must_use]
    pub const fn to_external_name(level: Severity) -> &'static str {
        match level {
            Severity::Emergency => external::EMERGENCY,
            Severity::Alert => external::ALERT,
            Severity::Critical => external::CRITICAL,
            Severity::Error => external::ERROR,
            Severity::Warning => external::WARNING,
            Severity::Notice => external::NOTICE,
            Severity::Info => external::INFO,
            Severity::Debug => external::DEBUG,
        }
    }

    /// Inverse of [`LevelMap::to_external_name`]; names are matched exactly
    pub fn from_external_name(name: &str) -> Result<Severity> {
        match name {
            external::EMERGENCY => Ok(Severity::Emergency),
            external::ALERT => Ok(Severity::Alert),
            external::CRITICAL => Ok(Severity::Critical),
            external::ERROR => Ok(Severity::Error),
            external::WARNING => Ok(Severity::Warning),
            external::NOTICE => Ok(Severity::Notice),
            external::INFO => Ok(Severity::Info),
            external::DEBUG => Ok(Severity::Debug),
            _ => Err(LoggerError::unknown_level(name)),
        }
    }

    /// Map a raw ordinal, signalling anything outside the eight levels
    pub fn ordinal_to_external_name(ordinal: i64) -> Result<&'static str> {
        Severity::from_ordinal(ordinal).map(Self::to_external_name)
    }

    /// The eight `(severity, name)` pairs in ordinal order
    pub fn pairs() -> impl Iterator<Item = (Severity, &'static str)> {
        Severity::ALL
            .into_iter()
            .map(|level| (level, Self::to_external_name(level)))
    }
}
