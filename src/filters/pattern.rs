//! Message pattern filter

use crate::core::{Filter, LogEntry, LoggerError, Result};
use regex::Regex;

/// Accepts entries whose message matches a regular expression
#[derive(Debug, Clone)]
pub struct RegexFilter {
    pattern: Regex,
}

impl RegexFilter {
    /// Compile `pattern`; an invalid pattern is a configuration error
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .map_err(|e| LoggerError::config("RegexFilter", e.to_string()))?;
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Filter for RegexFilter {
    fn accepts(&self, entry: &LogEntry) -> bool {
        self.pattern.is_match(entry.message())
    }

    fn name(&self) -> &str {
        "regex"
    }
}
