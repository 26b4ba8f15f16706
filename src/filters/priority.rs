//! Severity threshold filter

use crate::core::{Filter, LogEntry, LoggerError, Result, Severity};
use std::fmt;

/// Comparison applied as `entry_ordinal <op> threshold_ordinal`
///
/// Smaller ordinals are more severe, so the default `Le` keeps entries at
/// least as severe as the threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityOperator {
    Lt,
    #[default]
    Le,
    Eq,
    Ne,
    Gt,
    Ge,
}

impl PriorityOperator {
    fn compare(self, entry: u8, threshold: u8) -> bool {
        match self {
            PriorityOperator::Lt => entry < threshold,
            PriorityOperator::Le => entry <= threshold,
            PriorityOperator::Eq => entry == threshold,
            PriorityOperator::Ne => entry != threshold,
            PriorityOperator::Gt => entry > threshold,
            PriorityOperator::Ge => entry >= threshold,
        }
    }
}

impl fmt::Display for PriorityOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            PriorityOperator::Lt => "<",
            PriorityOperator::Le => "<=",
            PriorityOperator::Eq => "==",
            PriorityOperator::Ne => "!=",
            PriorityOperator::Gt => ">",
            PriorityOperator::Ge => ">=",
        };
        f.write_str(symbol)
    }
}

/// Accepts entries by comparing their severity with a threshold
///
/// # Example
///
/// ```
/// use rust_log_bridge::prelude::*;
///
/// let filter = PriorityFilter::new(Severity::Warning);
/// let entry = LogEntry::new(Severity::Error, "disk failing", LogContext::new());
/// assert!(filter.accepts(&entry));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityFilter {
    threshold: Severity,
    operator: PriorityOperator,
}

impl PriorityFilter {
    pub fn new(threshold: Severity) -> Self {
        Self {
            threshold,
            operator: PriorityOperator::default(),
        }
    }

    /// Build from a raw ordinal, rejecting values outside the eight levels
    pub fn from_ordinal(ordinal: i64) -> Result<Self> {
        Severity::from_ordinal(ordinal)
            .map(Self::new)
            .map_err(|e| LoggerError::config("PriorityFilter", e.to_string()))
    }

    #[must_use]
    pub fn with_operator(mut self, operator: PriorityOperator) -> Self {
        self.operator = operator;
        self
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn operator(&self) -> PriorityOperator {
        self.operator
    }
}

impl Filter for PriorityFilter {
    fn accepts(&self, entry: &LogEntry) -> bool {
        self.operator
            .compare(entry.level().as_ordinal(), self.threshold.as_ordinal())
    }

    fn name(&self) -> &str {
        "priority"
    }
}
