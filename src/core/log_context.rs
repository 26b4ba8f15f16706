//! Structured logging context for key-value fields
//!
//! This module provides:
//! - `LogContext`: Per-entry structured fields, kept in insertion order
//! - `LoggerContext`: Persistent fields merged into every log entry
//! - `ContextGuard`: RAII guard for scoped context

use parking_lot::RwLock;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<FieldValue>),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::List(items) => {
                write!(f, "[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::List(items) => {
                serde_json::Value::Array(items.iter().map(FieldValue::to_json_value).collect())
            }
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Context for structured logging with key-value fields
///
/// Keys keep the order in which they were first inserted. Setting a key
/// that already exists replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogContext {
    fields: Vec<(String, FieldValue)>,
}

impl LogContext {
    /// Create a new empty log context
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to the context
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.add_field(key, value);
        self
    }

    /// Add a field to the context (mutable version)
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Remove a field, returning its value
    pub fn remove(&mut self, key: &str) -> Option<FieldValue> {
        let idx = self.fields.iter().position(|(k, _)| k == key)?;
        Some(self.fields.remove(idx).1)
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Iterate fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if context has any fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Format fields as key=value pairs
    pub fn format_fields(&self) -> String {
        self.fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render the fields as a JSON object, preserving key order
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Serialize for LogContext {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<K, V> FromIterator<(K, V)> for LogContext
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = LogContext::new();
        for (key, value) in iter {
            context.add_field(key, value);
        }
        context
    }
}

impl fmt::Display for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_fields())
    }
}

/// Logger-level persistent context for structured logging
///
/// `LoggerContext` stores fields that persist across all log entries.
/// This is useful for adding common fields like service name, version,
/// or environment to every log entry.
///
/// Thread-safe: Can be safely shared across threads.
///
/// # Example
///
/// ```
/// use rust_log_bridge::LoggerContext;
///
/// let ctx = LoggerContext::new();
/// ctx.set("service", "api-gateway");
/// ctx.set("version", "1.2.3");
///
/// // Later, these fields are automatically merged into log entries
/// assert_eq!(ctx.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct LoggerContext {
    fields: Arc<RwLock<LogContext>>,
}

impl LoggerContext {
    /// Create a new empty logger context
    pub fn new() -> Self {
        Self {
            fields: Arc::new(RwLock::new(LogContext::new())),
        }
    }

    /// Set a field in the context
    ///
    /// If the field already exists, it will be overwritten.
    pub fn set<K, V>(&self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.write().add_field(key, value);
    }

    /// Remove a field from the context
    pub fn remove(&self, key: &str) {
        self.fields.write().remove(key);
    }

    /// Clear all fields from the context
    pub fn clear(&self) {
        self.fields.write().clear();
    }

    /// Get a snapshot of all fields
    pub fn snapshot(&self) -> LogContext {
        self.fields.read().clone()
    }

    /// Check if the context is empty
    pub fn is_empty(&self) -> bool {
        self.fields.read().is_empty()
    }

    /// Get the number of fields in the context
    pub fn len(&self) -> usize {
        self.fields.read().len()
    }

    /// Merge context fields into a LogContext
    ///
    /// Entry-level fields take priority over logger-level fields.
    pub fn merge_into(&self, log_context: &mut LogContext) {
        let fields = self.fields.read();
        for (key, value) in fields.iter() {
            if !log_context.contains_key(key) {
                log_context.add_field(key, value.clone());
            }
        }
    }

    /// Set a field that is removed again when the returned guard drops
    pub fn scoped<K, V>(&self, key: K, value: V) -> ContextGuard
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let key = key.into();
        let previous = {
            let mut fields = self.fields.write();
            let previous = fields.get(&key).cloned();
            fields.add_field(key.clone(), value);
            previous
        };
        ContextGuard::new(Arc::clone(&self.fields), key, previous)
    }
}

impl Default for LoggerContext {
    fn default() -> Self {
        Self::new()
    }
}

/// RAII guard for scoped context fields
///
/// When dropped, the field goes back to the value it had before the guard
/// was created, or is removed if it did not exist.
///
/// # Example
///
/// ```
/// use rust_log_bridge::prelude::*;
///
/// let logger = Logger::new();
///
/// {
///     let _guard = logger.with_context("request_id", "abc-123");
///     assert_eq!(logger.context().len(), 1);
/// }
/// assert!(logger.context().is_empty());
/// ```
pub struct ContextGuard {
    context: Arc<RwLock<LogContext>>,
    key: String,
    previous: Option<FieldValue>,
}

impl ContextGuard {
    pub(crate) fn new(
        context: Arc<RwLock<LogContext>>,
        key: String,
        previous: Option<FieldValue>,
    ) -> Self {
        Self {
            context,
            key,
            previous,
        }
    }
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        let mut fields = self.context.write();
        match self.previous.take() {
            Some(value) => fields.add_field(self.key.as_str(), value),
            None => {
                fields.remove(&self.key);
            }
        }
    }
}
