//! Formatter implementations

pub mod json;
pub mod simple;

pub use json::JsonFormatter;
pub use simple::{SimpleFormatter, DEFAULT_FORMAT};

pub use crate::core::Formatter;
