//! External logger implementations

pub mod bridge;
pub mod memory;
pub mod null;

pub use bridge::LoggerBridge;
pub use memory::{LoggedCall, MemoryLogger};
pub use null::NullLogger;

pub use crate::core::ExternalLogger;
