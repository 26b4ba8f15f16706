//! Filter implementations

pub mod mock;
pub mod pattern;
pub mod priority;
pub mod sampling;
pub mod suppress;

pub use mock::MockFilter;
pub use pattern::RegexFilter;
pub use priority::{PriorityFilter, PriorityOperator};
pub use sampling::{SamplerMetrics, SamplingConfig, SamplingFilter};
pub use suppress::SuppressFilter;

pub use crate::core::Filter;
