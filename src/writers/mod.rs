//! Writer implementations

pub mod adapter;
pub mod memory;
pub mod null;
pub mod stream;

pub use crate::core::Writer;
pub use adapter::AdapterWriter;
pub use memory::MemoryWriter;
pub use null::NullWriter;
pub use stream::StreamWriter;
