//! Element registry implementations

mod memory;

pub use memory::{MemoryElement, MemoryRegistry};
