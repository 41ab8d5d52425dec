//! Infrastructure layer: persistence adapters for the catalog.

pub mod in_memory;

pub use in_memory::{InMemoryDatabase, InMemorySession};
