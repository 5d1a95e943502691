//! Warp Storage
//!
//! Storage implementations for the Warp Route Aggregator. The default
//! (and only shipped) backend is an in-memory snapshot store; nothing in
//! this domain persists across process restarts.

pub mod memory_store;
pub mod traits;

pub use memory_store::MemoryStore;
pub use traits::{RouteStorage, StorageError, StorageResult, StorageStats};
