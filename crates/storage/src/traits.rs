//! Storage traits for pluggable storage implementations

// Re-export the storage trait from the types crate
pub use warp_types::storage::{
	RouteStorageTrait as RouteStorage, StorageError, StorageResult, StorageStats,
};
