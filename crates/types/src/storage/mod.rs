//! Storage trait and errors for the in-memory route snapshot

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::routes::RoutesMap;
use crate::tokens::{EnrichedToken, TokenId};

/// Result alias for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage operation errors
#[derive(Error, Debug)]
pub enum StorageError {
	#[error("Storage backend error: {0}")]
	Backend(String),

	#[error("Serialization error: {0}")]
	Serialization(String),
}

/// Summary counters for a stored route snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageStats {
	pub token_count: usize,
	pub route_count: usize,
	pub chain_count: usize,
	pub computed_at: Option<DateTime<Utc>>,
}

/// Pluggable store for the latest computed route graph.
///
/// Semantics are snapshot-swap: a computation pass stores one complete
/// [`RoutesMap`] which replaces the previous one wholesale. Consumers get
/// a shared read-only handle; nothing is mutated incrementally and
/// nothing persists beyond process memory in the default implementation.
#[async_trait]
pub trait RouteStorageTrait: Send + Sync {
	/// Replace the stored route snapshot.
	async fn set_routes(&self, routes: RoutesMap) -> StorageResult<()>;

	/// The latest route snapshot, if a pass has completed.
	async fn routes(&self) -> StorageResult<Option<Arc<RoutesMap>>>;

	/// Replace the stored enriched token set.
	async fn set_tokens(&self, tokens: Vec<EnrichedToken>) -> StorageResult<()>;

	/// All stored enriched tokens.
	async fn tokens(&self) -> StorageResult<Vec<EnrichedToken>>;

	/// One stored enriched token by id.
	async fn token(&self, id: &TokenId) -> StorageResult<Option<EnrichedToken>>;

	/// Drop the snapshot and token set.
	async fn clear(&self) -> StorageResult<()>;

	/// Counters for the stored snapshot.
	async fn stats(&self) -> StorageResult<StorageStats>;
}
