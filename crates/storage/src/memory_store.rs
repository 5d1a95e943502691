//! In-memory snapshot store for the computed route graph

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::RwLock;

use crate::traits::{RouteStorage, StorageResult, StorageStats};
use warp_types::{EnrichedToken, RoutesMap, TokenId};

/// In-memory storage for the latest route snapshot and enriched tokens.
///
/// The route map is held as a single shared snapshot that is swapped
/// wholesale by each computation pass; readers clone an `Arc`, never a
/// map. Tokens live in a concurrent index keyed by token id.
#[derive(Clone, Default)]
pub struct MemoryStore {
	routes: Arc<RwLock<Option<Arc<RoutesMap>>>>,
	tokens: Arc<DashMap<TokenId, EnrichedToken>>,
	computed_at: Arc<RwLock<Option<DateTime<Utc>>>>,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait]
impl RouteStorage for MemoryStore {
	async fn set_routes(&self, routes: RoutesMap) -> StorageResult<()> {
		*self.routes.write().await = Some(Arc::new(routes));
		*self.computed_at.write().await = Some(Utc::now());
		Ok(())
	}

	async fn routes(&self) -> StorageResult<Option<Arc<RoutesMap>>> {
		Ok(self.routes.read().await.clone())
	}

	async fn set_tokens(&self, tokens: Vec<EnrichedToken>) -> StorageResult<()> {
		self.tokens.clear();
		for token in tokens {
			self.tokens.insert(token.base.id.clone(), token);
		}
		Ok(())
	}

	async fn tokens(&self) -> StorageResult<Vec<EnrichedToken>> {
		Ok(self
			.tokens
			.iter()
			.map(|entry| entry.value().clone())
			.collect())
	}

	async fn token(&self, id: &TokenId) -> StorageResult<Option<EnrichedToken>> {
		Ok(self.tokens.get(id).map(|entry| entry.value().clone()))
	}

	async fn clear(&self) -> StorageResult<()> {
		*self.routes.write().await = None;
		*self.computed_at.write().await = None;
		self.tokens.clear();
		Ok(())
	}

	async fn stats(&self) -> StorageResult<StorageStats> {
		let routes = self.routes.read().await;
		let (route_count, chain_count) = routes
			.as_ref()
			.map(|snapshot| (snapshot.route_count(), snapshot.chain_count()))
			.unwrap_or((0, 0));

		Ok(StorageStats {
			token_count: self.tokens.len(),
			route_count,
			chain_count,
			computed_at: *self.computed_at.read().await,
		})
	}
}
