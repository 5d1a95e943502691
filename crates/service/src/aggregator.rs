//! Orchestration of a full route-computation pass

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;
use tracing::{info, warn};

use warp_types::{
	BaseToken, EnrichedToken, Route, RouteStorageTrait, RoutesMap, StorageError, StorageStats,
};

use crate::graph::{compute_token_routes, merge_routes};
use crate::resolver::{RemoteRouterResolver, ResolveError};

/// Errors from a route-computation pass
#[derive(Error, Debug)]
pub enum AggregatorServiceError {
	#[error("Route resolution failed: {0}")]
	Resolve(#[from] ResolveError),

	#[error("Storage error: {0}")]
	Storage(#[from] StorageError),
}

/// Service owning one route-computation pipeline: resolve every base
/// token, compute the route graph, merge static routes, store the
/// snapshot.
///
/// The stored [`RoutesMap`] is replaced wholesale on every pass;
/// consumers read shared snapshots and never observe a half-built map.
pub struct RouteAggregatorService {
	resolver: RemoteRouterResolver,
	base_tokens: Vec<BaseToken>,
	static_routes: Vec<Route>,
	storage: Arc<dyn RouteStorageTrait>,
}

impl std::fmt::Debug for RouteAggregatorService {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RouteAggregatorService")
			.field("base_tokens", &self.base_tokens.len())
			.field("static_routes", &self.static_routes.len())
			.finish_non_exhaustive()
	}
}

impl RouteAggregatorService {
	pub fn new(
		resolver: RemoteRouterResolver,
		base_tokens: Vec<BaseToken>,
		static_routes: Vec<Route>,
		storage: Arc<dyn RouteStorageTrait>,
	) -> Self {
		Self {
			resolver,
			base_tokens,
			static_routes,
			storage,
		}
	}

	/// Run a complete pass and return the fresh snapshot.
	pub async fn refresh_routes(&self) -> Result<Arc<RoutesMap>, AggregatorServiceError> {
		let started = Instant::now();
		info!(tokens = self.base_tokens.len(), "Starting route computation pass");

		let enriched = self.resolver.resolve_all(&self.base_tokens).await?;
		if enriched.len() < self.base_tokens.len() {
			warn!(
				resolved = enriched.len(),
				configured = self.base_tokens.len(),
				"Route pass continuing without some tokens"
			);
		}

		let computed = compute_token_routes(&enriched);
		let routes = if self.static_routes.is_empty() {
			computed
		} else {
			merge_routes(&computed, &self.static_routes)
		};

		self.storage.set_tokens(enriched).await?;
		self.storage.set_routes(routes.clone()).await?;

		info!(
			chains = routes.chain_count(),
			routes = routes.route_count(),
			elapsed_ms = started.elapsed().as_millis() as u64,
			"Route computation pass complete"
		);

		Ok(Arc::new(routes))
	}

	/// The latest stored snapshot, if any pass has completed.
	pub async fn routes(&self) -> Result<Option<Arc<RoutesMap>>, AggregatorServiceError> {
		Ok(self.storage.routes().await?)
	}

	/// The stored enriched token set from the latest pass.
	pub async fn tokens(&self) -> Result<Vec<EnrichedToken>, AggregatorServiceError> {
		Ok(self.storage.tokens().await?)
	}

	/// Counters for the stored snapshot.
	pub async fn stats(&self) -> Result<StorageStats, AggregatorServiceError> {
		Ok(self.storage.stats().await?)
	}

	/// The configured base tokens this service resolves.
	pub fn base_tokens(&self) -> &[BaseToken] {
		&self.base_tokens
	}

	/// The statically configured routes merged after computation.
	pub fn static_routes(&self) -> &[Route] {
		&self.static_routes
	}
}
