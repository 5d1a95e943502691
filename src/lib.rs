//! Warp Aggregator Library
//!
//! Route aggregation for a cross-chain token bridge: resolve every base
//! token's remote routers through injected on-chain query adapters, then
//! compute the complete directed route graph between all chains,
//! classified by route type.

pub mod builder;
pub mod mocks;

// Core domain types - the most commonly used types
pub use warp_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	// Adapter surface
	AdapterError,
	AdapterResult,
	// Token entities
	Address,
	BaseToken,
	// Chain identity
	ChainId,
	ChainLookup,
	ChainLookupError,
	DomainId,
	EnrichedToken,
	Protocol,
	RemoteRouterEntry,
	RemoteRouterRef,
	// Route graph
	Route,
	RouteKind,
	RouterAdapter,
	RoutesMap,
	// Storage surface
	RouteStorageTrait,
	StorageError,
	StorageStats,
	TokenId,
	TokenKind,
	TokenMetadata,
};

// Service layer
pub use warp_service::{
	compute_token_routes, merge_routes, AggregatorServiceError, FailurePolicy,
	RemoteRouterResolver, ResolveError, ResolveResult, ResolverOptions, RouteAggregatorService,
};

// Adapter registry
pub use warp_adapters::AdapterRegistry;

// Storage layer
pub use warp_storage::MemoryStore;

// Config
pub use warp_config::{
	init_tracing, load_config, load_config_from, log_startup, ChainDirectory, Settings,
};

// Builder
pub use builder::{BuilderError, WarpAggregatorBuilder};

// Module aliases for qualified access
pub mod types {
	pub use warp_types::*;
}

pub mod service {
	pub use warp_service::*;
}

pub mod config {
	pub use warp_config::*;
}

pub mod storage {
	pub use warp_storage::*;
}
