//! Warp Service
//!
//! Core logic for the Warp Route Aggregator: remote-router resolution,
//! route-graph computation, static route merging, and the orchestrating
//! aggregator service.

pub mod aggregator;
pub mod graph;
pub mod resolver;

pub use aggregator::{AggregatorServiceError, RouteAggregatorService};
pub use graph::{compute_token_routes, merge_routes};
pub use resolver::{
	FailurePolicy, RemoteRouterResolver, ResolveError, ResolveResult, ResolverOptions,
};
