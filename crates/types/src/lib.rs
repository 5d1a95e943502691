//! Warp Types
//!
//! Shared models and traits for the Warp Route Aggregator.
//! This crate contains all domain models organized by business entity:
//! chains, tokens, routes, adapters, and storage.

pub mod adapters;
pub mod chains;
pub mod routes;
pub mod storage;
pub mod tokens;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use chains::{ChainId, ChainLookup, ChainLookupError, DomainId, Protocol};

pub use tokens::{
	Address, BaseToken, EnrichedToken, RemoteRouterEntry, RemoteRouterRef, TokenId, TokenKind,
	TokenMetadata,
};

pub use routes::{Route, RouteKind, RoutesMap};

pub use adapters::{AdapterError, AdapterResult, RouterAdapter};

pub use storage::{RouteStorageTrait, StorageError, StorageResult, StorageStats};
