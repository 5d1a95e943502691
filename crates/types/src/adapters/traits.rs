//! Core adapter trait for on-chain query implementations

use async_trait::async_trait;
use std::fmt::Debug;

use crate::adapters::AdapterResult;
use crate::chains::ChainId;
use crate::tokens::{Address, RemoteRouterEntry, TokenMetadata};

/// On-chain query capability for one protocol family.
///
/// Implementations are supplied by the embedding application (or by test
/// mocks); this workspace never performs network I/O itself. Both calls
/// are reads against a router contract on the given chain.
#[async_trait]
pub trait RouterAdapter: Send + Sync + Debug {
	/// Stable identifier used in logs and error context.
	fn id(&self) -> &str;

	/// Enumerate all remote routers enrolled on a router contract.
	///
	/// One batched read per base token. Result ordering is whatever the
	/// contract reports; callers treat it as significant only for
	/// reproducibility, not semantics.
	async fn list_remote_routers(
		&self,
		router: &Address,
		chain: &ChainId,
	) -> AdapterResult<Vec<RemoteRouterEntry>>;

	/// Fetch token metadata (decimals, symbol, name) from a router contract.
	///
	/// Only called when decimals cannot be inferred from the configured
	/// token list.
	async fn token_metadata(
		&self,
		router: &Address,
		chain: &ChainId,
	) -> AdapterResult<TokenMetadata>;
}
