//! Adapter registry: (protocol, token kind) -> on-chain query implementation

use std::collections::HashMap;
use std::sync::Arc;

use warp_types::{AdapterError, AdapterResult, ChainId, Protocol, RouterAdapter, TokenKind};

/// Dispatch table selecting the on-chain query implementation for a
/// chain's protocol family and a token's classification.
///
/// The registry is built once at startup and passed into the resolver as
/// an explicit dependency; it holds no other state and is never consulted
/// through a global. Selecting a protocol/kind pair with no registration
/// is an error the caller treats as fatal to that token, not to the whole
/// computation pass.
#[derive(Debug, Default)]
pub struct AdapterRegistry {
	adapters: HashMap<(Protocol, TokenKind), Arc<dyn RouterAdapter>>,
}

impl AdapterRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an adapter for one (protocol, kind) pair.
	///
	/// The last registration for a pair wins.
	pub fn register(
		&mut self,
		protocol: Protocol,
		kind: TokenKind,
		adapter: Arc<dyn RouterAdapter>,
	) {
		self.adapters.insert((protocol, kind), adapter);
	}

	/// Register the same adapter for every token kind of one protocol.
	///
	/// Most protocol implementations serve collateral, native, and
	/// synthetic routers through the same query surface; this is the
	/// common registration path.
	pub fn register_for_protocol(&mut self, protocol: Protocol, adapter: Arc<dyn RouterAdapter>) {
		for kind in [TokenKind::Collateral, TokenKind::Native, TokenKind::Synthetic] {
			self.adapters.insert((protocol, kind), Arc::clone(&adapter));
		}
	}

	/// Select the adapter registered for a protocol/kind pair.
	pub fn select(
		&self,
		protocol: Protocol,
		kind: TokenKind,
	) -> AdapterResult<Arc<dyn RouterAdapter>> {
		self.adapters
			.get(&(protocol, kind))
			.cloned()
			.ok_or_else(|| AdapterError::UnsupportedProtocol {
				protocol: protocol.to_string(),
				kind: kind.to_string(),
			})
	}

	/// Select the adapter for a chain, parsing its protocol qualifier.
	pub fn select_for_chain(
		&self,
		chain: &ChainId,
		kind: TokenKind,
	) -> AdapterResult<Arc<dyn RouterAdapter>> {
		let protocol = chain.protocol().map_err(|e| AdapterError::InvalidChain {
			chain_id: chain.to_string(),
			reason: e.to_string(),
		})?;
		self.select(protocol, kind)
	}

	/// All registered (protocol, kind) pairs.
	pub fn registered(&self) -> impl Iterator<Item = &(Protocol, TokenKind)> {
		self.adapters.keys()
	}

	pub fn len(&self) -> usize {
		self.adapters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.adapters.is_empty()
	}
}
