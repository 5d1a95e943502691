//! Mock adapters and chain lookups for examples and testing
//!
//! These implementations serve fixtures from in-memory tables and track
//! call counts, with configurable delays and failure injection for
//! timeout and error-path testing. No networking anywhere.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use warp_types::{
	Address, AdapterError, AdapterResult, ChainId, ChainLookup, ChainLookupError, DomainId,
	RemoteRouterEntry, RouterAdapter, TokenMetadata,
};

/// Fixture-backed [`RouterAdapter`].
///
/// Remote-router lists and token metadata are keyed by router address
/// (hex addresses compare case-insensitively, as in the resolver).
#[derive(Debug, Default)]
pub struct MockRouterAdapter {
	id: String,
	routers: HashMap<String, Vec<RemoteRouterEntry>>,
	metadata: HashMap<String, TokenMetadata>,
	response_delay: Option<Duration>,
	fail_with: Option<String>,
	list_calls: AtomicUsize,
	metadata_calls: AtomicUsize,
}

impl MockRouterAdapter {
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			..Self::default()
		}
	}

	/// Fixture: the remote routers enrolled on one router contract.
	pub fn with_remote_routers(mut self, router: &str, entries: Vec<RemoteRouterEntry>) -> Self {
		self.routers.insert(Self::key_str(router), entries);
		self
	}

	/// Fixture: metadata served for one router contract.
	pub fn with_metadata(mut self, router: &str, metadata: TokenMetadata) -> Self {
		self.metadata.insert(Self::key_str(router), metadata);
		self
	}

	/// Delay every call, for timeout testing.
	pub fn with_delay(mut self, delay: Duration) -> Self {
		self.response_delay = Some(delay);
		self
	}

	/// Make every call fail with the given message.
	pub fn failing(mut self, message: impl Into<String>) -> Self {
		self.fail_with = Some(message.into());
		self
	}

	pub fn list_call_count(&self) -> usize {
		self.list_calls.load(Ordering::SeqCst)
	}

	pub fn metadata_call_count(&self) -> usize {
		self.metadata_calls.load(Ordering::SeqCst)
	}

	fn key(address: &Address) -> String {
		Self::key_str(address.as_str())
	}

	fn key_str(address: &str) -> String {
		if address.starts_with("0x") || address.starts_with("0X") {
			address.to_ascii_lowercase()
		} else {
			address.to_string()
		}
	}

	async fn before_reply(&self) -> AdapterResult<()> {
		if let Some(delay) = self.response_delay {
			tokio::time::sleep(delay).await;
		}
		if let Some(message) = &self.fail_with {
			return Err(AdapterError::Adapter {
				adapter_id: self.id.clone(),
				message: message.clone(),
			});
		}
		Ok(())
	}
}

#[async_trait]
impl RouterAdapter for MockRouterAdapter {
	fn id(&self) -> &str {
		&self.id
	}

	async fn list_remote_routers(
		&self,
		router: &Address,
		_chain: &ChainId,
	) -> AdapterResult<Vec<RemoteRouterEntry>> {
		self.list_calls.fetch_add(1, Ordering::SeqCst);
		self.before_reply().await?;
		Ok(self
			.routers
			.get(&Self::key(router))
			.cloned()
			.unwrap_or_default())
	}

	async fn token_metadata(
		&self,
		router: &Address,
		_chain: &ChainId,
	) -> AdapterResult<TokenMetadata> {
		self.metadata_calls.fetch_add(1, Ordering::SeqCst);
		self.before_reply().await?;
		self.metadata
			.get(&Self::key(router))
			.cloned()
			.ok_or_else(|| AdapterError::InvalidResponse {
				adapter_id: self.id.clone(),
				reason: format!("no metadata fixture for router {}", router),
			})
	}
}

/// Fixture-backed [`ChainLookup`].
#[derive(Debug, Clone, Default)]
pub struct MockChainLookup {
	domains: HashMap<DomainId, ChainId>,
}

impl MockChainLookup {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_domain(mut self, domain: DomainId, chain: &str) -> Self {
		self.domains.insert(domain, ChainId::new(chain));
		self
	}
}

impl ChainLookup for MockChainLookup {
	fn chain_for_domain(&self, domain: DomainId) -> Result<ChainId, ChainLookupError> {
		self.domains
			.get(&domain)
			.cloned()
			.ok_or(ChainLookupError::UnknownDomain { domain })
	}
}
