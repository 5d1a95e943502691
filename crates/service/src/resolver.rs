//! Remote-router resolution: one base token -> enriched token
//!
//! The resolver is the only I/O-facing piece of the service layer; every
//! remote read goes through the injected adapter registry. Tokens are
//! processed serially by default to respect downstream RPC rate limits;
//! concurrency above one is an explicit bounded pipeline, never an
//! unbounded fan-out.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use thiserror::Error;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use warp_adapters::AdapterRegistry;
use warp_types::{
	Address, AdapterError, BaseToken, ChainId, ChainLookup, ChainLookupError, DomainId,
	EnrichedToken, RemoteRouterRef, TokenId, TokenKind,
};

/// Result alias for resolution operations
pub type ResolveResult<T> = Result<T, ResolveError>;

/// Per-token resolution failures, with enough context to diagnose which
/// call failed for which token on which chain.
#[derive(Error, Debug)]
pub enum ResolveError {
	#[error("Failed to list remote routers for token {token_id} on {chain}: {source}")]
	ListRemoteRouters {
		token_id: TokenId,
		chain: ChainId,
		#[source]
		source: AdapterError,
	},

	#[error("Failed to fetch metadata for router {router} on {chain} (base token {token_id}): {source}")]
	TokenMetadata {
		token_id: TokenId,
		chain: ChainId,
		router: Address,
		#[source]
		source: AdapterError,
	},

	#[error("Failed to resolve chain for domain {domain} (base token {token_id}): {source}")]
	ChainLookup {
		token_id: TokenId,
		domain: DomainId,
		#[source]
		source: ChainLookupError,
	},

	#[error("No adapter available for token {token_id} on {chain}: {source}")]
	AdapterSelection {
		token_id: TokenId,
		chain: ChainId,
		#[source]
		source: AdapterError,
	},

	#[error("Route resolution cancelled")]
	Cancelled,
}

/// What to do when one token's enrichment fails.
///
/// The reference behavior is `FailFast`: no partial enrichment, the whole
/// pass fails. `SkipToken` trades completeness for availability, logging
/// a warning and continuing without the offending token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
	#[default]
	FailFast,
	SkipToken,
}

/// Resolution tuning knobs.
#[derive(Debug, Clone)]
pub struct ResolverOptions {
	/// Deadline applied to each individual adapter call. Elapsing is a
	/// resolution failure for the token, not a silent retry.
	pub call_timeout: Duration,
	/// Number of tokens resolved at once. The default of 1 preserves the
	/// serial reference behavior as rate-limit backpressure.
	pub concurrency: usize,
	pub failure_policy: FailurePolicy,
}

impl Default for ResolverOptions {
	fn default() -> Self {
		Self {
			call_timeout: Duration::from_secs(10),
			concurrency: 1,
			failure_policy: FailurePolicy::FailFast,
		}
	}
}

/// Internal adapter-call outcome: cancellation is not an adapter error.
enum CallError {
	Cancelled,
	Adapter(AdapterError),
}

/// Resolves each base token's remote-router peers into an enriched token.
///
/// All collaborators are injected: the adapter registry supplies the
/// on-chain query capability per (protocol, token kind), and the chain
/// lookup maps wire-level domain ids to chain ids.
pub struct RemoteRouterResolver {
	registry: Arc<AdapterRegistry>,
	chains: Arc<dyn ChainLookup>,
	options: ResolverOptions,
	cancel: CancellationToken,
}

impl RemoteRouterResolver {
	pub fn new(registry: Arc<AdapterRegistry>, chains: Arc<dyn ChainLookup>) -> Self {
		Self {
			registry,
			chains,
			options: ResolverOptions::default(),
			cancel: CancellationToken::new(),
		}
	}

	pub fn with_options(mut self, options: ResolverOptions) -> Self {
		self.options = options;
		self
	}

	/// Attach an externally owned cancellation token.
	///
	/// Cancelling it aborts the in-flight pass at the next call boundary;
	/// the pass surfaces [`ResolveError::Cancelled`].
	pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
		self.cancel = cancel;
		self
	}

	pub fn options(&self) -> &ResolverOptions {
		&self.options
	}

	/// Resolve one base token into an enriched token.
	///
	/// Issues one batched remote-router enumeration, then per entry a
	/// chain-metadata lookup and, only when decimals cannot be inferred
	/// from `all_tokens` (or forced to 0 for NFTs), one metadata read
	/// against the remote chain. Any sub-call failure fails the whole
	/// token; there is no partial enrichment.
	pub async fn fetch_remote_tokens(
		&self,
		base: &BaseToken,
		all_tokens: &[BaseToken],
	) -> ResolveResult<EnrichedToken> {
		let adapter = self
			.registry
			.select_for_chain(&base.chain, base.kind)
			.map_err(|source| ResolveError::AdapterSelection {
				token_id: base.id.clone(),
				chain: base.chain.clone(),
				source,
			})?;

		debug!(token = %base.id, adapter = adapter.id(), "Listing remote routers");

		let entries = self
			.guarded(
				adapter.list_remote_routers(&base.router, &base.chain),
				adapter.id(),
				"list_remote_routers",
			)
			.await
			.map_err(|error| match error {
				CallError::Cancelled => ResolveError::Cancelled,
				CallError::Adapter(source) => ResolveError::ListRemoteRouters {
					token_id: base.id.clone(),
					chain: base.chain.clone(),
					source,
				},
			})?;

		let mut remotes = Vec::with_capacity(entries.len());
		for entry in entries {
			let chain = self.chains.chain_for_domain(entry.domain).map_err(|source| {
				ResolveError::ChainLookup {
					token_id: base.id.clone(),
					domain: entry.domain,
					source,
				}
			})?;

			let decimals = self
				.resolve_decimals(base, &chain, &entry.router, all_tokens)
				.await?;

			remotes.push(RemoteRouterRef {
				chain,
				router: entry.router,
				decimals,
			});
		}

		debug!(token = %base.id, remotes = remotes.len(), "Resolved remote routers");
		Ok(EnrichedToken::new(base.clone(), remotes))
	}

	/// Resolve every base token, applying the configured failure policy.
	///
	/// Output order follows input order regardless of concurrency.
	pub async fn resolve_all(&self, tokens: &[BaseToken]) -> ResolveResult<Vec<EnrichedToken>> {
		if self.options.concurrency <= 1 {
			self.resolve_serial(tokens).await
		} else {
			self.resolve_bounded(tokens).await
		}
	}

	async fn resolve_serial(&self, tokens: &[BaseToken]) -> ResolveResult<Vec<EnrichedToken>> {
		let mut enriched = Vec::with_capacity(tokens.len());
		for base in tokens {
			if self.cancel.is_cancelled() {
				return Err(ResolveError::Cancelled);
			}
			let result = self.fetch_remote_tokens(base, tokens).await;
			if let Some(token) = self.apply_policy(base, result)? {
				enriched.push(token);
			}
		}
		Ok(enriched)
	}

	async fn resolve_bounded(&self, tokens: &[BaseToken]) -> ResolveResult<Vec<EnrichedToken>> {
		let results: Vec<ResolveResult<EnrichedToken>> =
			stream::iter(tokens.iter().map(|base| self.fetch_remote_tokens(base, tokens)))
				.buffered(self.options.concurrency)
				.collect()
				.await;

		let mut enriched = Vec::with_capacity(tokens.len());
		for (base, result) in tokens.iter().zip(results) {
			if let Some(token) = self.apply_policy(base, result)? {
				enriched.push(token);
			}
		}
		Ok(enriched)
	}

	/// FailFast propagates; SkipToken logs and drops. Cancellation always
	/// propagates regardless of policy.
	fn apply_policy(
		&self,
		base: &BaseToken,
		result: ResolveResult<EnrichedToken>,
	) -> ResolveResult<Option<EnrichedToken>> {
		match result {
			Ok(token) => Ok(Some(token)),
			Err(ResolveError::Cancelled) => Err(ResolveError::Cancelled),
			Err(error) => match self.options.failure_policy {
				FailurePolicy::FailFast => Err(error),
				FailurePolicy::SkipToken => {
					warn!(
						token = %base.id,
						chain = %base.chain,
						%error,
						"Skipping token after resolution failure"
					);
					Ok(None)
				},
			},
		}
	}

	async fn resolve_decimals(
		&self,
		base: &BaseToken,
		remote_chain: &ChainId,
		remote_router: &Address,
		all_tokens: &[BaseToken],
	) -> ResolveResult<u8> {
		// Non-fungible collateral has no decimal scaling.
		if base.is_nft {
			return Ok(0);
		}

		// A remote router that is itself a configured base token already
		// carries its decimals; skip the redundant remote call.
		if let Some(known) = all_tokens
			.iter()
			.find(|token| token.router.matches(remote_router))
		{
			return Ok(known.decimals);
		}

		let adapter = self
			.registry
			.select_for_chain(remote_chain, TokenKind::Synthetic)
			.map_err(|source| ResolveError::AdapterSelection {
				token_id: base.id.clone(),
				chain: remote_chain.clone(),
				source,
			})?;

		let metadata = self
			.guarded(
				adapter.token_metadata(remote_router, remote_chain),
				adapter.id(),
				"token_metadata",
			)
			.await
			.map_err(|error| match error {
				CallError::Cancelled => ResolveError::Cancelled,
				CallError::Adapter(source) => ResolveError::TokenMetadata {
					token_id: base.id.clone(),
					chain: remote_chain.clone(),
					router: remote_router.clone(),
					source,
				},
			})?;

		Ok(metadata.decimals)
	}

	/// Apply the per-call deadline and cancellation to one adapter call.
	async fn guarded<T>(
		&self,
		call: impl std::future::Future<Output = Result<T, AdapterError>>,
		adapter_id: &str,
		operation: &str,
	) -> Result<T, CallError> {
		let deadline = self.options.call_timeout;
		tokio::select! {
			_ = self.cancel.cancelled() => Err(CallError::Cancelled),
			outcome = timeout(deadline, call) => match outcome {
				Ok(result) => result.map_err(CallError::Adapter),
				Err(_) => Err(CallError::Adapter(AdapterError::timeout(
					adapter_id,
					operation,
					deadline.as_millis() as u64,
				))),
			},
		}
	}
}
