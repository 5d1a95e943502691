//! Fluent assembly of a route aggregation stack

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

use warp_adapters::AdapterRegistry;
use warp_config::{
	ChainDirectory, ConfigValidationError, FailurePolicySetting, Settings,
};
use warp_service::{
	FailurePolicy, RemoteRouterResolver, ResolverOptions, RouteAggregatorService,
};
use warp_storage::MemoryStore;
use warp_types::{ChainLookup, Protocol, Route, RouteStorageTrait, RouterAdapter, TokenKind};

/// Errors from assembling the aggregation stack
#[derive(Error, Debug)]
pub enum BuilderError {
	#[error("No settings provided")]
	MissingSettings,

	#[error("Configuration validation failed: {0}")]
	Validation(#[from] ConfigValidationError),

	#[error("Configuration loading failed: {0}")]
	Load(#[from] warp_config::ConfigError),

	#[error("No adapters registered")]
	NoAdapters,
}

/// Builder wiring settings, adapters, chain lookup, and storage into a
/// ready [`RouteAggregatorService`].
///
/// Defaults: the chain lookup is a [`ChainDirectory`] built from the
/// settings' chain table, and storage is an in-memory snapshot store.
/// Both can be replaced for embedding or testing.
#[derive(Default)]
pub struct WarpAggregatorBuilder {
	settings: Option<Settings>,
	registry: AdapterRegistry,
	chain_lookup: Option<Arc<dyn ChainLookup>>,
	storage: Option<Arc<dyn RouteStorageTrait>>,
	cancellation: Option<CancellationToken>,
	extra_static_routes: Vec<Route>,
}

impl WarpAggregatorBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Start from already-loaded settings.
	pub fn from_config(settings: Settings) -> Self {
		Self {
			settings: Some(settings),
			..Self::default()
		}
	}

	/// Load settings from a config file (plus `WARP_` env overrides).
	pub fn from_config_file(path: &str) -> Result<Self, BuilderError> {
		let settings = warp_config::load_config_from(path)?;
		Ok(Self::from_config(settings))
	}

	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Register an adapter for one (protocol, token kind) pair.
	pub fn with_adapter(
		mut self,
		protocol: Protocol,
		kind: TokenKind,
		adapter: Arc<dyn RouterAdapter>,
	) -> Self {
		self.registry.register(protocol, kind, adapter);
		self
	}

	/// Register the same adapter for every token kind of one protocol.
	pub fn with_protocol_adapter(
		mut self,
		protocol: Protocol,
		adapter: Arc<dyn RouterAdapter>,
	) -> Self {
		self.registry.register_for_protocol(protocol, adapter);
		self
	}

	/// Replace the default settings-derived chain directory.
	pub fn with_chain_lookup(mut self, lookup: Arc<dyn ChainLookup>) -> Self {
		self.chain_lookup = Some(lookup);
		self
	}

	/// Replace the default in-memory storage.
	pub fn with_storage(mut self, storage: Arc<dyn RouteStorageTrait>) -> Self {
		self.storage = Some(storage);
		self
	}

	/// Attach a cancellation token aborting in-flight resolution passes.
	pub fn with_cancellation(mut self, cancellation: CancellationToken) -> Self {
		self.cancellation = Some(cancellation);
		self
	}

	/// Add a static route on top of those from the settings.
	pub fn with_static_route(mut self, route: Route) -> Self {
		self.extra_static_routes.push(route);
		self
	}

	/// Validate the configuration and assemble the service.
	pub fn build(self) -> Result<RouteAggregatorService, BuilderError> {
		let settings = self.settings.ok_or(BuilderError::MissingSettings)?;
		settings.validate()?;

		if self.registry.is_empty() {
			return Err(BuilderError::NoAdapters);
		}

		let chain_lookup = self
			.chain_lookup
			.unwrap_or_else(|| Arc::new(ChainDirectory::from_settings(&settings)));
		let storage = self
			.storage
			.unwrap_or_else(|| Arc::new(MemoryStore::new()));

		let options = ResolverOptions {
			call_timeout: Duration::from_millis(settings.resolver.call_timeout_ms),
			concurrency: settings.resolver.concurrency.max(1),
			failure_policy: match settings.resolver.on_failure {
				FailurePolicySetting::FailFast => FailurePolicy::FailFast,
				FailurePolicySetting::Skip => FailurePolicy::SkipToken,
			},
		};

		let mut resolver =
			RemoteRouterResolver::new(Arc::new(self.registry), chain_lookup).with_options(options);
		if let Some(cancellation) = self.cancellation {
			resolver = resolver.with_cancellation(cancellation);
		}

		let mut static_routes = settings.routes();
		static_routes.extend(self.extra_static_routes);

		Ok(RouteAggregatorService::new(
			resolver,
			settings.base_tokens(),
			static_routes,
			storage,
		))
	}
}
