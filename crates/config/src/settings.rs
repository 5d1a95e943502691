//! Configuration settings structures

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use warp_types::{Address, BaseToken, ChainId, Route, RouteKind, TokenId, TokenKind};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Settings {
	/// Known chains, keyed by a local name (e.g. "sepolia")
	pub chains: HashMap<String, ChainSettings>,
	/// Base tokens to resolve and route
	pub tokens: Vec<TokenSettings>,
	/// Manually configured routes merged after computation (e.g. IBC-only)
	#[serde(default)]
	pub static_routes: Vec<StaticRouteSettings>,
	#[serde(default)]
	pub resolver: ResolverSettings,
	#[serde(default)]
	pub logging: LoggingSettings,
}

/// One known chain: protocol-qualified id plus its wire-level domain
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChainSettings {
	/// Protocol-qualified chain id, e.g. "ethereum:11155111"
	pub chain_id: String,
	/// Domain id reported by router contracts for this chain
	pub domain: u32,
	// Optional descriptive metadata
	pub name: Option<String>,
	pub is_testnet: Option<bool>,
}

/// Individual base token configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenSettings {
	/// Protocol-qualified chain id the token is deployed on
	pub chain_id: String,
	/// Router (bridge contract) address on that chain
	pub router: String,
	pub decimals: u8,
	pub symbol: String,
	pub name: String,
	pub kind: TokenKindSetting,
	#[serde(default)]
	pub is_nft: bool,
}

/// Base token classification; synthetic tokens are never configured,
/// they are discovered by resolution.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenKindSetting {
	Collateral,
	Native,
}

impl From<TokenKindSetting> for TokenKind {
	fn from(kind: TokenKindSetting) -> Self {
		match kind {
			TokenKindSetting::Collateral => TokenKind::Collateral,
			TokenKindSetting::Native => TokenKind::Native,
		}
	}
}

impl TokenSettings {
	/// Convert to the domain model; the token id is derived from chain + router.
	pub fn to_base_token(&self) -> BaseToken {
		BaseToken::new(
			ChainId::new(self.chain_id.clone()),
			Address::new(self.router.clone()),
			self.decimals,
			self.symbol.clone(),
			self.name.clone(),
			TokenKind::from(self.kind),
		)
		.with_nft(self.is_nft)
	}
}

/// Manually configured route
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct StaticRouteSettings {
	#[serde(default = "default_static_route_kind")]
	pub kind: RouteKind,
	pub origin_chain_id: String,
	pub origin_router: String,
	pub origin_decimals: u8,
	pub destination_chain_id: String,
	pub destination_router: String,
	pub destination_decimals: u8,
}

fn default_static_route_kind() -> RouteKind {
	RouteKind::IbcToIbc
}

impl StaticRouteSettings {
	/// Convert to a domain route; the origin side doubles as the base token.
	pub fn to_route(&self) -> Route {
		let origin_chain = ChainId::new(self.origin_chain_id.clone());
		let origin_router = Address::new(self.origin_router.clone());
		Route {
			kind: self.kind,
			base_token_id: TokenId::for_token(&origin_chain, &origin_router),
			base_router: origin_router.clone(),
			origin_chain,
			origin_router,
			origin_decimals: self.origin_decimals,
			destination_chain: ChainId::new(self.destination_chain_id.clone()),
			destination_router: Address::new(self.destination_router.clone()),
			destination_decimals: self.destination_decimals,
			destination_token_id: None,
		}
	}
}

/// Resolution tuning
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ResolverSettings {
	/// Deadline for each individual adapter call in milliseconds
	pub call_timeout_ms: u64,
	/// Tokens resolved at once; 1 keeps the serial rate-limit-friendly default
	pub concurrency: usize,
	pub on_failure: FailurePolicySetting,
}

impl Default for ResolverSettings {
	fn default() -> Self {
		Self {
			call_timeout_ms: 10_000,
			concurrency: 1,
			on_failure: FailurePolicySetting::FailFast,
		}
	}
}

/// Mirror of the service-layer failure policy, kept here so this crate
/// does not depend on the service crate.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicySetting {
	/// Any token failure fails the whole pass (reference behavior)
	FailFast,
	/// Log a warning and continue without the failing token
	Skip,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Compact,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Configuration validation failures; all are fatal at startup
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigValidationError {
	#[error("Chain '{name}': invalid chain id '{chain_id}': {reason}")]
	InvalidChainId {
		name: String,
		chain_id: String,
		reason: String,
	},

	#[error("Duplicate chain id '{chain_id}' declared by '{first}' and '{second}'")]
	DuplicateChainId {
		chain_id: String,
		first: String,
		second: String,
	},

	#[error("Duplicate domain id {domain} declared by '{first}' and '{second}'")]
	DuplicateDomain {
		domain: u32,
		first: String,
		second: String,
	},

	#[error("Token '{symbol}' on '{chain_id}': empty router address")]
	EmptyRouterAddress { symbol: String, chain_id: String },

	#[error("Token '{symbol}': chain '{chain_id}' is not declared in [chains]")]
	UnknownTokenChain { symbol: String, chain_id: String },

	#[error("Token '{symbol}': NFT tokens carry 0 decimals, got {decimals}")]
	NftDecimals { symbol: String, decimals: u8 },

	#[error("Router address '{router}' is shared by tokens '{first}' and '{second}'")]
	DuplicateRouterAddress {
		router: String,
		first: String,
		second: String,
	},

	#[error("Static route {index}: chain '{chain_id}' is not declared in [chains]")]
	UnknownStaticRouteChain { index: usize, chain_id: String },

	#[error("Static route {index}: origin and destination chains are identical")]
	SelfLoopStaticRoute { index: usize },
}

impl Settings {
	/// Validate the whole settings tree.
	///
	/// Notably rejects two base tokens sharing a router address: route
	/// classification matches remotes to base tokens by address alone, so
	/// a shared address would make the first configured token win
	/// silently. Ambiguity is a configuration bug, caught here.
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		let mut seen_chain_ids: HashMap<&str, &str> = HashMap::new();
		let mut seen_domains: HashMap<u32, &str> = HashMap::new();

		for (name, chain) in &self.chains {
			let chain_id = ChainId::new(chain.chain_id.clone());
			chain_id
				.protocol()
				.map_err(|e| ConfigValidationError::InvalidChainId {
					name: name.clone(),
					chain_id: chain.chain_id.clone(),
					reason: e.to_string(),
				})?;

			if let Some(first) = seen_chain_ids.insert(chain.chain_id.as_str(), name.as_str()) {
				return Err(ConfigValidationError::DuplicateChainId {
					chain_id: chain.chain_id.clone(),
					first: first.to_string(),
					second: name.clone(),
				});
			}
			if let Some(first) = seen_domains.insert(chain.domain, name.as_str()) {
				return Err(ConfigValidationError::DuplicateDomain {
					domain: chain.domain,
					first: first.to_string(),
					second: name.clone(),
				});
			}
		}

		let declared =
			|chain_id: &str| self.chains.values().any(|chain| chain.chain_id == chain_id);

		let mut seen_routers: HashMap<String, &str> = HashMap::new();
		for token in &self.tokens {
			if token.router.trim().is_empty() {
				return Err(ConfigValidationError::EmptyRouterAddress {
					symbol: token.symbol.clone(),
					chain_id: token.chain_id.clone(),
				});
			}
			if !declared(&token.chain_id) {
				return Err(ConfigValidationError::UnknownTokenChain {
					symbol: token.symbol.clone(),
					chain_id: token.chain_id.clone(),
				});
			}
			if token.is_nft && token.decimals != 0 {
				return Err(ConfigValidationError::NftDecimals {
					symbol: token.symbol.clone(),
					decimals: token.decimals,
				});
			}

			// Normalized the same way route classification compares addresses
			let normalized = if token.router.starts_with("0x") || token.router.starts_with("0X") {
				token.router.to_ascii_lowercase()
			} else {
				token.router.clone()
			};
			if let Some(first) = seen_routers.insert(normalized, token.symbol.as_str()) {
				return Err(ConfigValidationError::DuplicateRouterAddress {
					router: token.router.clone(),
					first: first.to_string(),
					second: token.symbol.clone(),
				});
			}
		}

		for (index, route) in self.static_routes.iter().enumerate() {
			if route.origin_chain_id == route.destination_chain_id {
				return Err(ConfigValidationError::SelfLoopStaticRoute { index });
			}
			for chain_id in [&route.origin_chain_id, &route.destination_chain_id] {
				if !declared(chain_id) {
					return Err(ConfigValidationError::UnknownStaticRouteChain {
						index,
						chain_id: chain_id.clone(),
					});
				}
			}
		}

		Ok(())
	}

	/// Convert every configured token to its domain model, in config order.
	pub fn base_tokens(&self) -> Vec<BaseToken> {
		self.tokens.iter().map(TokenSettings::to_base_token).collect()
	}

	/// Convert every static route to its domain model, in config order.
	pub fn routes(&self) -> Vec<Route> {
		self.static_routes
			.iter()
			.map(StaticRouteSettings::to_route)
			.collect()
	}
}
