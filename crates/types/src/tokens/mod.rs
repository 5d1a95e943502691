//! Token domain models: base tokens, remote router refs, enrichment output

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::chains::{ChainId, DomainId};

/// Router or token contract address, carried verbatim.
///
/// The stored string is never rewritten; comparison goes through
/// [`Address::matches`], which is case-insensitive for `0x`-prefixed hex
/// addresses and exact for everything else (base58 Sealevel addresses and
/// bech32 Cosmos addresses are case-sensitive).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
	pub fn new(address: impl Into<String>) -> Self {
		Self(address.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Normalized comparison: hex addresses compare case-insensitively.
	pub fn matches(&self, other: &Address) -> bool {
		if self.is_hex() && other.is_hex() {
			self.0.eq_ignore_ascii_case(&other.0)
		} else {
			self.0 == other.0
		}
	}

	fn is_hex(&self) -> bool {
		self.0.starts_with("0x") || self.0.starts_with("0X")
	}
}

impl std::fmt::Display for Address {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for Address {
	fn from(address: &str) -> Self {
		Self(address.to_string())
	}
}

/// Opaque, chain-qualified token identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	/// Derive the canonical id for a token from its chain and router.
	pub fn for_token(chain: &ChainId, router: &Address) -> Self {
		Self(format!("{}/{}", chain, router))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for TokenId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.0)
	}
}

/// Token classification used for adapter dispatch.
///
/// Base tokens are `Collateral` or `Native`; `Synthetic` is the kind of a
/// remote mint with no independent backing and only ever appears when
/// selecting an adapter for a remote-chain query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
	Collateral,
	Native,
	Synthetic,
}

impl TokenKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			TokenKind::Collateral => "collateral",
			TokenKind::Native => "native",
			TokenKind::Synthetic => "synthetic",
		}
	}
}

impl std::fmt::Display for TokenKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A collateral or native token deployed on one chain.
///
/// Constructed from configuration; immutable for the lifetime of a
/// route-computation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseToken {
	/// Canonical chain-qualified token id
	pub id: TokenId,
	/// Chain the token is deployed on
	pub chain: ChainId,
	/// Router (bridge contract) address on that chain
	pub router: Address,
	/// Token decimals on the home chain
	pub decimals: u8,
	/// Display symbol (e.g. "USDC")
	pub symbol: String,
	/// Display name
	pub name: String,
	/// Collateral vs native classification
	pub kind: TokenKind,
	/// Non-fungible collateral; remote decimals are always 0
	#[serde(default)]
	pub is_nft: bool,
}

impl BaseToken {
	pub fn new(
		chain: ChainId,
		router: Address,
		decimals: u8,
		symbol: impl Into<String>,
		name: impl Into<String>,
		kind: TokenKind,
	) -> Self {
		Self {
			id: TokenId::for_token(&chain, &router),
			chain,
			router,
			decimals,
			symbol: symbol.into(),
			name: name.into(),
			kind,
			is_nft: false,
		}
	}

	pub fn with_nft(mut self, is_nft: bool) -> Self {
		self.is_nft = is_nft;
		self
	}
}

/// One entry returned by a router contract's remote-router enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRouterEntry {
	pub domain: DomainId,
	pub router: Address,
}

/// On-chain token metadata, fetched when decimals cannot be inferred
/// from the configured token list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetadata {
	pub decimals: u8,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub symbol: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
}

/// A resolved remote router peer of a base token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteRouterRef {
	/// Destination chain the peer router lives on
	pub chain: ChainId,
	/// Router address on the destination chain
	pub router: Address,
	/// Token decimals on the destination chain
	pub decimals: u8,
}

/// A base token enriched with its full remote-router list.
///
/// Resolver output and route-graph builder input. The remote list
/// preserves the order reported by the router contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedToken {
	#[serde(flatten)]
	pub base: BaseToken,
	pub remotes: Vec<RemoteRouterRef>,
	/// When the enrichment pass resolved this token
	pub resolved_at: DateTime<Utc>,
}

impl EnrichedToken {
	pub fn new(base: BaseToken, remotes: Vec<RemoteRouterRef>) -> Self {
		Self {
			base,
			remotes,
			resolved_at: Utc::now(),
		}
	}

	/// All chain ids this token references: its own plus every remote.
	pub fn chains(&self) -> impl Iterator<Item = &ChainId> {
		std::iter::once(&self.base.chain).chain(self.remotes.iter().map(|remote| &remote.chain))
	}
}
