//! Chain identity models and the chain-metadata lookup trait

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire-level domain identifier reported by router contracts.
///
/// Domains are assigned per deployment and are not interchangeable with
/// chain ids; a [`ChainLookup`] implementation maps between the two.
pub type DomainId = u32;

/// Protocol family a chain belongs to.
///
/// This is a closed set: adapter dispatch matches on it exhaustively, and
/// a chain id with any other qualifier is rejected at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
	/// EVM chains (Ethereum mainnet, rollups, sidechains)
	Ethereum,
	/// Sealevel runtime chains (Solana and derivatives)
	Sealevel,
	/// Cosmos SDK chains
	Cosmos,
}

impl Protocol {
	/// Parse a chain-id qualifier (the part before `:`) into a protocol.
	pub fn from_qualifier(qualifier: &str) -> Option<Self> {
		match qualifier {
			"ethereum" => Some(Protocol::Ethereum),
			"sealevel" => Some(Protocol::Sealevel),
			"cosmos" => Some(Protocol::Cosmos),
			_ => None,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Protocol::Ethereum => "ethereum",
			Protocol::Sealevel => "sealevel",
			Protocol::Cosmos => "cosmos",
		}
	}
}

impl fmt::Display for Protocol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Opaque, protocol-qualified chain identifier.
///
/// The canonical form is `<protocol>:<reference>`, e.g. `ethereum:1` or
/// `sealevel:1399811149`. The value is carried verbatim and used as a map
/// key throughout the route graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(String);

impl ChainId {
	pub fn new(id: impl Into<String>) -> Self {
		Self(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Protocol family this chain belongs to, parsed from the qualifier.
	pub fn protocol(&self) -> Result<Protocol, ChainLookupError> {
		let qualifier = self
			.0
			.split_once(':')
			.map(|(qualifier, _)| qualifier)
			.ok_or_else(|| ChainLookupError::MissingProtocol {
				chain_id: self.0.clone(),
			})?;

		Protocol::from_qualifier(qualifier).ok_or_else(|| ChainLookupError::UnsupportedProtocol {
			qualifier: qualifier.to_string(),
			chain_id: self.0.clone(),
		})
	}

	/// The protocol-local reference (the part after the qualifier).
	pub fn reference(&self) -> &str {
		self.0
			.split_once(':')
			.map(|(_, reference)| reference)
			.unwrap_or(&self.0)
	}
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<&str> for ChainId {
	fn from(id: &str) -> Self {
		Self(id.to_string())
	}
}

impl From<String> for ChainId {
	fn from(id: String) -> Self {
		Self(id)
	}
}

/// Chain-metadata lookup supplied by the embedding application.
///
/// Router contracts report peers by [`DomainId`]; implementations resolve
/// those into protocol-qualified chain ids. An unknown domain is a typed
/// error so resolution failures carry enough context to diagnose.
pub trait ChainLookup: Send + Sync + std::fmt::Debug {
	fn chain_for_domain(&self, domain: DomainId) -> Result<ChainId, ChainLookupError>;
}

/// Errors from chain identity parsing and domain resolution
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainLookupError {
	#[error("Unknown domain id: {domain}")]
	UnknownDomain { domain: DomainId },

	#[error("Chain id '{chain_id}' is missing a protocol qualifier")]
	MissingProtocol { chain_id: String },

	#[error("Unsupported protocol qualifier '{qualifier}' in chain id '{chain_id}'")]
	UnsupportedProtocol { qualifier: String, chain_id: String },
}
