//! Domain-to-chain directory built from configuration

use std::collections::HashMap;

use warp_types::{ChainId, ChainLookup, ChainLookupError, DomainId};

use crate::Settings;

/// Maps wire-level domain ids to protocol-qualified chain ids.
///
/// Built once from validated settings; this is the default
/// [`ChainLookup`] implementation injected into the resolver.
#[derive(Debug, Clone, Default)]
pub struct ChainDirectory {
	domains: HashMap<DomainId, ChainId>,
}

impl ChainDirectory {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_settings(settings: &Settings) -> Self {
		let domains = settings
			.chains
			.values()
			.map(|chain| (chain.domain, ChainId::new(chain.chain_id.clone())))
			.collect();
		Self { domains }
	}

	pub fn insert(&mut self, domain: DomainId, chain: ChainId) {
		self.domains.insert(domain, chain);
	}

	pub fn len(&self) -> usize {
		self.domains.len()
	}

	pub fn is_empty(&self) -> bool {
		self.domains.is_empty()
	}
}

impl ChainLookup for ChainDirectory {
	fn chain_for_domain(&self, domain: DomainId) -> Result<ChainId, ChainLookupError> {
		self.domains
			.get(&domain)
			.cloned()
			.ok_or(ChainLookupError::UnknownDomain { domain })
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::settings::ChainSettings;

	#[test]
	fn test_directory_resolves_declared_domains() {
		let mut settings = Settings::default();
		settings.chains.insert(
			"sepolia".to_string(),
			ChainSettings {
				chain_id: "ethereum:11155111".to_string(),
				domain: 11155111,
				name: None,
				is_testnet: Some(true),
			},
		);

		let directory = ChainDirectory::from_settings(&settings);
		assert_eq!(
			directory.chain_for_domain(11155111).unwrap(),
			ChainId::new("ethereum:11155111")
		);
		assert_eq!(
			directory.chain_for_domain(1),
			Err(ChainLookupError::UnknownDomain { domain: 1 })
		);
	}
}
