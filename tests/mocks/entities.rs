//! Test entity fixtures

use warp_aggregator::{
	Address, BaseToken, ChainId, EnrichedToken, RemoteRouterRef, TokenKind,
};

// Chains from the reference testnet deployment
pub const GOERLI: &str = "ethereum:5";
pub const SEPOLIA: &str = "ethereum:11155111";
pub const ALFAJORES: &str = "ethereum:44787";
pub const SOLANA_DEVNET: &str = "sealevel:1399811149";

pub fn chain(id: &str) -> ChainId {
	ChainId::new(id)
}

pub fn collateral(chain_id: &str, router: &str, symbol: &str) -> BaseToken {
	BaseToken::new(
		chain(chain_id),
		Address::new(router),
		18,
		symbol,
		format!("{} Token", symbol),
		TokenKind::Collateral,
	)
}

pub fn native(chain_id: &str, router: &str, symbol: &str) -> BaseToken {
	BaseToken::new(
		chain(chain_id),
		Address::new(router),
		18,
		symbol,
		format!("{} Token", symbol),
		TokenKind::Native,
	)
}

pub fn remote(chain_id: &str, router: &str, decimals: u8) -> RemoteRouterRef {
	RemoteRouterRef {
		chain: chain(chain_id),
		router: Address::new(router),
		decimals,
	}
}

pub fn enriched(base: BaseToken, remotes: Vec<RemoteRouterRef>) -> EnrichedToken {
	EnrichedToken::new(base, remotes)
}
