//! Tests for route-graph computation, merging, and query helpers

mod mocks;

use mocks::entities::*;
use warp_aggregator::{
	compute_token_routes, merge_routes, Address, RouteKind, TokenId,
};

/// The reference fixture: one collateral token on goerli with purely
/// synthetic remotes on sepolia and alfajores.
fn fanout_tokens() -> Vec<warp_aggregator::EnrichedToken> {
	vec![enriched(
		collateral(GOERLI, "0x1000000000000000000000000000000000000001", "WETH"),
		vec![
			remote(SEPOLIA, "0x2000000000000000000000000000000000000002", 18),
			remote(ALFAJORES, "0x3000000000000000000000000000000000000003", 18),
		],
	)]
}

#[test]
fn test_empty_input_yields_map_with_no_keys() {
	let routes = compute_token_routes(&[]);
	assert!(routes.is_empty());
	assert_eq!(routes.origins().count(), 0);
}

#[test]
fn test_no_self_routes_exist() {
	let routes = compute_token_routes(&fanout_tokens());
	for origin in routes.origins() {
		assert!(!routes.contains_pair(origin, origin));
		assert!(routes.destinations_from(origin).all(|d| d != origin));
	}
}

#[test]
fn test_chain_pair_completeness() {
	let routes = compute_token_routes(&fanout_tokens());
	let chains = [chain(GOERLI), chain(SEPOLIA), chain(ALFAJORES)];

	assert_eq!(routes.chain_count(), 3);
	for origin in &chains {
		for destination in &chains {
			if origin == destination {
				continue;
			}
			assert!(
				routes.contains_pair(origin, destination),
				"missing pair {} -> {}",
				origin,
				destination
			);
		}
	}
}

#[test]
fn test_transitive_synthetic_fanout_yields_six_routes() {
	let routes = compute_token_routes(&fanout_tokens());

	let goerli = chain(GOERLI);
	let sepolia = chain(SEPOLIA);
	let alfajores = chain(ALFAJORES);

	for synthetic_chain in [&sepolia, &alfajores] {
		let forward = routes.routes_between(&goerli, synthetic_chain);
		assert_eq!(forward.len(), 1);
		assert_eq!(forward[0].kind, RouteKind::CollateralToSynthetic);
		assert_eq!(forward[0].destination_token_id, None);

		let reverse = routes.routes_between(synthetic_chain, &goerli);
		assert_eq!(reverse.len(), 1);
		assert_eq!(reverse[0].kind, RouteKind::SyntheticToCollateral);
	}

	let between = routes.routes_between(&sepolia, &alfajores);
	assert_eq!(between.len(), 1);
	assert_eq!(between[0].kind, RouteKind::SyntheticToSynthetic);

	let mirrored = routes.routes_between(&alfajores, &sepolia);
	assert_eq!(mirrored.len(), 1);
	assert_eq!(mirrored[0].kind, RouteKind::SyntheticToSynthetic);

	assert_eq!(routes.route_count(), 6);
}

#[test]
fn test_synthetic_round_trip_single_remote() {
	let tokens = vec![enriched(
		collateral(GOERLI, "0xaa00000000000000000000000000000000000001", "USDC"),
		vec![remote(SEPOLIA, "0xbb00000000000000000000000000000000000002", 6)],
	)];
	let routes = compute_token_routes(&tokens);

	let forward = routes.routes_between(&chain(GOERLI), &chain(SEPOLIA));
	assert_eq!(forward.len(), 1);
	assert_eq!(forward[0].kind, RouteKind::CollateralToSynthetic);

	let reverse = routes.routes_between(&chain(SEPOLIA), &chain(GOERLI));
	assert_eq!(reverse.len(), 1);
	assert_eq!(reverse[0].kind, RouteKind::SyntheticToCollateral);

	// Nothing to pair a single synthetic remote with
	assert_eq!(routes.route_count(), 2);
	assert!(routes
		.iter_routes()
		.all(|r| r.kind != RouteKind::SyntheticToSynthetic));
}

#[test]
fn test_collateral_pair_is_bidirectional_with_token_ids() {
	let usdc_goerli = collateral(GOERLI, "0xaa00000000000000000000000000000000000001", "USDC");
	let usdc_sepolia = collateral(SEPOLIA, "0xbb00000000000000000000000000000000000002", "USDC");

	let tokens = vec![
		enriched(
			usdc_goerli.clone(),
			// Checksummed casing on the wire; still matches the configured token
			vec![remote(SEPOLIA, "0xBB00000000000000000000000000000000000002", 6)],
		),
		enriched(
			usdc_sepolia.clone(),
			vec![remote(GOERLI, "0xAA00000000000000000000000000000000000001", 6)],
		),
	];

	let routes = compute_token_routes(&tokens);

	let forward = routes.routes_between(&chain(GOERLI), &chain(SEPOLIA));
	assert_eq!(forward.len(), 1);
	assert_eq!(forward[0].kind, RouteKind::CollateralToCollateral);
	assert_eq!(
		forward[0].destination_token_id,
		Some(usdc_sepolia.id.clone())
	);
	assert_eq!(forward[0].base_token_id, usdc_goerli.id);

	let reverse = routes.routes_between(&chain(SEPOLIA), &chain(GOERLI));
	assert_eq!(reverse.len(), 1);
	assert_eq!(reverse[0].kind, RouteKind::CollateralToCollateral);
	assert_eq!(reverse[0].destination_token_id, Some(usdc_goerli.id.clone()));
	assert_eq!(reverse[0].base_token_id, usdc_sepolia.id);

	// Exactly one route per direction: the base-match branch never
	// synthesizes the reverse edge itself
	assert_eq!(routes.route_count(), 2);
}

#[test]
fn test_base_matched_remote_is_excluded_from_synthetic_pairing() {
	// A multi-collateral pair plus one synthetic remote on a third chain.
	let usdc_goerli = collateral(GOERLI, "0xaa00000000000000000000000000000000000001", "USDC");
	let usdc_sepolia = collateral(SEPOLIA, "0xbb00000000000000000000000000000000000002", "USDC");

	let tokens = vec![
		enriched(
			usdc_goerli.clone(),
			vec![
				remote(SEPOLIA, "0xbb00000000000000000000000000000000000002", 6),
				remote(ALFAJORES, "0xcc00000000000000000000000000000000000003", 6),
			],
		),
		enriched(
			usdc_sepolia,
			vec![remote(GOERLI, "0xaa00000000000000000000000000000000000001", 6)],
		),
	];

	let routes = compute_token_routes(&tokens);

	// The synthetic on alfajores pairs with nothing: its only sibling
	// remote base-matches the sepolia token
	assert!(routes
		.routes_between(&chain(ALFAJORES), &chain(SEPOLIA))
		.is_empty());
	assert!(routes
		.routes_between(&chain(SEPOLIA), &chain(ALFAJORES))
		.is_empty());

	// goerli<->sepolia collateral pair, goerli<->alfajores synthetic pair
	assert_eq!(routes.route_count(), 4);
}

#[test]
fn test_determinism_same_input_same_output() {
	let tokens = fanout_tokens();
	let first = compute_token_routes(&tokens);
	let second = compute_token_routes(&tokens);
	assert_eq!(first, second);
}

#[test]
fn test_decimals_and_addresses_pass_through_verbatim() {
	let base = collateral(GOERLI, "0xAbCd000000000000000000000000000000000001", "MIX");
	let tokens = vec![enriched(
		base.clone(),
		vec![
			remote(SEPOLIA, "0xEf00000000000000000000000000000000000002", 9),
			remote(SOLANA_DEVNET, "9LZCSBdmDzQGdanNBPsAEf9pXCNAQu693bMgjGDuDqLK", 6),
		],
	)];

	let routes = compute_token_routes(&tokens);

	let to_sepolia = &routes.routes_between(&chain(GOERLI), &chain(SEPOLIA))[0];
	assert_eq!(
		to_sepolia.origin_router,
		Address::new("0xAbCd000000000000000000000000000000000001")
	);
	assert_eq!(
		to_sepolia.destination_router,
		Address::new("0xEf00000000000000000000000000000000000002")
	);
	assert_eq!(to_sepolia.origin_decimals, 18);
	assert_eq!(to_sepolia.destination_decimals, 9);

	let to_solana = &routes.routes_between(&chain(GOERLI), &chain(SOLANA_DEVNET))[0];
	assert_eq!(
		to_solana.destination_router,
		Address::new("9LZCSBdmDzQGdanNBPsAEf9pXCNAQu693bMgjGDuDqLK")
	);
	assert_eq!(to_solana.destination_decimals, 6);

	// The synthetic pair between the two remotes carries the same values
	let between = &routes.routes_between(&chain(SEPOLIA), &chain(SOLANA_DEVNET))[0];
	assert_eq!(between.origin_decimals, 9);
	assert_eq!(between.destination_decimals, 6);
}

#[test]
fn test_merge_appends_without_dedup_and_creates_keys() {
	let computed = compute_token_routes(&fanout_tokens());
	let total = computed.route_count();

	// An IBC-only path between chains the computation never saw
	let ibc = warp_aggregator::Route {
		kind: RouteKind::IbcToIbc,
		base_token_id: TokenId::new("cosmos:osmosis-1/ibc/27394"),
		base_router: Address::new("ibc/27394"),
		origin_chain: chain("cosmos:osmosis-1"),
		origin_router: Address::new("ibc/27394"),
		origin_decimals: 6,
		destination_chain: chain("cosmos:neutron-1"),
		destination_router: Address::new("ibc/F082"),
		destination_decimals: 6,
		destination_token_id: None,
	};

	let merged = merge_routes(&computed, &[ibc.clone()]);
	let merged_again = merge_routes(&merged, &[ibc.clone()]);

	// Copy-on-write: inputs untouched
	assert_eq!(computed.route_count(), total);
	assert_eq!(merged.route_count(), total + 1);

	// No dedup: the same route lands twice
	let slot = merged_again.routes_between(&chain("cosmos:osmosis-1"), &chain("cosmos:neutron-1"));
	assert_eq!(slot.len(), 2);
	assert_eq!(slot[0], slot[1]);
}

#[test]
fn test_query_helpers() {
	let weth = collateral(GOERLI, "0x1000000000000000000000000000000000000001", "WETH");
	let usdc = collateral(GOERLI, "0x4000000000000000000000000000000000000004", "USDC");
	let tokens = vec![
		enriched(
			weth.clone(),
			vec![remote(SEPOLIA, "0x2000000000000000000000000000000000000002", 18)],
		),
		enriched(
			usdc.clone(),
			vec![remote(SEPOLIA, "0x5000000000000000000000000000000000000005", 6)],
		),
	];

	let routes = compute_token_routes(&tokens);
	let goerli = chain(GOERLI);
	let sepolia = chain(SEPOLIA);

	// Two routes share the slot, in token config order
	let slot = routes.routes_between(&goerli, &sepolia);
	assert_eq!(slot.len(), 2);
	assert_eq!(slot[0].base_token_id, weth.id);
	assert_eq!(slot[1].base_token_id, usdc.id);

	assert!(routes.has_route(&goerli, &sepolia, &weth.id));
	assert!(routes.has_route(&goerli, &sepolia, &usdc.id));
	assert!(!routes.has_route(&sepolia, &goerli, &TokenId::new("ethereum:5/0xdead")));

	let found = routes.find_route(&goerli, &sepolia, &usdc.id).unwrap();
	assert_eq!(found.kind, RouteKind::CollateralToSynthetic);
	assert_eq!(found.origin_decimals, 18);
}
