//! Route-graph computation over enriched tokens
//!
//! Pure, synchronous, deterministic: the same enriched token list always
//! produces the same map, including route ordering within each
//! origin/destination slot.

use tracing::warn;

use warp_types::{ChainId, EnrichedToken, RemoteRouterRef, Route, RouteKind, RoutesMap};

/// Compute the complete directed route graph for a set of enriched tokens.
///
/// For every base token and every remote router it is enrolled with:
/// a remote whose router address matches another configured base token
/// yields a collateral-to-collateral edge (the reverse direction is
/// produced when the matched token takes its own turn in the outer loop);
/// a remote matching no base token is a synthetic mint and yields the
/// collateral-to-synthetic edge, its synthetic-to-collateral reverse, and
/// a synthetic-to-synthetic edge to every other synthetic remote of the
/// same base token.
///
/// Precondition: the input list must be closed under cross-referenced
/// base tokens. If only one side of a multi-collateral pair is supplied,
/// the missing side's direction is silently absent rather than an error.
///
/// An empty input produces a map with no keys. A remote reported on the
/// base token's own chain has no slot (the map never holds self-pairs)
/// and is dropped with a warning; well-formed deployments never hit this.
pub fn compute_token_routes(tokens: &[EnrichedToken]) -> RoutesMap {
	let chains = collect_chains(tokens);
	let mut routes = RoutesMap::with_chains(&chains);

	for token in tokens {
		// Classify every remote once; the synthetic-to-synthetic pass below
		// needs the classification of its peers, not just of the current one.
		let base_matches: Vec<Option<&EnrichedToken>> = token
			.remotes
			.iter()
			.map(|remote| find_base_match(token, remote, tokens))
			.collect();

		for (index, remote) in token.remotes.iter().enumerate() {
			match base_matches[index] {
				Some(matched) => {
					push(&mut routes, forward_route(token, remote, Some(matched)));
					// No reverse or transitive synthesis here: the matched
					// token's own outer-loop pass yields the other direction.
				},
				None => {
					push(&mut routes, forward_route(token, remote, None));
					push(&mut routes, reverse_route(token, remote));

					for (other_index, other) in token.remotes.iter().enumerate() {
						if other_index == index || base_matches[other_index].is_some() {
							continue;
						}
						push(&mut routes, synthetic_route(token, remote, other));
					}
				},
			}
		}
	}

	routes
}

/// Union statically configured routes (e.g. IBC-only paths) into a map.
///
/// Copy-on-write: the input map is left untouched and the merged map is
/// returned. Origin/destination keys are created on demand, unlike the
/// builder's pre-population. No deduplication happens here; callers must
/// not supply routes that overlap the computed set.
pub fn merge_routes(routes: &RoutesMap, additional: &[Route]) -> RoutesMap {
	let mut merged = routes.clone();
	for route in additional {
		if !merged.insert_or_create(route.clone()) {
			warn!(
				origin = %route.origin_chain,
				token = %route.base_token_id,
				"Dropping static route with identical origin and destination"
			);
		}
	}
	merged
}

/// Distinct chain ids referenced by any token or remote, in first-seen order.
fn collect_chains(tokens: &[EnrichedToken]) -> Vec<ChainId> {
	let mut chains: Vec<ChainId> = Vec::new();
	for token in tokens {
		for chain in token.chains() {
			if !chains.contains(chain) {
				chains.push(chain.clone());
			}
		}
	}
	chains
}

/// First other token whose router address matches the remote's router.
///
/// Address comparison is normalized (case-insensitive for hex). With
/// validated configuration the match is unambiguous; should two base
/// tokens ever share a router address, the first in list order wins.
fn find_base_match<'a>(
	token: &EnrichedToken,
	remote: &RemoteRouterRef,
	tokens: &'a [EnrichedToken],
) -> Option<&'a EnrichedToken> {
	tokens
		.iter()
		.find(|candidate| candidate.base.id != token.base.id && candidate.base.router.matches(&remote.router))
}

fn forward_route(
	token: &EnrichedToken,
	remote: &RemoteRouterRef,
	matched: Option<&EnrichedToken>,
) -> Route {
	Route {
		kind: if matched.is_some() {
			RouteKind::CollateralToCollateral
		} else {
			RouteKind::CollateralToSynthetic
		},
		base_token_id: token.base.id.clone(),
		base_router: token.base.router.clone(),
		origin_chain: token.base.chain.clone(),
		origin_router: token.base.router.clone(),
		origin_decimals: token.base.decimals,
		destination_chain: remote.chain.clone(),
		destination_router: remote.router.clone(),
		destination_decimals: remote.decimals,
		destination_token_id: matched.map(|m| m.base.id.clone()),
	}
}

fn reverse_route(token: &EnrichedToken, remote: &RemoteRouterRef) -> Route {
	Route {
		kind: RouteKind::SyntheticToCollateral,
		base_token_id: token.base.id.clone(),
		base_router: token.base.router.clone(),
		origin_chain: remote.chain.clone(),
		origin_router: remote.router.clone(),
		origin_decimals: remote.decimals,
		destination_chain: token.base.chain.clone(),
		destination_router: token.base.router.clone(),
		destination_decimals: token.base.decimals,
		destination_token_id: None,
	}
}

fn synthetic_route(token: &EnrichedToken, from: &RemoteRouterRef, to: &RemoteRouterRef) -> Route {
	Route {
		kind: RouteKind::SyntheticToSynthetic,
		base_token_id: token.base.id.clone(),
		base_router: token.base.router.clone(),
		origin_chain: from.chain.clone(),
		origin_router: from.router.clone(),
		origin_decimals: from.decimals,
		destination_chain: to.chain.clone(),
		destination_router: to.router.clone(),
		destination_decimals: to.decimals,
		destination_token_id: None,
	}
}

fn push(routes: &mut RoutesMap, route: Route) {
	let origin = route.origin_chain.clone();
	let destination = route.destination_chain.clone();
	if !routes.insert(route) {
		warn!(
			origin = %origin,
			destination = %destination,
			"Dropping route for chain pair with no slot"
		);
	}
}
