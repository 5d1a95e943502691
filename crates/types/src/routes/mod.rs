//! Route models and the origin/destination route map

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::chains::ChainId;
use crate::tokens::{Address, TokenId};

/// Classification of a transfer route between two chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RouteKind {
	/// Destination router is itself a configured base token
	CollateralToCollateral,
	/// Destination is a synthetic mint with no independent backing
	CollateralToSynthetic,
	/// Reverse edge of a collateral-to-synthetic route
	SyntheticToCollateral,
	/// Edge between two synthetic mints of the same base token
	SyntheticToSynthetic,
	/// Manually configured IBC path, merged in after computation
	IbcToIbc,
}

impl RouteKind {
	/// Whether the origin side of this route is a base (collateral/native) token.
	pub fn origin_is_base(&self) -> bool {
		matches!(
			self,
			RouteKind::CollateralToCollateral | RouteKind::CollateralToSynthetic
		)
	}
}

/// One directed transfer route between two chains for one token.
///
/// Routes are value objects: immutable, no identity beyond their fields.
/// Decimals and addresses are carried verbatim from the input that
/// produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
	pub kind: RouteKind,
	/// Id of the base token this route derives from
	pub base_token_id: TokenId,
	/// Router address of the base token on its home chain
	pub base_router: Address,
	pub origin_chain: ChainId,
	pub origin_router: Address,
	pub origin_decimals: u8,
	pub destination_chain: ChainId,
	pub destination_router: Address,
	pub destination_decimals: u8,
	/// Set only when the destination side is itself a configured base token
	#[serde(skip_serializing_if = "Option::is_none")]
	pub destination_token_id: Option<TokenId>,
}

/// Complete directed route graph: origin chain -> destination chain -> routes.
///
/// The map is pre-populated for every ordered pair of distinct chains seen
/// in the input before any route is inserted, so a missing top-level or
/// second-level key means the chain was never part of the computation,
/// while an empty list means "known chains, no route between them".
/// Self-pairs are never present. Within one slot, insertion order is
/// preserved and is part of the observable contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoutesMap(HashMap<ChainId, HashMap<ChainId, Vec<Route>>>);

impl RoutesMap {
	pub fn new() -> Self {
		Self::default()
	}

	/// Pre-populate empty slots for every ordered pair of distinct chains.
	pub fn with_chains<'a>(chains: impl IntoIterator<Item = &'a ChainId> + Clone) -> Self {
		let mut map = HashMap::new();
		for origin in chains.clone() {
			let destinations: HashMap<ChainId, Vec<Route>> = chains
				.clone()
				.into_iter()
				.filter(|destination| *destination != origin)
				.map(|destination| (destination.clone(), Vec::new()))
				.collect();
			map.insert(origin.clone(), destinations);
		}
		Self(map)
	}

	/// Append a route to its pre-populated slot.
	///
	/// Returns `false` without inserting when the slot does not exist
	/// (self-pair or a chain the map was not initialized with); the caller
	/// decides whether that is an anomaly worth reporting.
	pub fn insert(&mut self, route: Route) -> bool {
		match self
			.0
			.get_mut(&route.origin_chain)
			.and_then(|destinations| destinations.get_mut(&route.destination_chain))
		{
			Some(slot) => {
				slot.push(route);
				true
			},
			None => false,
		}
	}

	/// Append a route, creating origin/destination keys on demand.
	///
	/// This is the merge path for statically configured routes; unlike the
	/// builder's pre-population it tolerates chains the computation never
	/// saw. Self-pairs are still rejected.
	pub fn insert_or_create(&mut self, route: Route) -> bool {
		if route.origin_chain == route.destination_chain {
			return false;
		}
		self.0
			.entry(route.origin_chain.clone())
			.or_default()
			.entry(route.destination_chain.clone())
			.or_default()
			.push(route);
		true
	}

	/// All routes from `origin` to `destination`, in insertion order.
	///
	/// Empty both for "known chains, no routes" and for unknown chains;
	/// use [`RoutesMap::contains_pair`] to distinguish the two.
	pub fn routes_between(&self, origin: &ChainId, destination: &ChainId) -> &[Route] {
		self.0
			.get(origin)
			.and_then(|destinations| destinations.get(destination))
			.map(Vec::as_slice)
			.unwrap_or(&[])
	}

	/// The route for a specific base token between two chains, if any.
	pub fn find_route(
		&self,
		origin: &ChainId,
		destination: &ChainId,
		token_id: &TokenId,
	) -> Option<&Route> {
		self.routes_between(origin, destination)
			.iter()
			.find(|route| route.base_token_id == *token_id)
	}

	/// Whether a route exists for the given base token between two chains.
	pub fn has_route(&self, origin: &ChainId, destination: &ChainId, token_id: &TokenId) -> bool {
		self.find_route(origin, destination, token_id).is_some()
	}

	/// Whether the ordered chain pair was part of the computation.
	pub fn contains_pair(&self, origin: &ChainId, destination: &ChainId) -> bool {
		self.0
			.get(origin)
			.map(|destinations| destinations.contains_key(destination))
			.unwrap_or(false)
	}

	/// All origin chains present in the map.
	pub fn origins(&self) -> impl Iterator<Item = &ChainId> {
		self.0.keys()
	}

	/// All destination chains reachable from `origin`.
	pub fn destinations_from(&self, origin: &ChainId) -> impl Iterator<Item = &ChainId> {
		self.0
			.get(origin)
			.into_iter()
			.flat_map(|destinations| destinations.keys())
	}

	/// Every route in the map, in unspecified slot order.
	pub fn iter_routes(&self) -> impl Iterator<Item = &Route> {
		self.0
			.values()
			.flat_map(|destinations| destinations.values())
			.flatten()
	}

	/// Number of top-level origin chains.
	pub fn chain_count(&self) -> usize {
		self.0.len()
	}

	/// Total number of routes across all slots.
	pub fn route_count(&self) -> usize {
		self.0
			.values()
			.flat_map(|destinations| destinations.values())
			.map(Vec::len)
			.sum()
	}

	/// True when the map has no top-level keys at all.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn chain(id: &str) -> ChainId {
		ChainId::new(id)
	}

	fn test_route(origin: &str, destination: &str) -> Route {
		Route {
			kind: RouteKind::CollateralToSynthetic,
			base_token_id: TokenId::new("ethereum:5/0xaa"),
			base_router: Address::new("0xaa"),
			origin_chain: chain(origin),
			origin_router: Address::new("0xaa"),
			origin_decimals: 18,
			destination_chain: chain(destination),
			destination_router: Address::new("0xbb"),
			destination_decimals: 18,
			destination_token_id: None,
		}
	}

	#[test]
	fn test_with_chains_prepopulates_all_ordered_pairs() {
		let chains = vec![chain("ethereum:1"), chain("ethereum:10"), chain("cosmos:o")];
		let map = RoutesMap::with_chains(&chains);

		for origin in &chains {
			for destination in &chains {
				if origin == destination {
					assert!(!map.contains_pair(origin, destination));
				} else {
					assert!(map.contains_pair(origin, destination));
					assert!(map.routes_between(origin, destination).is_empty());
				}
			}
		}
	}

	#[test]
	fn test_insert_rejects_uninitialized_slot() {
		let chains = vec![chain("ethereum:1"), chain("ethereum:10")];
		let mut map = RoutesMap::with_chains(&chains);

		assert!(map.insert(test_route("ethereum:1", "ethereum:10")));
		// Self-pair slot was never created
		assert!(!map.insert(test_route("ethereum:1", "ethereum:1")));
		// Unknown chain
		assert!(!map.insert(test_route("ethereum:1", "ethereum:42161")));
	}

	#[test]
	fn test_insert_or_create_builds_keys_lazily() {
		let mut map = RoutesMap::new();
		assert!(map.insert_or_create(test_route("cosmos:osmosis-1", "cosmos:neutron-1")));
		assert_eq!(
			map.routes_between(&chain("cosmos:osmosis-1"), &chain("cosmos:neutron-1"))
				.len(),
			1
		);
		// Still refuses self-pairs
		assert!(!map.insert_or_create(test_route("cosmos:osmosis-1", "cosmos:osmosis-1")));
	}

	#[test]
	fn test_slot_preserves_insertion_order() {
		let chains = vec![chain("ethereum:1"), chain("ethereum:10")];
		let mut map = RoutesMap::with_chains(&chains);

		let mut first = test_route("ethereum:1", "ethereum:10");
		first.base_token_id = TokenId::new("ethereum:1/0x01");
		let mut second = test_route("ethereum:1", "ethereum:10");
		second.base_token_id = TokenId::new("ethereum:1/0x02");

		map.insert(first.clone());
		map.insert(second.clone());

		let slot = map.routes_between(&chain("ethereum:1"), &chain("ethereum:10"));
		assert_eq!(slot[0].base_token_id, first.base_token_id);
		assert_eq!(slot[1].base_token_id, second.base_token_id);
	}

	#[test]
	fn test_find_route_matches_base_token_id() {
		let chains = vec![chain("ethereum:1"), chain("ethereum:10")];
		let mut map = RoutesMap::with_chains(&chains);
		map.insert(test_route("ethereum:1", "ethereum:10"));

		let wanted = TokenId::new("ethereum:5/0xaa");
		let other = TokenId::new("ethereum:5/0xdd");

		assert!(map.has_route(&chain("ethereum:1"), &chain("ethereum:10"), &wanted));
		assert!(!map.has_route(&chain("ethereum:1"), &chain("ethereum:10"), &other));
		assert!(map
			.find_route(&chain("ethereum:1"), &chain("ethereum:10"), &wanted)
			.is_some());
	}

	#[test]
	fn test_empty_map_has_no_keys() {
		let map = RoutesMap::new();
		assert!(map.is_empty());
		assert_eq!(map.route_count(), 0);
		assert_eq!(map.origins().count(), 0);
	}
}
