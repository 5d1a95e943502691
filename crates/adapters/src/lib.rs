//! Warp Adapters
//!
//! Adapter registry for the Warp Route Aggregator: a closed dispatch
//! table from (protocol family, token kind) to the on-chain query
//! implementation to use. Concrete adapters are supplied by the
//! embedding application and injected at construction time; nothing in
//! this crate touches the network.

pub mod registry;

pub use registry::AdapterRegistry;
pub use warp_types::{AdapterError, AdapterResult, RouterAdapter};
