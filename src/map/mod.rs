// src/map/mod.rs
// =============================================================================
// This module holds the road map and the data it is built from.
//
// Submodules:
// - graph: the Map type (cities + roads as an adjacency list)
// - atlas: the built-in road network, decoded from embedded JSON
// - error: what can go wrong while building or reading a map
// =============================================================================

mod atlas;
mod error;
mod graph;

pub use atlas::Atlas;
pub use error::{MapError, MapResult};
pub use graph::{Edge, Map};
