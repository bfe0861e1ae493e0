// src/map/graph.rs
// =============================================================================
// The road map: cities and the roads between them, stored as an adjacency list.
//
// How it's stored:
// - An IndexMap from city name to the list of roads leaving that city
// - Every road is kept twice, once per endpoint, each copy pointing away
//   from the city that owns it (Baltimore's copy goes Baltimore -> Washington,
//   Washington's copy goes Washington -> Baltimore)
// - Both the city keys and each road list keep insertion order, so walking
//   the map always happens in the same order
//
// City names are matched exactly: "Baltimore" and "baltimore" are different
// keys. `suggest` exists only to help the CLI print a hint.
// =============================================================================

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::error::{MapError, MapResult};

/// One direction of a road between two cities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// The city this copy of the road starts from
    pub from: String,
    /// The city at the other end
    pub to: String,
    /// Length of the road in miles (always > 0)
    pub miles: u32,
    /// Interstate label, e.g. "I-95"
    pub interstate: String,
}

impl Edge {
    /// The same road, driven the other way
    pub fn reversed(&self) -> Edge {
        Edge {
            from: self.to.clone(),
            to: self.from.clone(),
            miles: self.miles,
            interstate: self.interstate.clone(),
        }
    }
}

/// An immutable-after-construction graph of cities and roads
#[derive(Debug, Clone, Default)]
pub struct Map {
    roads: IndexMap<String, Vec<Edge>>,
}

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a city. Adding a city twice is harmless.
    pub fn add_city(&mut self, name: &str) {
        if !self.roads.contains_key(name) {
            trace!(city = name, "registering city");
            self.roads.insert(name.to_string(), Vec::new());
        }
    }

    /// Connects two registered cities with a road usable in both directions.
    ///
    /// Returns `Ok(true)` when the road was added and `Ok(false)` when the two
    /// cities were already connected (the first road between a pair wins).
    pub fn add_road(&mut self, a: &str, b: &str, miles: u32, interstate: &str) -> MapResult<bool> {
        for city in [a, b] {
            if !self.roads.contains_key(city) {
                return Err(MapError::InvalidCity { name: city.to_string() });
            }
        }
        if a == b {
            return Err(MapError::SelfLoop { name: a.to_string() });
        }
        if miles == 0 {
            return Err(MapError::InvalidDistance {
                from: a.to_string(),
                to: b.to_string(),
            });
        }

        if self.road(a, b).is_some() {
            debug!(from = a, to = b, "road already on the map, keeping the first one");
            return Ok(false);
        }

        let edge = Edge {
            from: a.to_string(),
            to: b.to_string(),
            miles,
            interstate: interstate.to_string(),
        };
        let back = edge.reversed();

        // Both keys were checked above
        if let Some(list) = self.roads.get_mut(a) {
            list.push(edge);
        }
        if let Some(list) = self.roads.get_mut(b) {
            list.push(back);
        }
        Ok(true)
    }

    /// All roads leaving `city`, in the order they were added
    pub fn neighbors(&self, city: &str) -> MapResult<&[Edge]> {
        self.roads
            .get(city)
            .map(Vec::as_slice)
            .ok_or_else(|| MapError::UnknownCity { name: city.to_string() })
    }

    /// The road from `a` to `b`, if the two cities are directly connected
    pub fn road(&self, a: &str, b: &str) -> Option<&Edge> {
        self.roads.get(a)?.iter().find(|edge| edge.to == b)
    }

    pub fn contains(&self, city: &str) -> bool {
        self.roads.contains_key(city)
    }

    /// City names in registration order
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.roads.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roads.is_empty()
    }

    /// Finds a registered city whose name matches `name` ignoring ASCII case.
    /// Only used for "did you mean" hints; lookups stay case-sensitive.
    pub fn suggest(&self, name: &str) -> Option<&str> {
        self.cities().find(|city| city.eq_ignore_ascii_case(name))
    }
}
