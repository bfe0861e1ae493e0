// src/map/atlas.rs
// =============================================================================
// The built-in road network.
//
// The data lives in data/roads.json and is compiled into the binary with
// include_str!, so nothing is read from disk at run time.
//
// Format:
//   {
//     "Baltimore": [ { "to": "Washington", "miles": 39, "interstate": "I-95" }, ... ],
//     ...
//   }
//
// A city may appear only as somebody's neighbor (Miami is never a key); it is
// registered the first time it is mentioned. Most roads are listed from both
// ends; Map::add_road drops the second listing.
// =============================================================================

use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use super::error::MapError;
use super::graph::Map;

const BUILTIN_ROADS: &str = include_str!("../../data/roads.json");

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("road atlas is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("road atlas is inconsistent: {0}")]
    Map(#[from] MapError),
}

// One road as written in the atlas, seen from the city it is listed under
#[derive(Debug, Clone, Deserialize)]
struct RoadEntry {
    to: String,
    miles: u32,
    interstate: String,
}

/// Road listings keyed by city, in the order they appear in the source JSON
#[derive(Debug, Clone)]
pub struct Atlas {
    listings: IndexMap<String, Vec<RoadEntry>>,
}

impl Atlas {
    /// The road network shipped with the binary
    pub fn builtin() -> Result<Self, AtlasError> {
        Self::from_json(BUILTIN_ROADS)
    }

    pub fn from_json(json: &str) -> Result<Self, AtlasError> {
        let listings: IndexMap<String, Vec<RoadEntry>> = serde_json::from_str(json)?;
        Ok(Self { listings })
    }

    /// Builds a Map from the listings.
    ///
    /// Cities are registered in the order they are first mentioned and roads
    /// are added in listing order, which fixes the neighbor order BFS sees.
    pub fn build_map(&self) -> Result<Map, AtlasError> {
        let mut map = Map::new();
        let mut added = 0usize;

        for (city, roads) in &self.listings {
            map.add_city(city);
            for road in roads {
                map.add_city(&road.to);
                if map.add_road(city, &road.to, road.miles, &road.interstate)? {
                    added += 1;
                }
            }
        }

        debug!(listings = self.listings.len(), "decoded road atlas");
        info!(cities = map.len(), roads = added, "road map ready");
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_atlas_builds() {
        let map = Atlas::builtin().unwrap().build_map().unwrap();
        assert_eq!(map.len(), 46);

        // Cities that only show up as neighbors still get registered
        assert!(map.contains("Miami"));
        assert!(map.contains("Mississauga"));

        let road = map.road("Baltimore", "Washington").unwrap();
        assert_eq!(road.miles, 39);
        assert_eq!(road.interstate, "I-95");
    }

    #[test]
    fn test_builtin_atlas_is_symmetric() {
        let map = Atlas::builtin().unwrap().build_map().unwrap();
        let mut edges = 0;
        for city in map.cities() {
            for edge in map.neighbors(city).unwrap() {
                assert_eq!(edge.from, city);
                assert!(map.contains(&edge.to));
                assert_eq!(map.road(&edge.to, city), Some(&edge.reversed()));
                edges += 1;
            }
        }
        // Every road is stored once per endpoint
        assert_eq!(edges, 69 * 2);
    }

    #[test]
    fn test_first_listing_wins() {
        let json = r#"{
            "A": [ { "to": "B", "miles": 10, "interstate": "I-1" } ],
            "B": [ { "to": "A", "miles": 99, "interstate": "I-9" } ]
        }"#;
        let map = Atlas::from_json(json).unwrap().build_map().unwrap();
        assert_eq!(map.neighbors("B").unwrap().len(), 1);
        assert_eq!(map.road("B", "A").unwrap().miles, 10);
    }

    #[test]
    fn test_bad_json_is_a_decode_error() {
        let err = Atlas::from_json("{ \"A\": [ { \"to\": \"B\" } ] }").unwrap_err();
        assert!(matches!(err, AtlasError::Decode(_)));
    }

    #[test]
    fn test_self_loop_in_atlas_is_a_map_error() {
        let json = r#"{ "A": [ { "to": "A", "miles": 1, "interstate": "I-1" } ] }"#;
        let err = Atlas::from_json(json).unwrap().build_map().unwrap_err();
        assert!(matches!(err, AtlasError::Map(MapError::SelfLoop { .. })));
    }
}
