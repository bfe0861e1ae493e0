// src/route/bfs.rs
// =============================================================================
// Minimum-hop route search with breadth-first search (BFS).
//
// How it works:
// 1. Put the start city in a queue and mark it discovered
// 2. Pop the oldest city off the queue
// 3. Walk its roads in the order they were added to the map; every city not
//    seen before is marked discovered, remembers the road we came in on, and
//    goes to the back of the queue
// 4. The moment the destination is discovered, follow the remembered roads
//    back to the start and return them in driving order
// 5. If the queue runs dry first, the two cities aren't connected
//
// Road lengths play no part here. BFS reaches cities in order of hop count,
// so the first route found to a city has the fewest roads, not the fewest
// miles. Ties go to whichever road was added to the map first.
// =============================================================================

use std::collections::{HashMap, VecDeque};

use tracing::{debug, trace};

use crate::map::{Edge, Map, MapError, MapResult};

/// Finds a route from `start` to `destination` using as few roads as possible.
///
/// Returns the roads in driving order (each `edge.from` is the previous
/// `edge.to`). Same start and destination gives an empty route.
///
/// # Errors
///
/// - `UnknownCity` if either name isn't on the map (start is checked first)
/// - `NoPath` if both exist but no chain of roads joins them
pub fn find_path(map: &Map, start: &str, destination: &str) -> MapResult<Vec<Edge>> {
    for city in [start, destination] {
        if !map.contains(city) {
            return Err(MapError::UnknownCity { name: city.to_string() });
        }
    }
    if start == destination {
        return Ok(Vec::new());
    }

    // City -> road used to reach it. The start has no incoming road.
    let mut came_from: HashMap<&str, Option<&Edge>> = HashMap::new();
    came_from.insert(start, None);

    let mut frontier = VecDeque::new();
    frontier.push_back(start);

    while let Some(city) = frontier.pop_front() {
        trace!(city, queued = frontier.len(), "expanding");

        for edge in map.neighbors(city)? {
            let next = edge.to.as_str();
            if came_from.contains_key(next) {
                continue;
            }
            came_from.insert(next, Some(edge));

            if next == destination {
                let path = walk_back(&came_from, destination);
                debug!(start, destination, hops = path.len(), "route found");
                return Ok(path);
            }
            frontier.push_back(next);
        }
    }

    debug!(start, destination, explored = came_from.len(), "no route");
    Err(MapError::NoPath {
        start: start.to_string(),
        destination: destination.to_string(),
    })
}

// Rebuilds the route by following incoming roads from the destination back
// to the start (the only city with no incoming road)
fn walk_back(came_from: &HashMap<&str, Option<&Edge>>, destination: &str) -> Vec<Edge> {
    let mut path = Vec::new();
    let mut city = destination;
    while let Some(Some(edge)) = came_from.get(city) {
        path.push((*edge).clone());
        city = edge.from.as_str();
    }
    path.reverse();
    path
}
