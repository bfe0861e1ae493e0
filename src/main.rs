// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Turn on logging at the requested level
// 3. Build the road map from the built-in atlas
// 4. Dispatch to the subcommand handler and print the result
// 5. Exit with proper code (0 = success, 1 = no route, 2 = error)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli;     // src/cli.rs - command-line parsing
mod logging; // src/logging.rs - tracing setup
mod map;     // src/map/ - cities, roads and the built-in atlas
mod route;   // src/route/ - BFS route search and directions

use anyhow::{Context, Result};
use clap::Parser; // Parser trait enables the parse() method
use serde::Serialize;

use cli::{Cli, Commands};
use map::{Atlas, Map, MapError, MapResult};
use route::Route;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = route printed / city list printed
//   Ok(1) = both cities exist but no road connects them
//   Ok(2) = bad input (unknown city)
//   Err = unexpected error (corrupt atlas, JSON output failure)
fn run() -> Result<i32> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let map = Atlas::builtin()
        .and_then(|atlas| atlas.build_map())
        .context("failed to load the built-in road atlas")?;
    anyhow::ensure!(!map.is_empty(), "the built-in road atlas has no cities");

    match cli.command {
        Commands::Route { starting_city, destination_city, json } => {
            handle_route(&map, &starting_city, &destination_city, json)
        }
        Commands::Cities { json } => handle_cities(&map, json),
    }
}

// Handles the 'route' subcommand
fn handle_route(map: &Map, start: &str, destination: &str, json: bool) -> Result<i32> {
    let steps = match route::find_path(map, start, destination) {
        Ok(steps) => steps,
        Err(MapError::NoPath { .. }) => {
            println!("No path found");
            return Ok(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Some(hint) = e.unknown_city().and_then(|name| map.suggest(name)) {
                eprintln!("Did you mean '{}'? City names are case-sensitive.", hint);
            }
            return Ok(2);
        }
    };

    let route = Route::new(start, destination, steps);
    if json {
        println!("{}", serde_json::to_string_pretty(&route)?);
    } else {
        for line in route.directions() {
            println!("{}", line);
        }
    }
    Ok(0)
}

// One row of the 'cities' listing
#[derive(Debug, Serialize)]
struct CitySummary<'a> {
    city: &'a str,
    roads: usize,
}

fn city_summaries(map: &Map) -> MapResult<Vec<CitySummary<'_>>> {
    map.cities()
        .map(|city| {
            map.neighbors(city)
                .map(|roads| CitySummary { city, roads: roads.len() })
        })
        .collect()
}

// Handles the 'cities' subcommand
fn handle_cities(map: &Map, json: bool) -> Result<i32> {
    let summaries = city_summaries(map)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
        return Ok(0);
    }

    println!("{:<20} {:>5}", "CITY", "ROADS");
    println!("{}", "=".repeat(26));
    for summary in &summaries {
        println!("{:<20} {:>5}", summary.city, summary.roads);
    }
    println!();
    println!("📋 Total: {} cities", summaries.len());
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_summaries_follow_atlas_order() {
        let map = Atlas::builtin().unwrap().build_map().unwrap();
        let summaries = city_summaries(&map).unwrap();

        assert_eq!(summaries.len(), map.len());
        assert_eq!(summaries[0].city, "Baltimore");
        assert_eq!(summaries[0].roads, 2);
        // Miami is reached from Daytona Beach and Tampa
        let miami = summaries.iter().find(|s| s.city == "Miami").unwrap();
        assert_eq!(miami.roads, 2);
    }

    #[test]
    fn test_route_exit_codes() {
        let mut map = Map::new();
        for city in ["A", "B", "Island"] {
            map.add_city(city);
        }
        map.add_road("A", "B", 5, "I-1").unwrap();

        assert_eq!(handle_route(&map, "A", "B", false).unwrap(), 0);
        assert_eq!(handle_route(&map, "A", "A", true).unwrap(), 0);
        assert_eq!(handle_route(&map, "A", "Island", false).unwrap(), 1);
        assert_eq!(handle_route(&map, "a", "B", false).unwrap(), 2);
    }
}
