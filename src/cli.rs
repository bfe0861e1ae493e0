// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
//   route-finder route --starting-city Baltimore --destination-city Miami
//   route-finder cities --json
//   route-finder -v route ...      (debug logs on stderr)
// =============================================================================

use clap::{ArgAction, Parser, Subcommand};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "route-finder",
    version = "0.1.0",
    about = "Prints driving directions between U.S. cities using the fewest roads",
    long_about = "route-finder searches a built-in map of U.S. cities and interstates with \
                  breadth-first search and prints the route that uses the fewest roads. \
                  City names are case-sensitive."
)]
pub struct Cli {
    /// Print diagnostics to stderr (-v debug, -vv trace)
    ///
    /// RUST_LOG overrides this when set
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the route with the fewest roads between two cities
    ///
    /// Example: route-finder route --starting-city Baltimore --destination-city Miami
    Route {
        /// The city the trip starts from (exact, case-sensitive name)
        #[arg(long, alias = "starting_city")]
        starting_city: String,

        /// The city the trip ends at (exact, case-sensitive name)
        #[arg(long, alias = "destination_city")]
        destination_city: String,

        /// Output the route as JSON instead of directions
        #[arg(long)]
        json: bool,
    },

    /// List every city on the built-in map
    Cities {
        /// Output the list as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_route() {
        let cli = Cli::try_parse_from([
            "route-finder",
            "route",
            "--starting-city",
            "Baltimore",
            "--destination-city",
            "Daytona Beach",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Route { starting_city, destination_city, json } => {
                assert_eq!(starting_city, "Baltimore");
                assert_eq!(destination_city, "Daytona Beach");
                assert!(!json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_underscore_aliases() {
        let cli = Cli::try_parse_from([
            "route-finder",
            "route",
            "--starting_city",
            "Baltimore",
            "--destination_city",
            "Miami",
            "--json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert!(matches!(
            cli.command,
            Commands::Route { ref starting_city, json: true, .. } if starting_city == "Baltimore"
        ));
    }

    #[test]
    fn test_route_needs_both_cities() {
        assert!(Cli::try_parse_from(["route-finder", "route", "--starting-city", "Baltimore"]).is_err());
    }

    #[test]
    fn test_parse_cities() {
        let cli = Cli::try_parse_from(["route-finder", "-v", "cities", "--json"]).unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(matches!(cli.command, Commands::Cities { json: true }));
    }
}
