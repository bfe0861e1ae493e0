// src/route/mod.rs
// =============================================================================
// Route search and route printing.
//
// Submodules:
// - bfs: finds the route with the fewest roads between two cities
// - directions: turns that route into text or JSON
// =============================================================================

mod bfs;
mod directions;

pub use bfs::find_path;
pub use directions::Route;
