// src/route/directions.rs
// =============================================================================
// Turns a list of roads into something a driver can read.
//
// Text output looks like:
//
//   Starting at Baltimore
//   Drive 39 miles on I-95 towards Washington, then
//   Drive 53 miles on I-95 towards Fredericksburg, then
//   You will arrive at your destination
//   Total: 92 miles over 2 hops
//
// JSON output is the Route struct below, serialized with serde.
// =============================================================================

use serde::Serialize;

use crate::map::Edge;

/// A finished route, ready to print
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub start: String,
    pub destination: String,
    pub hops: usize,
    pub total_miles: u32,
    pub steps: Vec<Edge>,
}

impl Route {
    pub fn new(start: &str, destination: &str, steps: Vec<Edge>) -> Self {
        Self {
            start: start.to_string(),
            destination: destination.to_string(),
            hops: steps.len(),
            total_miles: steps.iter().map(|edge| edge.miles).sum(),
            steps,
        }
    }

    /// Step-by-step directions, one line per entry
    pub fn directions(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.steps.len() + 3);
        lines.push(format!("Starting at {}", self.start));

        if self.steps.is_empty() {
            lines.push("You are already at your destination".to_string());
        } else {
            for edge in &self.steps {
                lines.push(format!(
                    "Drive {} miles on {} towards {}, then",
                    edge.miles, edge.interstate, edge.to
                ));
            }
            lines.push("You will arrive at your destination".to_string());
        }

        let plural = if self.hops == 1 { "hop" } else { "hops" };
        lines.push(format!("Total: {} miles over {} {}", self.total_miles, self.hops, plural));
        lines
    }
}
