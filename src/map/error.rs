// src/map/error.rs
// =============================================================================
// Errors for building a road map and searching it.
//
// Every failure here is detected synchronously and handed straight back to the
// caller. Nothing is retried: the map never changes after startup, so asking
// again would give the same answer.
// =============================================================================

use thiserror::Error;

/// Result type for map and route operations
pub type MapResult<T> = Result<T, MapError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A lookup or search named a city the map has never seen
    #[error("unknown city: '{name}'")]
    UnknownCity { name: String },

    /// A road was added before one of its endpoints was registered
    #[error("cannot add road: city '{name}' is not on the map")]
    InvalidCity { name: String },

    /// A road from a city back to itself
    #[error("cannot add road from '{name}' to itself")]
    SelfLoop { name: String },

    /// Roads must be at least one mile long
    #[error("road between '{from}' and '{to}' must have a positive distance")]
    InvalidDistance { from: String, to: String },

    /// Both cities exist but no chain of roads connects them
    #[error("no route from '{start}' to '{destination}'")]
    NoPath { start: String, destination: String },
}

impl MapError {
    /// The city name carried by an `UnknownCity` error, if that's what this is
    pub fn unknown_city(&self) -> Option<&str> {
        match self {
            MapError::UnknownCity { name } => Some(name),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_city() {
        let err = MapError::UnknownCity { name: "Gotham".to_string() };
        assert_eq!(err.to_string(), "unknown city: 'Gotham'");

        let err = MapError::NoPath {
            start: "Baltimore".to_string(),
            destination: "Honolulu".to_string(),
        };
        assert_eq!(err.to_string(), "no route from 'Baltimore' to 'Honolulu'");
    }

    #[test]
    fn test_unknown_city_accessor() {
        let err = MapError::UnknownCity { name: "Gotham".to_string() };
        assert_eq!(err.unknown_city(), Some("Gotham"));

        let err = MapError::SelfLoop { name: "Gotham".to_string() };
        assert_eq!(err.unknown_city(), None);
    }
}
