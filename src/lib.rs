//! Blood Locator - proximity matching for blood donors and blood banks
//!
//! The core is a pure ranking engine: filter a candidate pool by blood group,
//! compute Haversine distances (falling back to a city-label heuristic), apply
//! an optional radius and sort nearest first.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchSummary, rank_candidates, distance::{distance_km, haversine_distance}};
pub use crate::models::{Candidate, CandidateKind, Coordinate, Distance, MatchQuery, MatchResult};
