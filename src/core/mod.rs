// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod matcher;

pub use distance::{haversine_distance, distance_km};
pub use filters::{matches_blood_group, matches_location, matches_query_constraints, normalize_blood_group, is_known_blood_group};
pub use matcher::{Matcher, MatchSummary, rank_candidates};
