// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinate, Candidate, CandidateKind, MatchQuery, Distance, MatchResult};
pub use requests::SearchRequest;
pub use responses::{MatchView, SearchResponse, HealthResponse, ErrorResponse};
