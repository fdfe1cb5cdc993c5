use crate::models::{Candidate, Coordinate, Distance, MatchQuery, MatchResult};
use crate::core::{
    distance::distance_km,
    filters::{matches_location, matches_query_constraints},
};
use std::cmp::Ordering;

/// Outcome of a search over a candidate pool
#[derive(Debug)]
pub struct MatchSummary<'a> {
    pub matches: Vec<MatchResult<'a>>,
    /// Size of the pool that was searched
    pub total_candidates: usize,
    /// Matches before the limit was applied
    pub total_matches: usize,
}

/// Rank a candidate pool against a query
///
/// # Pipeline Stages
/// 1. Blood group, availability and kind filtering
/// 2. Distance per candidate: Haversine when both sides have valid
///    coordinates, otherwise the city-label heuristic, otherwise unknown
/// 3. Radius filter (heuristic always passes, unknown never does)
/// 4. Stable ascending sort, unknown distances last
///
/// Candidates are borrowed, never modified.
pub fn rank_candidates<'a>(candidates: &'a [Candidate], query: &MatchQuery) -> Vec<MatchResult<'a>> {
    let origin = query.coordinate.filter(|c| c.is_valid());

    let mut results: Vec<MatchResult<'a>> = candidates
        .iter()
        // Stage 1: attribute filters
        .filter(|candidate| matches_query_constraints(candidate, query))
        // Stage 2: distance
        .map(|candidate| MatchResult {
            candidate,
            distance: resolve_distance(candidate, query, origin.as_ref()),
        })
        // Stage 3: radius
        .filter(|result| within_radius(&result.distance, query.max_radius_km))
        .collect();

    // Stage 4: sort_by is stable, ties keep input order
    results.sort_by(|a, b| compare_distance(&a.distance, &b.distance));

    results
}

fn resolve_distance(
    candidate: &Candidate,
    query: &MatchQuery,
    origin: Option<&Coordinate>,
) -> Distance {
    if let (Some(origin), Some(target)) = (origin, candidate.valid_coordinate()) {
        return Distance::Known(distance_km(origin, &target));
    }

    if matches_location(candidate, &query.location) {
        Distance::Heuristic
    } else {
        Distance::Unknown
    }
}

#[inline]
fn within_radius(distance: &Distance, max_radius_km: Option<f64>) -> bool {
    let Some(radius) = max_radius_km else {
        return true;
    };

    match distance {
        Distance::Known(km) => *km <= radius,
        Distance::Heuristic => true,
        Distance::Unknown => false,
    }
}

#[inline]
fn compare_distance(a: &Distance, b: &Distance) -> Ordering {
    match (a.km(), b.km()) {
        (Some(x), Some(y)) => x.total_cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Search front-end that applies result limits on top of [`rank_candidates`]
#[derive(Debug, Clone, Copy)]
pub struct Matcher {
    default_limit: usize,
    max_limit: usize,
}

impl Matcher {
    pub fn new(default_limit: usize, max_limit: usize) -> Self {
        let max_limit = max_limit.max(1);
        Self {
            default_limit: default_limit.clamp(1, max_limit),
            max_limit,
        }
    }

    pub fn with_default_limits() -> Self {
        Self::new(20, 100)
    }

    /// Resolve a requested limit against the configured bounds
    pub fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.default_limit)
            .clamp(1, self.max_limit)
    }

    /// Find matches for a query
    ///
    /// # Arguments
    /// * `candidates` - Candidate pool supplied by the caller
    /// * `query` - Blood group, location and radius constraints
    /// * `limit` - Requested number of results, clamped to the configured maximum
    ///
    /// # Returns
    /// MatchSummary containing ranked matches and pool statistics
    pub fn find_matches<'a>(
        &self,
        candidates: &'a [Candidate],
        query: &MatchQuery,
        limit: Option<usize>,
    ) -> MatchSummary<'a> {
        let total_candidates = candidates.len();
        let mut matches = rank_candidates(candidates, query);
        let total_matches = matches.len();

        matches.truncate(self.effective_limit(limit));

        tracing::debug!(
            "Ranked {} of {} candidates for blood group {:?}, returning {}",
            total_matches,
            total_candidates,
            query.blood_group,
            matches.len()
        );

        MatchSummary {
            matches,
            total_candidates,
            total_matches,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_limits()
    }
}
