use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{CandidateKind, Coordinate, MatchQuery};

/// Query string of the search endpoints
///
/// Coordinates are not range-validated here; out-of-range values fall back to
/// the location heuristic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    #[serde(default, alias = "blood_group", rename = "bloodGroup")]
    pub blood_group: Option<String>,
    #[serde(default, alias = "city")]
    pub location: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default, alias = "max_radius_km", rename = "maxRadiusKm")]
    pub max_radius_km: Option<f64>,
    #[serde(default, alias = "available_only", rename = "availableOnly")]
    pub available_only: Option<bool>,
    #[validate(range(min = 1, max = 500))]
    #[serde(default)]
    pub limit: Option<usize>,
}

impl SearchRequest {
    /// Build the engine query, optionally restricted to one kind of record
    pub fn to_query(&self, kind: Option<CandidateKind>, default_radius_km: Option<f64>) -> MatchQuery {
        MatchQuery {
            blood_group: self.blood_group.clone().unwrap_or_default(),
            location: self.location.clone().unwrap_or_default(),
            coordinate: Coordinate::from_parts(self.latitude, self.longitude),
            max_radius_km: self.max_radius_km.or(default_radius_km),
            available_only: self.available_only.unwrap_or(false),
            kind,
        }
    }

    /// A radius, when given, must be a finite number of kilometers
    ///
    /// The `range` rule lets NaN through, so this is checked separately.
    pub fn has_valid_radius(&self) -> bool {
        self.max_radius_km.map_or(true, |km| km.is_finite() && km >= 0.0)
    }
}
