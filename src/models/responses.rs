use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};
use crate::models::domain::{CandidateKind, MatchResult};

/// A ranked candidate as returned by the search endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchView {
    pub id: String,
    pub kind: CandidateKind,
    pub name: String,
    #[serde(rename = "bloodGroup")]
    pub blood_group: String,
    pub location: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(rename = "availabilityStatus")]
    pub availability_status: String,
    pub contact: Option<String>,
    /// Display string, e.g. "4.2 km"
    pub distance: Option<String>,
    #[serde(rename = "distanceKm")]
    pub distance_km: Option<f64>,
    #[serde(rename = "distanceSource")]
    pub distance_source: String,
}

impl From<&MatchResult<'_>> for MatchView {
    fn from(result: &MatchResult<'_>) -> Self {
        let candidate = result.candidate;
        Self {
            id: candidate.id.clone(),
            kind: candidate.kind,
            name: candidate.name.clone(),
            blood_group: candidate.blood_group.clone(),
            location: candidate.city.clone(),
            latitude: candidate.coordinate.map(|c| c.latitude),
            longitude: candidate.coordinate.map(|c| c.longitude),
            availability_status: if candidate.available { "Available" } else { "Unavailable" }.to_string(),
            contact: candidate.contact.clone(),
            distance: result.distance.display(),
            distance_km: result.distance.km(),
            distance_source: result.distance.source().to_string(),
        }
    }
}

/// Response for the search endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub count: usize,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
    pub data: Vec<MatchView>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub candidates: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn bad_request(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code: 400,
        }
    }
}

impl std::fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

impl std::error::Error for ErrorResponse {}

impl ResponseError for ErrorResponse {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::BAD_REQUEST)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Candidate, Distance};

    #[test]
    fn test_view_formats_distance() {
        let donor = Candidate::donor("7", "Meera", "AB-", "Pune")
            .with_coordinate(18.52, 73.85)
            .with_availability(false);
        let result = MatchResult { candidate: &donor, distance: Distance::Known(12.0) };

        let view = MatchView::from(&result);

        assert_eq!(view.distance.as_deref(), Some("12.0 km"));
        assert_eq!(view.distance_source, "computed");
        assert_eq!(view.availability_status, "Unavailable");
        assert_eq!(view.location, "Pune");
    }

    #[test]
    fn test_view_unknown_distance_serializes_null() {
        let donor = Candidate::donor("8", "Arjun", "O+", "Goa");
        let result = MatchResult { candidate: &donor, distance: Distance::Unknown };

        let json = serde_json::to_value(MatchView::from(&result)).unwrap();

        assert!(json["distance"].is_null());
        assert_eq!(json["distanceSource"], "unknown");
        assert_eq!(json["bloodGroup"], "O+");
    }

    #[test]
    fn test_error_response_status() {
        let err = ErrorResponse::bad_request("invalid_query", "Invalid query: bad float");

        assert_eq!(ResponseError::status_code(&err), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "invalid_query: Invalid query: bad float");
    }
}
