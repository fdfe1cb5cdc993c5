use actix_web::{web, HttpResponse, Responder, ResponseError};
use validator::Validate;
use crate::models::{CandidateKind, SearchRequest, SearchResponse, HealthResponse, ErrorResponse, MatchView};
use crate::services::CandidateDirectory;
use crate::core::Matcher;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<CandidateDirectory>,
    pub matcher: Matcher,
    pub default_radius_km: Option<f64>,
}

/// Configure all search-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/search", web::get().to(search_all))
        .route("/donors/search", web::get().to(search_donors))
        .route("/blood-banks/search", web::get().to(search_blood_banks));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let candidates = state.directory.len();
    let status = if candidates > 0 { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        candidates,
    })
}

/// Search donors and blood banks
///
/// GET /api/v1/search?bloodGroup=A%2B&location=Mumbai&latitude=19.07&longitude=72.87&maxRadiusKm=10
async fn search_all(
    state: web::Data<AppState>,
    req: web::Query<SearchRequest>,
) -> impl Responder {
    search(&state, &req, None)
}

/// GET /api/v1/donors/search
async fn search_donors(
    state: web::Data<AppState>,
    req: web::Query<SearchRequest>,
) -> impl Responder {
    search(&state, &req, Some(CandidateKind::Donor))
}

/// GET /api/v1/blood-banks/search
async fn search_blood_banks(
    state: web::Data<AppState>,
    req: web::Query<SearchRequest>,
) -> impl Responder {
    search(&state, &req, Some(CandidateKind::BloodBank))
}

fn search(state: &AppState, req: &SearchRequest, kind: Option<CandidateKind>) -> HttpResponse {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: field_errors={:?}", errors);
        return ErrorResponse::bad_request("Validation failed", errors.to_string()).error_response();
    }

    if !req.has_valid_radius() {
        tracing::info!("Rejected search with radius {:?}", req.max_radius_km);
        return ErrorResponse::bad_request(
            "Validation failed",
            "maxRadiusKm must be a finite, non-negative number",
        )
        .error_response();
    }

    let query = req.to_query(kind, state.default_radius_km);

    tracing::info!(
        "Searching {:?} for blood group {:?} near {:?} (coordinate: {}, radius: {:?})",
        kind,
        query.blood_group,
        query.location,
        query.coordinate.is_some(),
        query.max_radius_km
    );

    let summary = state
        .matcher
        .find_matches(state.directory.candidates(), &query, req.limit);

    let data: Vec<MatchView> = summary.matches.iter().map(MatchView::from).collect();

    tracing::info!(
        "Returning {} matches (from {} candidates)",
        data.len(),
        summary.total_candidates
    );

    HttpResponse::Ok().json(SearchResponse {
        success: true,
        count: data.len(),
        total_candidates: summary.total_candidates,
        total_matches: summary.total_matches,
        data,
    })
}
