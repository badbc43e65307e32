use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use flightsearch_core::{FlightSearchRequest, ValidatedRequest};
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SearchAcceptedResponse {
    pub accepted: bool,
    pub search: ValidatedRequest,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/searches/validate", post(validate_search))
        .route("/v1/searches/current", get(current_search))
}

/// POST /v1/searches/validate
/// Runs the search rules and stores the search when every rule passes
pub async fn validate_search(
    State(state): State<AppState>,
    Json(req): Json<FlightSearchRequest>,
) -> Result<Json<SearchAcceptedResponse>, AppError> {
    let mut validator = state.lock_validator()?;
    let search = validator.validate_detailed(&req)?.clone();

    Ok(Json(SearchAcceptedResponse {
        accepted: true,
        search,
    }))
}

/// GET /v1/searches/current
pub async fn current_search(
    State(state): State<AppState>,
) -> Result<Json<ValidatedRequest>, AppError> {
    let validator = state.lock_validator()?;
    validator
        .snapshot()
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No flight search has been validated yet".to_string()))
}
