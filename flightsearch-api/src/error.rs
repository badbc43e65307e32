use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flightsearch_core::RuleViolation;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Rejected(#[from] RuleViolation),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Rejected(violation) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "accepted": false,
                    "rule": violation.rule.number(),
                    "rule_name": violation.rule,
                    "error": violation.to_string(),
                }),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal Server Error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
