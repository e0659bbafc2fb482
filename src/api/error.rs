//! Client-facing request errors.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use super::types::ErrorResponse;
use crate::sim::error::ValidationErrors;

/// Every way a request can be rejected. All variants are client errors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Body was not a decodable JSON object.
    #[error("{0}")]
    BadRequest(String),
    /// Body decoded but one or more fields were rejected.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::BadRequest(error) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error,
                    fields: Vec::new(),
                },
            ),
            Self::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse {
                    error: "invalid simulation parameters".to_string(),
                    fields: errors.fields().to_vec(),
                },
            ),
        };
        (status, Json(body)).into_response()
    }
}
