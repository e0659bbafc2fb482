//! API response types.

use serde::Serialize;

use crate::sim::error::FieldError;

/// Error response body for 4xx errors.
///
/// `fields` is present only for validation failures and names each
/// rejected input in wire order.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Per-field validation failures.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

/// Liveness probe body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the server is answering.
    pub status: &'static str,
    /// Crate version serving the request.
    pub version: &'static str,
}
