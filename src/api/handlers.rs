//! Request handlers for the JSON endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use serde_json::Value;
use tracing::warn;

use super::AppState;
use super::error::ApiError;
use super::types::HealthResponse;
use crate::sim::types::{SimulationRequest, SimulationResult};

/// Computes a step response from the posted parameters.
///
/// `POST /api/calculate` → 200 + `{ "labels": [...], "data": [...] }`
/// Body not a JSON object → 400 + `ErrorResponse`
/// Missing, non-numeric or out-of-domain field → 422 + `ErrorResponse` with `fields`
pub async fn calculate(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<SimulationResult>, ApiError> {
    let Json(body) = payload.inspect_err(|e| warn!(error = %e, "unreadable request body"))?;

    let Value::Object(obj) = body else {
        warn!("request body is not a JSON object");
        return Err(ApiError::BadRequest(
            "request body must be a JSON object".to_string(),
        ));
    };

    let request = SimulationRequest::from_json(&obj, state.simulator.max_num_points())
        .inspect_err(|e| warn!(error = %e, "rejected simulation request"))?;
    let result = state.simulator.run(&request)?;

    Ok(Json(result))
}

/// `GET /health` → 200 + `HealthResponse` JSON
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use serde_json::json;
    use tower::util::ServiceExt;

    use super::*;
    use crate::api::router;
    use crate::sim::engine::Simulator;

    fn make_test_state() -> Arc<AppState> {
        Arc::new(AppState {
            simulator: Simulator::new(1000),
        })
    }

    fn post_json(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/calculate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(resp: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn calculate_returns_200() {
        let app = router(make_test_state());

        let body = json!({"T0": 20, "K": 2, "tau": 5, "u": 10, "t_final": 20, "num_points": 5});
        let resp = app.oneshot(post_json(body.to_string())).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["labels"], json!([0.0, 5.0, 10.0, 15.0, 20.0]));
        assert_eq!(json["data"].as_array().map(Vec::len), Some(5));
        assert_eq!(json["data"][0], 20.0);
    }

    #[tokio::test]
    async fn calculate_defaults_window() {
        let app = router(make_test_state());

        let body = json!({"T0": 0, "K": 1, "tau": 1, "u": 1});
        let resp = app.oneshot(post_json(body.to_string())).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["labels"].as_array().map(Vec::len), Some(100));
        assert_eq!(json["labels"][99], 20.0);
    }

    #[tokio::test]
    async fn calculate_invalid_tau_returns_422() {
        let app = router(make_test_state());

        let body = json!({"T0": 20, "K": 2, "tau": 0, "u": 10});
        let resp = app.oneshot(post_json(body.to_string())).await.unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(resp).await;
        assert!(json.get("error").is_some());
        assert_eq!(json["fields"][0]["field"], "tau");
    }

    #[tokio::test]
    async fn calculate_over_limit_returns_422() {
        let app = router(make_test_state());

        let body = json!({"T0": 20, "K": 2, "tau": 5, "u": 10, "num_points": 1001});
        let resp = app.oneshot(post_json(body.to_string())).await.unwrap();

        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let json = body_json(resp).await;
        assert_eq!(json["fields"][0]["field"], "num_points");
    }

    #[tokio::test]
    async fn calculate_malformed_json_returns_400() {
        let app = router(make_test_state());

        let resp = app
            .oneshot(post_json("{\"T0\": 20,".to_string()))
            .await
            .unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let json = body_json(resp).await;
        assert!(json.get("error").is_some());
        assert!(json.get("fields").is_none());
    }

    #[tokio::test]
    async fn calculate_array_body_returns_400() {
        let app = router(make_test_state());

        let resp = app.oneshot(post_json("[1, 2, 3]".to_string())).await.unwrap();

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn health_returns_200() {
        let app = router(make_test_state());

        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["status"], "ok");
    }
}
