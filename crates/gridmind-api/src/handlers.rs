//! REST API handlers.
//!
//! Each handler runs one synchronous decision and maps the engine's error
//! taxonomy onto HTTP: invalid input is the caller's fault (400), a model
//! contract violation is ours (500). Nothing is retried — a deterministic
//! model call cannot change its answer.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{error, warn};

use gridmind_engine::{
    AnomalyRequest, EngineError, PlacementRequest, REASON_CARBON_INTENSITY,
};

use crate::ApiState;

#[derive(serde::Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(msg: &str, status: StatusCode) -> impl IntoResponse {
    (
        status,
        Json(ErrorBody {
            error: msg.to_string(),
        }),
    )
}

/// POST /predict
pub async fn predict(
    State(state): State<ApiState>,
    Json(request): Json<PlacementRequest>,
) -> impl IntoResponse {
    state.metrics.record_placement_request();

    match state.engine.decide(&request) {
        Ok(verdict) => {
            if !verdict.is_good_placement {
                state.metrics.record_placement_denied();
                if verdict.reason == REASON_CARBON_INTENSITY {
                    state.metrics.record_carbon_veto();
                }
            }
            Json(verdict).into_response()
        }
        Err(EngineError::InvalidRequest(msg)) => {
            state.metrics.record_invalid_request();
            warn!(error = %msg, "placement request rejected");
            error_response(&msg, StatusCode::BAD_REQUEST).into_response()
        }
        Err(e) => {
            state.metrics.record_model_failure();
            error!(error = %e, "placement decision failed");
            error_response(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
    }
}

/// POST /anomaly
pub async fn check_anomaly(
    State(state): State<ApiState>,
    Json(request): Json<AnomalyRequest>,
) -> impl IntoResponse {
    state.metrics.record_anomaly_request();

    match state.classifier.check(&request) {
        Ok(verdict) => {
            if verdict.is_anomaly {
                state.metrics.record_anomaly_flagged();
            }
            Json(verdict).into_response()
        }
        Err(EngineError::InvalidRequest(msg)) => {
            state.metrics.record_invalid_request();
            warn!(error = %msg, "anomaly request rejected");
            error_response(&msg, StatusCode::BAD_REQUEST).into_response()
        }
        Err(e) => {
            state.metrics.record_model_failure();
            error!(error = %e, "anomaly check failed");
            error_response(&e.to_string(), StatusCode::INTERNAL_SERVER_ERROR).into_response()
        }
    }
}

/// GET /healthz
pub async fn healthz() -> impl IntoResponse {
    Json(serde_json::json!({"status": "ok"}))
}

/// GET /metrics
pub async fn prometheus_metrics(State(state): State<ApiState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
        state.metrics.render_prometheus(),
    )
}
