//! gridmind-api — REST API for GridMind.
//!
//! Provides axum route handlers for placement and anomaly queries plus the
//! operational endpoints.
//!
//! # API Routes
//!
//! | Method | Path | Description |
//! |---|---|---|
//! | POST | `/predict` | Placement verdict for a candidate GPU |
//! | POST | `/anomaly` | Outlier check for a telemetry reading |
//! | GET | `/healthz` | Liveness probe |
//! | GET | `/metrics` | Prometheus exposition |
//!
//! Success bodies carry the verdict fields directly (`is_good_placement` /
//! `reason`, `is_anomaly`) — the shapes are a wire contract with the
//! orchestrator and stay exactly as they are.

pub mod handlers;
pub mod metrics;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use gridmind_engine::{AnomalyClassifier, DecisionEngine};

use crate::metrics::DecisionMetrics;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub engine: DecisionEngine,
    pub classifier: AnomalyClassifier,
    pub metrics: Arc<DecisionMetrics>,
}

/// Build the complete API router.
pub fn build_router(engine: DecisionEngine, classifier: AnomalyClassifier) -> Router {
    let state = ApiState {
        engine,
        classifier,
        metrics: Arc::new(DecisionMetrics::new()),
    };

    Router::new()
        .route("/predict", post(handlers::predict))
        .route("/anomaly", post(handlers::check_anomaly))
        .route("/healthz", get(handlers::healthz))
        .route("/metrics", get(handlers::prometheus_metrics))
        .with_state(state)
}
