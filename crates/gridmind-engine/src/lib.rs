//! gridmind-engine — placement decisions and anomaly classification.
//!
//! The decision core of GridMind. Every request is a pure, synchronous
//! computation over its inputs plus one read-only call into the model
//! provider; the engine holds no mutable state and needs no locking.
//!
//! # Components
//!
//! - **`request`** — wire request types, `JobType` / `ThrottleState` enums
//!   with total table-driven encodings, validation
//! - **`policy`** — carbon-intensity gate, evaluated before any model call
//! - **`encoder`** — request fields → feature vectors, driven by the
//!   loaded model's schema
//! - **`engine`** — `DecisionEngine::decide`: validate → gate → encode →
//!   predict → verdict
//! - **`anomaly`** — `AnomalyClassifier::check`: sentinel interpretation
//! - **`verdict`** — response types and the fixed reason strings

pub mod anomaly;
pub mod encoder;
pub mod engine;
pub mod error;
pub mod policy;
pub mod request;
pub mod verdict;

pub use anomaly::AnomalyClassifier;
pub use engine::DecisionEngine;
pub use error::{EngineError, EngineResult};
pub use policy::CARBON_INTENSITY_LIMIT;
pub use request::{AnomalyRequest, JobType, PlacementRequest, ThrottleState, DEFAULT_CARBON_INTENSITY};
pub use verdict::{
    AnomalyVerdict, PlacementVerdict, REASON_CARBON_INTENSITY, REASON_OK, REASON_STATE_NOT_OPTIMAL,
};
