//! Decision engine error types.

use thiserror::Error;

use gridmind_model::ModelError;

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while deciding a placement or classifying
/// telemetry.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Malformed or out-of-domain input. Surfaced to the caller as a client
    /// error, never silently defaulted.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The model returned a label outside its declared domain. Fatal for
    /// the request; retrying a deterministic model call cannot change the
    /// outcome.
    #[error("model contract violation: {0}")]
    ModelContract(String),

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}
