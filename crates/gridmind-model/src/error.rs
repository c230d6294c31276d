//! Model-side error types.

use thiserror::Error;

/// Result type alias for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while loading or invoking a model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model artifact unavailable at {path}: {reason}")]
    Unavailable { path: String, reason: String },

    #[error("failed to parse model artifact: {0}")]
    Parse(String),

    #[error("artifact is not a {expected} model (found {found})")]
    WrongKind { expected: &'static str, found: &'static str },

    #[error("invalid feature schema: {0}")]
    InvalidSchema(String),

    #[error("feature vector does not match model schema: {0}")]
    SchemaMismatch(String),

    #[error("no value for schema column {0:?}")]
    MissingColumn(String),
}
