//! gridmind-model — the model side of GridMind.
//!
//! Owns everything the decision core treats as "the model": the feature
//! schema/vector contract, the prediction traits, JSON model artifacts,
//! and the inference implementations behind them.
//!
//! # Components
//!
//! - **`schema`** — `FeatureSchema` (column order fixed at load time) and
//!   `FeatureVector` (validated at construction)
//! - **`ensemble`** — gradient-boosted tree inference (placement classifier)
//! - **`forest`** — isolation forest inference (telemetry outlier detector)
//! - **`artifact`** — JSON artifact parsing and loading
//! - **`provider`** — `ModelProvider`: both model handles, loaded once at
//!   startup, read-only and lock-free thereafter
//!
//! Models return raw integer labels (`0`/`1` for placement, `+1`/`-1` for
//! the outlier sentinel). Interpreting those labels — including rejecting
//! out-of-domain ones — is the caller's job, so a misbehaving model surfaces
//! as a contract violation instead of being absorbed by a type conversion.

pub mod artifact;
pub mod ensemble;
pub mod error;
pub mod forest;
pub mod provider;
pub mod schema;

pub use artifact::ModelArtifact;
pub use ensemble::{GradientBoostedTrees, TreeNode};
pub use error::{ModelError, ModelResult};
pub use forest::{IsolationForest, IsolationNode};
pub use provider::{
    ModelProvider, OutlierModel, PlacementModel, LABEL_BAD_PLACEMENT, LABEL_GOOD_PLACEMENT,
    SENTINEL_INLIER, SENTINEL_OUTLIER,
};
pub use schema::{FeatureSchema, FeatureVector};
