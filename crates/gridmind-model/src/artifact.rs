//! JSON model artifacts.
//!
//! An artifact is a self-describing document: it declares its kind and the
//! ordered column list it was trained on. Binding the schema to the
//! artifact means a serving process can never pair a model with the wrong
//! feature layout — the columns come from the same file as the trees.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ensemble::{GradientBoostedTrees, TreeNode};
use crate::error::{ModelError, ModelResult};
use crate::forest::{IsolationForest, IsolationNode};
use crate::schema::FeatureSchema;

/// A parsed model artifact, not yet validated into a usable model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    GradientBoostedTrees {
        columns: Vec<String>,
        #[serde(default)]
        base_score: f64,
        trees: Vec<TreeNode>,
    },
    IsolationForest {
        columns: Vec<String>,
        trees: Vec<IsolationNode>,
        sample_size: u32,
        score_threshold: f64,
    },
}

impl ModelArtifact {
    /// Read and parse an artifact file.
    ///
    /// An unreadable file is `Unavailable` — at startup that must abort the
    /// process instead of letting it serve without a model.
    pub fn from_file(path: &Path) -> ModelResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| ModelError::Unavailable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let artifact = Self::from_json(&raw)?;
        debug!(path = %path.display(), kind = artifact.kind(), "model artifact parsed");
        Ok(artifact)
    }

    pub fn from_json(raw: &str) -> ModelResult<Self> {
        serde_json::from_str(raw).map_err(|e| ModelError::Parse(e.to_string()))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ModelArtifact::GradientBoostedTrees { .. } => "gradient_boosted_trees",
            ModelArtifact::IsolationForest { .. } => "isolation_forest",
        }
    }

    /// Validate into a placement classifier.
    pub fn into_placement_model(self) -> ModelResult<GradientBoostedTrees> {
        match self {
            ModelArtifact::GradientBoostedTrees {
                columns,
                base_score,
                trees,
            } => GradientBoostedTrees::new(FeatureSchema::new(columns)?, base_score, trees),
            other => Err(ModelError::WrongKind {
                expected: "gradient_boosted_trees",
                found: other.kind(),
            }),
        }
    }

    /// Validate into a telemetry outlier detector.
    pub fn into_outlier_model(self) -> ModelResult<IsolationForest> {
        match self {
            ModelArtifact::IsolationForest {
                columns,
                trees,
                sample_size,
                score_threshold,
            } => IsolationForest::new(
                FeatureSchema::new(columns)?,
                trees,
                sample_size,
                score_threshold,
            ),
            other => Err(ModelError::WrongKind {
                expected: "isolation_forest",
                found: other.kind(),
            }),
        }
    }
}
