//! Isolation forest — the telemetry outlier detector.
//!
//! Inference only. Observations that isolate quickly (short average path
//! length across the trees) are outliers. The anomaly score follows the
//! standard formulation `2^(-E[h(x)] / c(n))`, where `c(n)` is the average
//! path length of an unsuccessful BST search over `n` records; the artifact
//! carries the score threshold chosen at fit time.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::provider::{OutlierModel, SENTINEL_INLIER, SENTINEL_OUTLIER};
use crate::schema::{FeatureSchema, FeatureVector};

const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

/// An isolation tree node. Leaves record the size of the training subsample
/// that reached them, which extends the path length by `c(size)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum IsolationNode {
    Split {
        feature: usize,
        threshold: f64,
        left: Box<IsolationNode>,
        right: Box<IsolationNode>,
    },
    Leaf {
        size: u32,
    },
}

impl IsolationNode {
    fn path_length(&self, values: &[f64], depth: u32) -> f64 {
        match self {
            IsolationNode::Leaf { size } => f64::from(depth) + harmonic_adjustment(*size),
            IsolationNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if values[*feature] < *threshold {
                    left.path_length(values, depth + 1)
                } else {
                    right.path_length(values, depth + 1)
                }
            }
        }
    }

    fn max_feature(&self) -> usize {
        match self {
            IsolationNode::Leaf { .. } => 0,
            IsolationNode::Split {
                feature,
                left,
                right,
                ..
            } => (*feature).max(left.max_feature()).max(right.max_feature()),
        }
    }
}

/// Average path length of an unsuccessful BST search over `n` records.
fn harmonic_adjustment(n: u32) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    let n = f64::from(n);
    2.0 * ((n - 1.0).ln() + EULER_GAMMA) - 2.0 * (n - 1.0) / n
}

/// A loaded telemetry outlier detector.
pub struct IsolationForest {
    schema: FeatureSchema,
    trees: Vec<IsolationNode>,
    sample_size: u32,
    score_threshold: f64,
}

impl IsolationForest {
    pub fn new(
        schema: FeatureSchema,
        trees: Vec<IsolationNode>,
        sample_size: u32,
        score_threshold: f64,
    ) -> ModelResult<Self> {
        if trees.is_empty() {
            return Err(ModelError::InvalidSchema(
                "forest artifact declares no trees".into(),
            ));
        }
        if sample_size < 2 {
            return Err(ModelError::InvalidSchema(format!(
                "sample_size must be at least 2, got {sample_size}"
            )));
        }
        for tree in &trees {
            let max = tree.max_feature();
            if max >= schema.len() {
                return Err(ModelError::InvalidSchema(format!(
                    "tree references feature index {max} but schema has {} columns",
                    schema.len()
                )));
            }
        }
        Ok(Self {
            schema,
            trees,
            sample_size,
            score_threshold,
        })
    }

    /// Anomaly score in (0, 1): near 1 for observations that isolate
    /// quickly, near 0.5 and below for ordinary ones.
    pub fn anomaly_score(&self, features: &FeatureVector) -> ModelResult<f64> {
        features.check_schema(&self.schema)?;
        let mean_path: f64 = self
            .trees
            .iter()
            .map(|tree| tree.path_length(features.values(), 0))
            .sum::<f64>()
            / self.trees.len() as f64;
        Ok(2f64.powf(-mean_path / harmonic_adjustment(self.sample_size)))
    }
}

impl OutlierModel for IsolationForest {
    fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    fn predict(&self, features: &FeatureVector) -> ModelResult<i64> {
        let score = self.anomaly_score(features)?;
        if score >= self.score_threshold {
            Ok(SENTINEL_OUTLIER)
        } else {
            Ok(SENTINEL_INLIER)
        }
    }
}
