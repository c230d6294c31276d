//! Gradient-boosted tree ensemble — the placement classifier.
//!
//! Inference only: trees are produced offline by the training pipeline and
//! shipped as a JSON artifact. Each tree contributes a leaf margin; the
//! summed margin goes through the logistic function and the label is `1`
//! iff the resulting probability clears 0.5.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::provider::{PlacementModel, LABEL_BAD_PLACEMENT, LABEL_GOOD_PLACEMENT};
use crate::schema::{FeatureSchema, FeatureVector};

/// A binary decision tree node. Traversal goes left when
/// `x[feature] < threshold`, matching the trainer's split convention.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: Box<TreeNode>,
        right: Box<TreeNode>,
    },
    Leaf {
        value: f64,
    },
}

impl TreeNode {
    fn margin(&self, values: &[f64]) -> f64 {
        match self {
            TreeNode::Leaf { value } => *value,
            TreeNode::Split {
                feature,
                threshold,
                left,
                right,
            } => {
                if values[*feature] < *threshold {
                    left.margin(values)
                } else {
                    right.margin(values)
                }
            }
        }
    }

    /// Highest feature index referenced anywhere in the tree.
    fn max_feature(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Split {
                feature,
                left,
                right,
                ..
            } => (*feature).max(left.max_feature()).max(right.max_feature()),
        }
    }
}

/// A loaded placement classifier.
pub struct GradientBoostedTrees {
    schema: FeatureSchema,
    base_score: f64,
    trees: Vec<TreeNode>,
}

impl GradientBoostedTrees {
    /// Assemble an ensemble over the given schema.
    ///
    /// Rejects empty ensembles and trees that reference feature indices
    /// outside the schema.
    pub fn new(schema: FeatureSchema, base_score: f64, trees: Vec<TreeNode>) -> ModelResult<Self> {
        if trees.is_empty() {
            return Err(ModelError::InvalidSchema(
                "ensemble artifact declares no trees".into(),
            ));
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
            base_score,
            trees,
        })
    }

    /// Probability that the placement is good.
    pub fn probability(&self, features: &FeatureVector) -> ModelResult<f64> {
        features.check_schema(&self.schema)?;
        let margin: f64 = self.base_score
            + self
                .trees
                .iter()
                .map(|tree| tree.margin(features.values()))
                .sum::<f64>();
        Ok(sigmoid(margin))
    }
}

impl PlacementModel for GradientBoostedTrees {
    fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    fn predict(&self, features: &FeatureVector) -> ModelResult<i64> {
        let probability = self.probability(features)?;
        if probability >= 0.5 {
            Ok(LABEL_GOOD_PLACEMENT)
        } else {
            Ok(LABEL_BAD_PLACEMENT)
        }
    }
}

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{COL_GPU_MEM_USED, COL_GPU_TEMP};

    fn leaf(value: f64) -> TreeNode {
        TreeNode::Leaf { value }
    }

    fn split(feature: usize, threshold: f64, left: TreeNode, right: TreeNode) -> TreeNode {
        TreeNode::Split {
            feature,
            threshold,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    fn telemetry_vector(gpu_temp: f64, gpu_mem_used: f64) -> FeatureVector {
        FeatureSchema::telemetry()
            .encode(|column| match column {
                COL_GPU_TEMP => Some(gpu_temp),
                COL_GPU_MEM_USED => Some(gpu_mem_used),
                _ => None,
            })
            .unwrap()
    }

    #[test]
    fn rejects_empty_ensemble() {
        let result = GradientBoostedTrees::new(FeatureSchema::telemetry(), 0.0, vec![]);
        assert!(matches!(result, Err(ModelError::InvalidSchema(_))));
    }

    #[test]
    fn rejects_out_of_range_feature_index() {
        let tree = split(5, 10.0, leaf(1.0), leaf(-1.0));
        let result = GradientBoostedTrees::new(FeatureSchema::telemetry(), 0.0, vec![tree]);
        assert!(matches!(result, Err(ModelError::InvalidSchema(_))));
    }

    #[test]
    fn margin_follows_split_direction() {
        // Single split on gpu_temp at 75: cool GPUs land on the +2 leaf.
        let tree = split(0, 75.0, leaf(2.0), leaf(-2.0));
        let model =
            GradientBoostedTrees::new(FeatureSchema::telemetry(), 0.0, vec![tree]).unwrap();

        let cool = model.probability(&telemetry_vector(45.0, 256.0)).unwrap();
        let hot = model.probability(&telemetry_vector(80.0, 256.0)).unwrap();

        assert!((cool - sigmoid(2.0)).abs() < 1e-12);
        assert!((hot - sigmoid(-2.0)).abs() < 1e-12);
    }

    #[test]
    fn margins_sum_across_trees_with_base_score() {
        let trees = vec![
            split(0, 75.0, leaf(1.0), leaf(-10.0)),
            split(1, 22000.0, leaf(1.0), leaf(-10.0)),
        ];
        let model = GradientBoostedTrees::new(FeatureSchema::telemetry(), -1.0, trees).unwrap();

        // Both splits favorable: margin = -1 + 1 + 1 = 1.
        let p = model.probability(&telemetry_vector(45.0, 256.0)).unwrap();
        assert!((p - sigmoid(1.0)).abs() < 1e-12);

        // Memory over the split: margin = -1 + 1 - 10 = -10.
        let p = model.probability(&telemetry_vector(45.0, 23000.0)).unwrap();
        assert!((p - sigmoid(-10.0)).abs() < 1e-12);
    }

    #[test]
    fn label_threshold_is_half() {
        let good = GradientBoostedTrees::new(
            FeatureSchema::telemetry(),
            0.0,
            vec![leaf(0.1)],
        )
        .unwrap();
        let bad = GradientBoostedTrees::new(
            FeatureSchema::telemetry(),
            0.0,
            vec![leaf(-0.1)],
        )
        .unwrap();

        let v = telemetry_vector(45.0, 256.0);
        assert_eq!(good.predict(&v).unwrap(), LABEL_GOOD_PLACEMENT);
        assert_eq!(bad.predict(&v).unwrap(), LABEL_BAD_PLACEMENT);
    }

    #[test]
    fn predict_rejects_mismatched_vector() {
        let model = GradientBoostedTrees::new(
            FeatureSchema::placement_compact(),
            0.0,
            vec![leaf(1.0)],
        )
        .unwrap();

        let result = model.predict(&telemetry_vector(45.0, 256.0));
        assert!(matches!(result, Err(ModelError::SchemaMismatch(_))));
    }
}
