//! Feature schema and vector types.
//!
//! A `FeatureSchema` is the ordered column list a model was trained on; it
//! is fixed when the model artifact is loaded and never changes per request.
//! A `FeatureVector` carries values in exactly that order and is validated
//! at construction, so a train/serve column mismatch fails loudly instead of
//! silently degrading prediction quality.

use crate::error::{ModelError, ModelResult};

/// Well-known column names shared between the encoder and model artifacts.
pub const COL_GPU_TEMP: &str = "gpu_temp";
pub const COL_GPU_MEM_USED: &str = "gpu_mem_used";
pub const COL_JOB_TYPE_TRAINING: &str = "job_type_training";
pub const COL_UTILIZATION_GPU: &str = "utilization_gpu";
pub const COL_POWER_DRAW_W: &str = "power_draw_w";
pub const COL_THROTTLING: &str = "throttling";

/// Ordered list of feature columns. The order is a contract with the model:
/// vectors are laid out in this order and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

impl FeatureSchema {
    /// Build a schema from an ordered column list.
    ///
    /// Rejects empty schemas and duplicate columns.
    pub fn new(columns: Vec<String>) -> ModelResult<Self> {
        if columns.is_empty() {
            return Err(ModelError::InvalidSchema("schema has no columns".into()));
        }
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].contains(column) {
                return Err(ModelError::InvalidSchema(format!(
                    "duplicate column {column:?}"
                )));
            }
        }
        Ok(Self { columns })
    }

    /// The compact placement schema used by early classifier builds.
    pub fn placement_compact() -> Self {
        Self {
            columns: vec![
                COL_GPU_TEMP.to_string(),
                COL_GPU_MEM_USED.to_string(),
                COL_JOB_TYPE_TRAINING.to_string(),
            ],
        }
    }

    /// The extended placement schema: compact plus utilization, power draw,
    /// and the throttling indicator. This is the system of record.
    pub fn placement_extended() -> Self {
        Self {
            columns: vec![
                COL_GPU_TEMP.to_string(),
                COL_GPU_MEM_USED.to_string(),
                COL_JOB_TYPE_TRAINING.to_string(),
                COL_UTILIZATION_GPU.to_string(),
                COL_POWER_DRAW_W.to_string(),
                COL_THROTTLING.to_string(),
            ],
        }
    }

    /// The outlier detector's schema: raw telemetry only.
    pub fn telemetry() -> Self {
        Self {
            columns: vec![COL_GPU_TEMP.to_string(), COL_GPU_MEM_USED.to_string()],
        }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Encode a vector by resolving every column in schema order.
    ///
    /// `value_of` maps a column name to its numeric value; a column it
    /// cannot resolve fails the whole encoding. The output never reorders,
    /// adds, or drops columns based on input values.
    pub fn encode<F>(&self, mut value_of: F) -> ModelResult<FeatureVector>
    where
        F: FnMut(&str) -> Option<f64>,
    {
        let mut values = Vec::with_capacity(self.columns.len());
        for column in &self.columns {
            match value_of(column) {
                Some(value) => values.push(value),
                None => return Err(ModelError::MissingColumn(column.clone())),
            }
        }
        Ok(FeatureVector {
            columns: self.columns.clone(),
            values,
        })
    }
}

/// A feature vector: values laid out in its schema's column order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    columns: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Look up a single value by column name.
    pub fn get(&self, column: &str) -> Option<f64> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|i| self.values[i])
    }

    /// Check this vector against a model's schema: same columns, same order.
    pub fn check_schema(&self, schema: &FeatureSchema) -> ModelResult<()> {
        if self.columns != schema.columns {
            return Err(ModelError::SchemaMismatch(format!(
                "vector columns {:?} != model columns {:?}",
                self.columns, schema.columns
            )));
        }
        Ok(())
    }
}
