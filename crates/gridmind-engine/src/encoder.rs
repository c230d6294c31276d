//! Feature encoding — request fields to model feature vectors.
//!
//! Column order comes from the loaded model's schema, fixed at load time.
//! The encoder never reorders, adds, or drops columns based on input
//! values, and every categorical mapping is an exhaustive match.

use gridmind_model::schema::{
    COL_GPU_MEM_USED, COL_GPU_TEMP, COL_JOB_TYPE_TRAINING, COL_POWER_DRAW_W, COL_THROTTLING,
    COL_UTILIZATION_GPU,
};
use gridmind_model::{FeatureSchema, FeatureVector};

use crate::error::EngineResult;
use crate::request::{AnomalyRequest, JobType, PlacementRequest};

/// Whether the placement encoder can fill the given schema column.
pub fn is_placement_column(column: &str) -> bool {
    matches!(
        column,
        COL_GPU_TEMP
            | COL_GPU_MEM_USED
            | COL_JOB_TYPE_TRAINING
            | COL_UTILIZATION_GPU
            | COL_POWER_DRAW_W
            | COL_THROTTLING
    )
}

/// Whether the telemetry encoder can fill the given schema column.
pub fn is_telemetry_column(column: &str) -> bool {
    matches!(column, COL_GPU_TEMP | COL_GPU_MEM_USED)
}

/// Encode a validated placement request for the given schema.
pub fn placement_features(
    schema: &FeatureSchema,
    request: &PlacementRequest,
    job_type: JobType,
) -> EngineResult<FeatureVector> {
    let vector = schema.encode(|column| match column {
        COL_GPU_TEMP => Some(request.gpu_temp as f64),
        COL_GPU_MEM_USED => Some(request.gpu_mem_used as f64),
        COL_JOB_TYPE_TRAINING => Some(job_type.training_indicator()),
        COL_UTILIZATION_GPU => Some(request.utilization_gpu as f64),
        COL_POWER_DRAW_W => Some(request.power_draw_w as f64),
        COL_THROTTLING => Some(request.throttling.indicator()),
        _ => None,
    })?;
    Ok(vector)
}

/// Encode an anomaly request for the given schema.
pub fn telemetry_features(
    schema: &FeatureSchema,
    request: &AnomalyRequest,
) -> EngineResult<FeatureVector> {
    let vector = schema.encode(|column| match column {
        COL_GPU_TEMP => Some(request.gpu_temp as f64),
        COL_GPU_MEM_USED => Some(request.gpu_mem_used as f64),
        _ => None,
    })?;
    Ok(vector)
}
