//! Wire request types for the placement and anomaly endpoints.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Carbon intensity assumed when the caller does not supply one. Below the
/// gate threshold, i.e. non-blocking.
pub const DEFAULT_CARBON_INTENSITY: f64 = 300.0;

fn default_carbon_intensity() -> f64 {
    DEFAULT_CARBON_INTENSITY
}

/// A placement query: the candidate GPU's current telemetry plus the
/// workload and grid context. Constructed per call, never mutated.
///
/// `utilization_gpu`, `power_draw_w`, and `throttling` feed the extended
/// feature schema and default to zero/inactive when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementRequest {
    pub gpu_temp: i64,
    pub gpu_mem_used: i64,
    pub job_type: String,
    #[serde(default = "default_carbon_intensity")]
    pub carbon_intensity: f64,
    #[serde(default)]
    pub utilization_gpu: i64,
    #[serde(default)]
    pub power_draw_w: i64,
    #[serde(default)]
    pub throttling: ThrottleState,
}

impl PlacementRequest {
    /// Validate the request and return the parsed job type.
    pub fn validate(&self) -> EngineResult<JobType> {
        validate_telemetry(self.gpu_temp, self.gpu_mem_used)?;
        if !self.carbon_intensity.is_finite() || self.carbon_intensity < 0.0 {
            return Err(EngineError::InvalidRequest(format!(
                "carbon_intensity must be a non-negative number, got {}",
                self.carbon_intensity
            )));
        }
        if self.utilization_gpu < 0 {
            return Err(EngineError::InvalidRequest(format!(
                "utilization_gpu must be non-negative, got {}",
                self.utilization_gpu
            )));
        }
        if self.power_draw_w < 0 {
            return Err(EngineError::InvalidRequest(format!(
                "power_draw_w must be non-negative, got {}",
                self.power_draw_w
            )));
        }
        JobType::parse(&self.job_type)
    }
}

/// A telemetry anomaly query. Constructed per call, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyRequest {
    pub gpu_temp: i64,
    pub gpu_mem_used: i64,
}

impl AnomalyRequest {
    pub fn validate(&self) -> EngineResult<()> {
        validate_telemetry(self.gpu_temp, self.gpu_mem_used)
    }
}

fn validate_telemetry(gpu_temp: i64, gpu_mem_used: i64) -> EngineResult<()> {
    if gpu_temp < 0 {
        return Err(EngineError::InvalidRequest(format!(
            "gpu_temp must be non-negative, got {gpu_temp}"
        )));
    }
    if gpu_mem_used < 0 {
        return Err(EngineError::InvalidRequest(format!(
            "gpu_mem_used must be non-negative, got {gpu_mem_used}"
        )));
    }
    Ok(())
}

/// The workload classes the engine recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobType {
    Training,
    Inference,
}

impl JobType {
    /// Table-driven parse from the wire string. Anything outside the table
    /// is a validation failure, never coerced to a default.
    pub fn parse(raw: &str) -> EngineResult<Self> {
        match raw {
            "training" => Ok(JobType::Training),
            "inference" => Ok(JobType::Inference),
            other => Err(EngineError::InvalidRequest(format!(
                "unrecognized job_type {other:?}, expected \"training\" or \"inference\""
            ))),
        }
    }

    /// The classifier's binary indicator feature.
    pub fn training_indicator(self) -> f64 {
        match self {
            JobType::Training => 1.0,
            JobType::Inference => 0.0,
        }
    }
}

/// GPU clock-throttling state as reported by the agent.
///
/// Replaces the driver's free-form reason string: unknown wire values are
/// rejected at deserialization, and the numeric encoding is a total match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThrottleState {
    #[default]
    Inactive,
    Thermal,
    Power,
}

impl ThrottleState {
    /// The classifier's binary throttling feature.
    pub fn indicator(self) -> f64 {
        match self {
            ThrottleState::Inactive => 0.0,
            ThrottleState::Thermal | ThrottleState::Power => 1.0,
        }
    }
}
