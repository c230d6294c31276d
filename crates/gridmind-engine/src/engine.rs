//! Placement decision engine.
//!
//! Orchestrates one placement decision: validate → policy gate → encode →
//! model prediction → verdict. The gate runs before the model and its veto
//! is final.

use tracing::debug;

use gridmind_model::{ModelError, ModelProvider, LABEL_BAD_PLACEMENT, LABEL_GOOD_PLACEMENT};

use crate::encoder;
use crate::error::{EngineError, EngineResult};
use crate::policy;
use crate::request::PlacementRequest;
use crate::verdict::{PlacementVerdict, REASON_STATE_NOT_OPTIMAL};

/// Decides whether a GPU is a suitable placement target.
#[derive(Clone)]
pub struct DecisionEngine {
    provider: ModelProvider,
}

impl DecisionEngine {
    /// Build an engine over a loaded provider.
    ///
    /// Fails when the placement model's schema contains a column the
    /// encoder cannot fill — a startup error, not a per-request one.
    pub fn new(provider: ModelProvider) -> EngineResult<Self> {
        for column in provider.placement().schema().columns() {
            if !encoder::is_placement_column(column) {
                return Err(ModelError::InvalidSchema(format!(
                    "placement schema column {column:?} has no encoder"
                ))
                .into());
            }
        }
        Ok(Self { provider })
    }

    /// Decide a single placement request.
    pub fn decide(&self, request: &PlacementRequest) -> EngineResult<PlacementVerdict> {
        let job_type = request.validate()?;

        if let Some(verdict) = policy::carbon_gate(job_type, request.carbon_intensity) {
            debug!(
                carbon_intensity = request.carbon_intensity,
                "carbon gate vetoed placement"
            );
            return Ok(verdict);
        }

        let schema = self.provider.placement().schema();
        let features = encoder::placement_features(schema, request, job_type)?;
        let label = self.provider.placement().predict(&features)?;

        match label {
            LABEL_GOOD_PLACEMENT => Ok(PlacementVerdict::approved()),
            LABEL_BAD_PLACEMENT => Ok(PlacementVerdict::denied(REASON_STATE_NOT_OPTIMAL)),
            other => Err(EngineError::ModelContract(format!(
                "placement model returned label {other}, expected 0 or 1"
            ))),
        }
    }
}
