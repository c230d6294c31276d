//! Verdict types returned to callers.

use serde::{Deserialize, Serialize};

/// The only reason strings a placement verdict ever carries.
pub const REASON_OK: &str = "OK";
pub const REASON_STATE_NOT_OPTIMAL: &str = "GPU state not optimal";
pub const REASON_CARBON_INTENSITY: &str = "Carbon intensity is too high for a heavy job";

/// The engine's judgment on whether a GPU is a suitable target for a
/// workload, plus a reason code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementVerdict {
    pub is_good_placement: bool,
    pub reason: String,
}

impl PlacementVerdict {
    pub fn approved() -> Self {
        Self {
            is_good_placement: true,
            reason: REASON_OK.to_string(),
        }
    }

    pub fn denied(reason: &str) -> Self {
        Self {
            is_good_placement: false,
            reason: reason.to_string(),
        }
    }
}

/// Whether a telemetry reading is an outlier relative to the distribution
/// the detector was fit on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnomalyVerdict {
    pub is_anomaly: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names_are_stable() {
        let verdict = PlacementVerdict::approved();
        let json = serde_json::to_value(&verdict).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"is_good_placement": true, "reason": "OK"})
        );

        let verdict = AnomalyVerdict { is_anomaly: false };
        let json = serde_json::to_value(verdict).unwrap();
        assert_eq!(json, serde_json::json!({"is_anomaly": false}));
    }
}
