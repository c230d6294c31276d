//! Carbon-intensity policy gate.
//!
//! Deterministic rules evaluated before any model call. A gate veto is
//! final; a favorable prediction can never override it.

use crate::request::JobType;
use crate::verdict::{PlacementVerdict, REASON_CARBON_INTENSITY};

/// Grid carbon intensity (gCO2eq/kWh) above which heavy jobs are refused.
pub const CARBON_INTENSITY_LIMIT: f64 = 400.0;

/// Evaluate the carbon gate. Returns the veto verdict when it fires.
///
/// Only training jobs are gated; inference placement rests on model
/// judgment alone.
pub fn carbon_gate(job_type: JobType, carbon_intensity: f64) -> Option<PlacementVerdict> {
    if job_type == JobType::Training && carbon_intensity > CARBON_INTENSITY_LIMIT {
        return Some(PlacementVerdict::denied(REASON_CARBON_INTENSITY));
    }
    None
}
