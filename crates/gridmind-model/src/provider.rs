//! Model provider — owns the loaded model handles.
//!
//! The provider is initialized once at process start and read-only
//! thereafter. It is `Clone + Send + Sync` (both handles behind `Arc`), so
//! concurrent requests share one immutable model reference without locking.

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::artifact::ModelArtifact;
use crate::error::ModelResult;
use crate::schema::{FeatureSchema, FeatureVector};

/// Placement classifier label domain.
pub const LABEL_GOOD_PLACEMENT: i64 = 1;
pub const LABEL_BAD_PLACEMENT: i64 = 0;

/// Outlier detector sentinel domain: `+1` inlier, `-1` outlier.
pub const SENTINEL_INLIER: i64 = 1;
pub const SENTINEL_OUTLIER: i64 = -1;

/// The placement classifier's prediction contract.
///
/// Returns a raw label; `1` means good placement, `0` means bad. Callers
/// enforce the domain — an out-of-range label is a contract violation on
/// their side of the seam, not something to coerce here.
pub trait PlacementModel: Send + Sync {
    fn schema(&self) -> &FeatureSchema;
    fn predict(&self, features: &FeatureVector) -> ModelResult<i64>;
}

/// The outlier detector's prediction contract (`+1`/`-1` sentinel).
pub trait OutlierModel: Send + Sync {
    fn schema(&self) -> &FeatureSchema;
    fn predict(&self, features: &FeatureVector) -> ModelResult<i64>;
}

/// Both model handles, shared across all in-flight requests.
#[derive(Clone)]
pub struct ModelProvider {
    placement: Arc<dyn PlacementModel>,
    outlier: Arc<dyn OutlierModel>,
}

impl ModelProvider {
    pub fn new(placement: Arc<dyn PlacementModel>, outlier: Arc<dyn OutlierModel>) -> Self {
        Self { placement, outlier }
    }

    /// Load both artifacts from disk. Any failure here must abort startup;
    /// serving with a missing model is never an option.
    pub fn load(placement_path: &Path, outlier_path: &Path) -> ModelResult<Self> {
        let placement = ModelArtifact::from_file(placement_path)?.into_placement_model()?;
        info!(
            path = %placement_path.display(),
            columns = ?placement.schema().columns(),
            "placement model loaded"
        );

        let outlier = ModelArtifact::from_file(outlier_path)?.into_outlier_model()?;
        info!(
            path = %outlier_path.display(),
            columns = ?outlier.schema().columns(),
            "outlier model loaded"
        );

        Ok(Self::new(Arc::new(placement), Arc::new(outlier)))
    }

    pub fn placement(&self) -> &dyn PlacementModel {
        self.placement.as_ref()
    }

    pub fn outlier(&self) -> &dyn OutlierModel {
        self.outlier.as_ref()
    }
}
