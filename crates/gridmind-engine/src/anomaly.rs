//! Anomaly classification over GPU telemetry.
//!
//! Thin adapter around the outlier detector: encodes the telemetry pair
//! and interprets the `+1`/`-1` sentinel. Exactly `-1` is anomalous;
//! anything outside the sentinel domain is a contract violation, never a
//! silent default.

use tracing::debug;

use gridmind_model::{ModelError, ModelProvider, SENTINEL_INLIER, SENTINEL_OUTLIER};

use crate::encoder;
use crate::error::{EngineError, EngineResult};
use crate::request::AnomalyRequest;
use crate::verdict::AnomalyVerdict;

/// Classifies telemetry readings against the fitted outlier detector.
#[derive(Clone)]
pub struct AnomalyClassifier {
    provider: ModelProvider,
}

impl AnomalyClassifier {
    /// Build a classifier over a loaded provider.
    ///
    /// Fails when the outlier model's schema contains a column the
    /// telemetry encoder cannot fill.
    pub fn new(provider: ModelProvider) -> EngineResult<Self> {
        for column in provider.outlier().schema().columns() {
            if !encoder::is_telemetry_column(column) {
                return Err(ModelError::InvalidSchema(format!(
                    "outlier schema column {column:?} has no encoder"
                ))
                .into());
            }
        }
        Ok(Self { provider })
    }

    /// Classify a single telemetry reading.
    pub fn check(&self, request: &AnomalyRequest) -> EngineResult<AnomalyVerdict> {
        request.validate()?;

        let schema = self.provider.outlier().schema();
        let features = encoder::telemetry_features(schema, request)?;
        let sentinel = self.provider.outlier().predict(&features)?;

        match sentinel {
            SENTINEL_OUTLIER => {
                debug!(
                    gpu_temp = request.gpu_temp,
                    gpu_mem_used = request.gpu_mem_used,
                    "telemetry flagged as outlier"
                );
                Ok(AnomalyVerdict { is_anomaly: true })
            }
            SENTINEL_INLIER => Ok(AnomalyVerdict { is_anomaly: false }),
            other => Err(EngineError::ModelContract(format!(
                "outlier model returned sentinel {other}, expected +1 or -1"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use gridmind_model::{
        FeatureSchema, FeatureVector, ModelResult, OutlierModel, PlacementModel,
        LABEL_GOOD_PLACEMENT,
    };

    struct StubPlacement;

    impl PlacementModel for StubPlacement {
        fn schema(&self) -> &FeatureSchema {
            // Static-ish schema for the unused half of the provider.
            static SCHEMA: std::sync::OnceLock<FeatureSchema> = std::sync::OnceLock::new();
            SCHEMA.get_or_init(FeatureSchema::placement_extended)
        }

        fn predict(&self, _features: &FeatureVector) -> ModelResult<i64> {
            Ok(LABEL_GOOD_PLACEMENT)
        }
    }

    struct StubOutlier {
        schema: FeatureSchema,
        sentinel: i64,
    }

    impl OutlierModel for StubOutlier {
        fn schema(&self) -> &FeatureSchema {
            &self.schema
        }

        fn predict(&self, features: &FeatureVector) -> ModelResult<i64> {
            features.check_schema(&self.schema)?;
            Ok(self.sentinel)
        }
    }

    fn classifier_with_sentinel(sentinel: i64) -> AnomalyClassifier {
        let provider = ModelProvider::new(
            Arc::new(StubPlacement),
            Arc::new(StubOutlier {
                schema: FeatureSchema::telemetry(),
                sentinel,
            }),
        );
        AnomalyClassifier::new(provider).unwrap()
    }

    fn reading(gpu_temp: i64, gpu_mem_used: i64) -> AnomalyRequest {
        AnomalyRequest {
            gpu_temp,
            gpu_mem_used,
        }
    }

    #[test]
    fn outlier_sentinel_is_anomalous() {
        let classifier = classifier_with_sentinel(-1);
        // Sentinel wins regardless of feature values.
        for (temp, mem) in [(45, 256), (0, 0), (99, 23000)] {
            let verdict = classifier.check(&reading(temp, mem)).unwrap();
            assert!(verdict.is_anomaly);
        }
    }

    #[test]
    fn inlier_sentinel_is_normal() {
        let classifier = classifier_with_sentinel(1);
        let verdict = classifier.check(&reading(45, 256)).unwrap();
        assert!(!verdict.is_anomaly);
    }

    #[test]
    fn zero_sentinel_is_contract_violation() {
        let classifier = classifier_with_sentinel(0);
        let result = classifier.check(&reading(45, 256));
        assert!(matches!(result, Err(EngineError::ModelContract(_))));
    }

    #[test]
    fn negative_telemetry_is_invalid_request() {
        let classifier = classifier_with_sentinel(1);
        let result = classifier.check(&reading(-3, 256));
        assert!(matches!(result, Err(EngineError::InvalidRequest(_))));
    }

    #[test]
    fn construction_rejects_unknown_schema_column() {
        let schema = FeatureSchema::new(vec!["gpu_temp".into(), "job_type_training".into()])
            .unwrap();
        let provider = ModelProvider::new(
            Arc::new(StubPlacement),
            Arc::new(StubOutlier { schema, sentinel: 1 }),
        );
        assert!(AnomalyClassifier::new(provider).is_err());
    }
}
