//! Decision counters and Prometheus text exposition.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-lifetime decision counters. Lock-free; incremented per request.
#[derive(Debug, Default)]
pub struct DecisionMetrics {
    placement_requests: AtomicU64,
    placements_denied: AtomicU64,
    carbon_vetoes: AtomicU64,
    anomaly_requests: AtomicU64,
    anomalies_flagged: AtomicU64,
    invalid_requests: AtomicU64,
    model_failures: AtomicU64,
}

impl DecisionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_placement_request(&self) {
        self.placement_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_placement_denied(&self) {
        self.placements_denied.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_carbon_veto(&self) {
        self.carbon_vetoes.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_anomaly_request(&self) {
        self.anomaly_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_anomaly_flagged(&self) {
        self.anomalies_flagged.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_invalid_request(&self) {
        self.invalid_requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_model_failure(&self) {
        self.model_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Render all counters in Prometheus text exposition format.
    pub fn render_prometheus(&self) -> String {
        let mut out = String::new();

        out.push_str("# HELP gridmind_placement_requests_total Placement decisions requested.\n");
        out.push_str("# TYPE gridmind_placement_requests_total counter\n");
        out.push_str(&format!(
            "gridmind_placement_requests_total {}\n",
            self.placement_requests.load(Ordering::Relaxed)
        ));

        out.push_str("# HELP gridmind_placements_denied_total Placements denied for any reason.\n");
        out.push_str("# TYPE gridmind_placements_denied_total counter\n");
        out.push_str(&format!(
            "gridmind_placements_denied_total {}\n",
            self.placements_denied.load(Ordering::Relaxed)
        ));

        out.push_str("# HELP gridmind_carbon_vetoes_total Placements vetoed by the carbon gate.\n");
        out.push_str("# TYPE gridmind_carbon_vetoes_total counter\n");
        out.push_str(&format!(
            "gridmind_carbon_vetoes_total {}\n",
            self.carbon_vetoes.load(Ordering::Relaxed)
        ));

        out.push_str("# HELP gridmind_anomaly_requests_total Anomaly checks requested.\n");
        out.push_str("# TYPE gridmind_anomaly_requests_total counter\n");
        out.push_str(&format!(
            "gridmind_anomaly_requests_total {}\n",
            self.anomaly_requests.load(Ordering::Relaxed)
        ));

        out.push_str("# HELP gridmind_anomalies_flagged_total Telemetry readings flagged anomalous.\n");
        out.push_str("# TYPE gridmind_anomalies_flagged_total counter\n");
        out.push_str(&format!(
            "gridmind_anomalies_flagged_total {}\n",
            self.anomalies_flagged.load(Ordering::Relaxed)
        ));

        out.push_str("# HELP gridmind_invalid_requests_total Requests rejected as invalid.\n");
        out.push_str("# TYPE gridmind_invalid_requests_total counter\n");
        out.push_str(&format!(
            "gridmind_invalid_requests_total {}\n",
            self.invalid_requests.load(Ordering::Relaxed)
        ));

        out.push_str("# HELP gridmind_model_failures_total Model errors and contract violations.\n");
        out.push_str("# TYPE gridmind_model_failures_total counter\n");
        out.push_str(&format!(
            "gridmind_model_failures_total {}\n",
            self.model_failures.load(Ordering::Relaxed)
        ));

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_start_at_zero() {
        let metrics = DecisionMetrics::new();
        let output = metrics.render_prometheus();
        assert!(output.contains("gridmind_placement_requests_total 0"));
        assert!(output.contains("gridmind_carbon_vetoes_total 0"));
    }

    #[test]
    fn counters_accumulate() {
        let metrics = DecisionMetrics::new();
        metrics.record_placement_request();
        metrics.record_placement_request();
        metrics.record_carbon_veto();

        let output = metrics.render_prometheus();
        assert!(output.contains("gridmind_placement_requests_total 2"));
        assert!(output.contains("gridmind_carbon_vetoes_total 1"));
    }

    #[test]
    fn render_format_is_prometheus_compatible() {
        let metrics = DecisionMetrics::new();
        let output = metrics.render_prometheus();

        // Every non-comment line is `metric_name value`.
        for line in output.lines() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let parts: Vec<&str> = line.split(' ').collect();
            assert_eq!(parts.len(), 2, "line should be name + value: {line}");
            assert!(parts[0].starts_with("gridmind_"));
            assert!(parts[1].parse::<u64>().is_ok());
        }
    }
}
