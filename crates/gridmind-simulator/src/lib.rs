//! gridmind-simulator — synthetic telemetry corpus generation.
//!
//! Reproduces the training corpus the placement classifier is fit on:
//! correlated utilization/temperature/power samples, simulated thermal
//! throttling, and the placement labeling heuristics. Generation is
//! deterministic under a seed, so a corpus can be regenerated exactly.
//!
//! This crate is tooling for the training pipeline; nothing here runs on
//! the serving path.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// CSV column order. Matches the extended feature schema plus the label.
pub const CSV_HEADER: &str =
    "utilization_gpu,gpu_temp,power_draw_w,gpu_mem_used,job_type_training,throttling,good_placement";

/// One synthetic telemetry observation with its placement label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TelemetrySample {
    pub utilization_gpu: i64,
    pub gpu_temp: i64,
    pub power_draw_w: i64,
    pub gpu_mem_used: i64,
    pub job_type_training: i64,
    pub throttling: i64,
    pub good_placement: i64,
}

/// Generate a labeled corpus of `samples` observations.
pub fn generate(samples: usize, seed: u64) -> Vec<TelemetrySample> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..samples).map(|_| sample(&mut rng)).collect()
}

fn sample(rng: &mut impl Rng) -> TelemetrySample {
    let utilization_gpu: i64 = rng.gen_range(0..=100);
    // Temperature tracks utilization; power tracks both.
    let gpu_temp = (utilization_gpu as f64 * 0.4) as i64 + rng.gen_range(35..55);
    let power_draw_w =
        (utilization_gpu as f64 * 1.5 + gpu_temp as f64 * 0.5) as i64 + rng.gen_range(50..100);
    let gpu_mem_used = rng.gen_range(1000..24000);
    let job_type_training = rng.gen_range(0..2);

    // Thermal throttling kicks in on hot, power-hungry GPUs.
    let throttling = i64::from(gpu_temp > 90 && power_draw_w > 350);

    let good_placement = label(
        gpu_temp,
        gpu_mem_used,
        job_type_training == 1,
        throttling == 1,
    );

    TelemetrySample {
        utilization_gpu,
        gpu_temp,
        power_draw_w,
        gpu_mem_used,
        job_type_training,
        throttling,
        good_placement,
    }
}

/// Placement labeling heuristics, most severe condition first.
pub fn label(gpu_temp: i64, gpu_mem_used: i64, is_training: bool, is_throttling: bool) -> i64 {
    if is_throttling {
        return 0; // Never place on a throttling GPU.
    }
    if is_training && gpu_temp > 75 {
        return 0; // Too hot for a heavy job.
    }
    if gpu_mem_used > 22000 {
        return 0; // Not enough memory headroom.
    }
    1
}

/// Render a corpus as CSV with the fixed header order.
pub fn to_csv(samples: &[TelemetrySample]) -> String {
    let mut out = String::with_capacity(samples.len() * 32 + CSV_HEADER.len() + 1);
    out.push_str(CSV_HEADER);
    out.push('\n');
    for s in samples {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            s.utilization_gpu,
            s.gpu_temp,
            s.power_draw_w,
            s.gpu_mem_used,
            s.job_type_training,
            s.throttling,
            s.good_placement
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = generate(100, 42);
        let b = generate(100, 42);
        assert_eq!(a, b);

        let c = generate(100, 43);
        assert_ne!(a, c);
    }

    #[test]
    fn samples_stay_in_range() {
        for s in generate(500, 7) {
            assert!((0..=100).contains(&s.utilization_gpu));
            assert!((35..=94).contains(&s.gpu_temp));
            assert!((1000..24000).contains(&s.gpu_mem_used));
            assert!(s.job_type_training == 0 || s.job_type_training == 1);
            assert!(s.throttling == 0 || s.throttling == 1);
        }
    }

    #[test]
    fn labels_obey_the_heuristics() {
        for s in generate(2000, 42) {
            let expected = label(
                s.gpu_temp,
                s.gpu_mem_used,
                s.job_type_training == 1,
                s.throttling == 1,
            );
            assert_eq!(s.good_placement, expected);
        }
    }

    #[test]
    fn label_rules() {
        assert_eq!(label(45, 256, true, false), 1);
        assert_eq!(label(80, 256, true, false), 0); // Hot training job.
        assert_eq!(label(80, 256, false, false), 1); // Inference tolerates heat.
        assert_eq!(label(45, 23000, false, false), 0); // Memory pressure.
        assert_eq!(label(45, 256, false, true), 0); // Throttling always loses.
    }

    #[test]
    fn corpus_contains_both_labels() {
        let corpus = generate(2000, 42);
        assert!(corpus.iter().any(|s| s.good_placement == 1));
        assert!(corpus.iter().any(|s| s.good_placement == 0));
    }

    #[test]
    fn csv_has_header_and_one_line_per_sample() {
        let corpus = generate(10, 1);
        let csv = to_csv(&corpus);
        let mut lines = csv.lines();

        assert_eq!(lines.next(), Some(CSV_HEADER));
        assert_eq!(lines.count(), 10);
    }

    #[test]
    fn csv_row_matches_sample_fields() {
        let sample = TelemetrySample {
            utilization_gpu: 62,
            gpu_temp: 71,
            power_draw_w: 240,
            gpu_mem_used: 4096,
            job_type_training: 1,
            throttling: 0,
            good_placement: 1,
        };
        let csv = to_csv(&[sample]);
        assert!(csv.ends_with("62,71,240,4096,1,0,1\n"));
    }
}
