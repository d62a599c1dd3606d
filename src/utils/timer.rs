//! Unified timing system for micro-benchmarks.
//!
//! - CPU cycles or wall-clock time (via features)
//! - CPU core pinning for stable measurements
//! - Randomized variant execution to avoid ordering bias

use std::hint::black_box;
use std::time::Duration;
use tracing::debug;

use super::bench::{shuffle, time_seed, to_nanos, Measurement};
use super::cpu_affinity::CpuPinGuard;

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin once before all measurements
    Global,
    /// Pin/unpin around each execution
    #[default]
    PerExecution,
    /// Never pin
    Off,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup calls per variant before measurement (default: 10)
    pub warmup_iterations: usize,
    /// CPU pinning strategy (default: PerExecution)
    pub pin_strategy: PinStrategy,
    /// Seed for the execution schedule; time-based when `None`
    pub schedule_seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
            schedule_seed: None,
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    /// Unique name of the variant
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// One timed execution - returns (measurement, optional result value).
    /// Timing happens inside the closure to eliminate Fn trait overhead.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Result from measuring a single variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    /// Average measurement (cycles are stored as nanoseconds 1:1)
    pub avg_time: Duration,
    /// Precise average as f64
    pub avg_nanos_f64: f64,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Number of samples taken
    pub iterations: usize,
    /// Result of the last execution, for cross-variant comparison
    pub result_sample: Option<f64>,
}

/// Measure multiple variants with randomized execution order.
///
/// 1. Warms up all variants
/// 2. Builds a shuffled `(variant, sample)` schedule
/// 3. Runs it, pinning per `config.pin_strategy`
/// 4. Computes statistics per variant
pub fn measure_variants(mut variants: Vec<Variant<'_>>, config: &TimingConfig) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    let mut tasks: Vec<usize> = (0..variants.len())
        .flat_map(|v| std::iter::repeat(v).take(samples))
        .collect();
    let seed = config.schedule_seed.unwrap_or_else(time_seed);
    shuffle(&mut tasks, seed);
    debug!("measuring {} variants, {} tasks, schedule seed {}", variants.len(), tasks.len(), seed);

    let mut measurements: Vec<Vec<Measurement>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);
    match global_pin.as_ref().map(CpuPinGuard::core_id) {
        Some(Some(core)) => debug!("pinned to core {} for the whole run", core),
        Some(None) => debug!("CPU pinning unavailable, running unpinned"),
        None => {}
    }

    for variant_idx in tasks {
        let variant = &mut variants[variant_idx];
        let _per_exec_pin = (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        let (elapsed_time, result) = (variant.run)();

        measurements[variant_idx].push(elapsed_time);
        result_samples[variant_idx] = result;
    }

    variants
        .into_iter()
        .enumerate()
        .map(|(idx, variant)| {
            let times = std::mem::take(&mut measurements[idx]);
            let result_sample = result_samples[idx].take();
            compute_variant_result(variant.name, variant.description, &times, result_sample)
        })
        .collect()
}

/// Compute statistics from raw measurements
fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    measurements: &[Measurement],
    result_sample: Option<f64>,
) -> VariantResult {
    let mut nanos: Vec<u64> = measurements.iter().map(|m| to_nanos(*m)).collect();
    nanos.sort_unstable();

    let (Some(&min_ns), Some(&max_ns)) = (nanos.first(), nanos.last()) else {
        return VariantResult {
            name: name.to_string(),
            description: description.to_string(),
            avg_time: Duration::ZERO,
            avg_nanos_f64: 0.0,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev: Duration::ZERO,
            iterations: 0,
            result_sample: None,
        };
    };
    let median_ns = nanos[nanos.len() / 2];

    let sum: u64 = nanos.iter().sum();
    let avg_nanos_f64 = sum as f64 / nanos.len() as f64;

    let variance: f64 = nanos
        .iter()
        .map(|&n| {
            let diff = n as f64 - avg_nanos_f64;
            diff * diff
        })
        .sum::<f64>()
        / (nanos.len() - 1).max(1) as f64;

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time: Duration::from_nanos(avg_nanos_f64 as u64),
        avg_nanos_f64,
        median_time: Duration::from_nanos(median_ns),
        min_time: Duration::from_nanos(min_ns),
        max_time: Duration::from_nanos(max_ns),
        std_dev: Duration::from_nanos(variance.sqrt() as u64),
        iterations: nanos.len(),
        result_sample,
    }
}
