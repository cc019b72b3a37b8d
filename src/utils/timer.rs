//! Multi-variant timing for the comparison runner.
//!
//! - Warm-up of every variant before measurement
//! - Randomized execution order across variants to avoid ordering bias
//! - CPU pinning while a sample is taken
//! - Raw samples reduced to summary statistics per variant

use std::hint::black_box;
use std::time::Duration;

use super::bench::{shuffle, time_seed, Measurement};
pub use super::cpu_affinity::CpuPinGuard;

/// Time an expression, returning `(elapsed, value)`.
macro_rules! measure {
    ($e:expr) => {{
        let start = $crate::utils::bench::now();
        let value = ::std::hint::black_box($e);
        ($crate::utils::bench::elapsed(start), value)
    }};
}
pub(crate) use measure;

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin once before all measurements
    Global,
    /// Pin/unpin around each sample
    #[default]
    PerExecution,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup calls before measurement (default: 10)
    pub warmup_iterations: usize,
    /// CPU pinning strategy (default: PerExecution)
    pub pin_strategy: PinStrategy,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
        }
    }
}

/// A variant to be measured
pub struct Variant<'a> {
    /// Unique name of the variant
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Takes one sample: returns (per-call measurement, optional result value).
    /// Timing happens inside the closure so the boxed call is not measured.
    pub run: Box<dyn FnMut() -> (Measurement, Option<f64>) + 'a>,
}

/// Result from measuring a single variant
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    /// Average sample
    pub avg_time: Duration,
    /// Precise average in nanoseconds
    pub avg_nanos_f64: f64,
    pub median_time: Duration,
    pub min_time: Duration,
    pub max_time: Duration,
    pub std_dev: Duration,
    /// Calls per sample
    pub iterations: usize,
    /// Number of samples collected
    pub samples: usize,
    /// Last result value, for cross-variant comparison
    pub result_sample: Option<f64>,
}

/// Measure multiple variants with randomized execution order.
///
/// Returns one [`VariantResult`] per input variant, in input order.
pub fn measure_variants(
    mut variants: Vec<Variant>,
    iterations: usize,
    config: &TimingConfig,
) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    // (variant_idx, sample_idx)
    let mut tasks: Vec<(usize, usize)> = (0..variants.len())
        .flat_map(|v| (0..samples).map(move |s| (v, s)))
        .collect();
    shuffle(&mut tasks, time_seed());
    tracing::debug!(
        variants = variants.len(),
        samples,
        "measuring shuffled schedule"
    );

    let mut measurements: Vec<Vec<Measurement>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<f64>> = vec![None; variants.len()];

    let _global_pin = (config.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    for (variant_idx, _) in tasks {
        let variant = &mut variants[variant_idx];
        let _per_exec_pin =
            (config.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
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
            compute_variant_result(
                variant.name,
                variant.description,
                &times,
                iterations,
                result_sample,
            )
        })
        .collect()
}

/// Compute statistics from raw measurements
fn compute_variant_result(
    name: &'static str,
    description: &'static str,
    measurements: &[Measurement],
    iterations: usize,
    result_sample: Option<f64>,
) -> VariantResult {
    let (avg_time, min_time, max_time, std_dev) = super::bench::compute_stats(measurements);
    let avg_nanos_f64 = if measurements.is_empty() {
        0.0
    } else {
        measurements.iter().map(|m| m.as_nanos() as f64).sum::<f64>() / measurements.len() as f64
    };

    VariantResult {
        name: name.to_string(),
        description: description.to_string(),
        avg_time,
        avg_nanos_f64,
        median_time: calculate_median(measurements),
        min_time,
        max_time,
        std_dev,
        iterations,
        samples: measurements.len(),
        result_sample,
    }
}

/// Calculate median from a slice of durations.
pub fn calculate_median(times: &[Duration]) -> Duration {
    if times.is_empty() {
        return Duration::ZERO;
    }
    let mut sorted: Vec<_> = times.to_vec();
    sorted.sort();
    sorted[sorted.len() / 2]
}
