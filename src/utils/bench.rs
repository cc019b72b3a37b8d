//! Shared benchmark utilities.
//!
//! Measurements are wall-clock durations read from the monotonic
//! [`Instant`] clock.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::{Duration, Instant};

/// Measurement value type
pub type Measurement = Duration;

/// Read the monotonic clock
#[inline(always)]
pub fn now() -> Instant {
    Instant::now()
}

/// Elapsed measurement since `start`
#[inline(always)]
pub fn elapsed(start: Instant) -> Measurement {
    start.elapsed()
}

/// Format a measurement with an adaptive unit (ns, µs, ms, s)
pub fn format_measurement(m: Measurement) -> String {
    let nanos = m.as_nanos() as f64;
    if nanos < 1_000.0 {
        format!("{:.1} ns", nanos)
    } else if nanos < 1_000_000.0 {
        format!("{:.2} µs", nanos / 1e3)
    } else if nanos < 1_000_000_000.0 {
        format!("{:.2} ms", nanos / 1e6)
    } else {
        format!("{:.3} s", nanos / 1e9)
    }
}

/// Calculate standard deviation from a list of durations
pub fn calculate_std_dev(times: &[Duration], mean: Duration) -> Duration {
    if times.len() < 2 {
        return Duration::ZERO;
    }

    let mean_ns = mean.as_nanos() as f64;
    let variance: f64 = times
        .iter()
        .map(|t| {
            let diff = t.as_nanos() as f64 - mean_ns;
            diff * diff
        })
        .sum::<f64>()
        / (times.len() - 1) as f64;

    Duration::from_nanos(variance.sqrt() as u64)
}

/// Compute (avg, min, max, std_dev) from a list of durations
pub fn compute_stats(times: &[Duration]) -> (Duration, Duration, Duration, Duration) {
    let (Some(&min), Some(&max)) = (times.iter().min(), times.iter().max()) else {
        return (
            Duration::ZERO,
            Duration::ZERO,
            Duration::ZERO,
            Duration::ZERO,
        );
    };

    let total: Duration = times.iter().sum();
    let avg = total / times.len() as u32;
    let std_dev = calculate_std_dev(times, avg);

    (avg, min, max, std_dev)
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Seeded PRNG for reproducible benchmark inputs
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Fill a vector of `len` values uniformly drawn from [-1.0, 1.0)
pub fn random_vector<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<f32> {
    (0..len).map(|_| rng.random_range(-1.0f32..1.0)).collect()
}

/// Shuffle a slice with a seeded RNG
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    slice.shuffle(&mut seeded_rng(seed));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_stats_empty() {
        let (avg, min, max, std_dev) = compute_stats(&[]);
        assert_eq!(avg, Duration::ZERO);
        assert_eq!(min, Duration::ZERO);
        assert_eq!(max, Duration::ZERO);
        assert_eq!(std_dev, Duration::ZERO);
    }

    #[test]
    fn test_compute_stats() {
        let times = [
            Duration::from_nanos(10),
            Duration::from_nanos(20),
            Duration::from_nanos(30),
        ];
        let (avg, min, max, std_dev) = compute_stats(&times);
        assert_eq!(avg, Duration::from_nanos(20));
        assert_eq!(min, Duration::from_nanos(10));
        assert_eq!(max, Duration::from_nanos(30));
        assert_eq!(std_dev, Duration::from_nanos(10));
    }

    #[test]
    fn test_random_vector_is_reproducible() {
        let a = random_vector(&mut seeded_rng(7), 100);
        let b = random_vector(&mut seeded_rng(7), 100);
        assert_eq!(a, b);
        assert!(a.iter().all(|v| (-1.0..1.0).contains(v)));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut values: Vec<u32> = (0..50).collect();
        shuffle(&mut values, 42);
        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_format_measurement_units() {
        assert_eq!(format_measurement(Duration::from_nanos(500)), "500.0 ns");
        assert_eq!(format_measurement(Duration::from_nanos(1_500)), "1.50 µs");
        assert_eq!(format_measurement(Duration::from_micros(2_500)), "2.50 ms");
    }
}
