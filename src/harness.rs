//! Timing harness for the nalgebra dot product.
//!
//! Allocates two `f32` vectors of [`VECTOR_LEN`] elements, computes their dot
//! product [`ITERATIONS`] times inside a single timed region and reports the
//! mean latency per call together with the last result.
//!
//! The whole loop is timed once and divided afterwards. Timing each call on
//! its own would put a clock read next to every call, which at this
//! granularity skews the average.

use std::hint::black_box;
use std::io::{self, Write};
use std::time::Duration;

use nalgebra::DVector;

use crate::utils::bench::{elapsed, now};

/// Number of elements in each vector (1024 * 1024)
pub const VECTOR_LEN: usize = 1024 * 1024;

/// Number of dot products computed in the timed region
pub const ITERATIONS: usize = 10_000;

/// Parameters of one harness run.
///
/// The `dot-bench` binary always uses [`HarnessConfig::default`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HarnessConfig {
    pub len: usize,
    pub iterations: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            len: VECTOR_LEN,
            iterations: ITERATIONS,
        }
    }
}

/// Outcome of a timed run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HarnessReport {
    /// Time spent in the whole loop
    pub elapsed: Duration,
    /// Number of dot products computed
    pub iterations: usize,
    /// Value returned by the last dot product
    pub result: f32,
}

impl HarnessReport {
    /// Elapsed time in fractional microseconds
    pub fn elapsed_micros(&self) -> f64 {
        self.elapsed.as_nanos() as f64 / 1e3
    }

    /// Mean microseconds per dot product (0 for an empty loop)
    pub fn avg_micros(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed_micros() / self.iterations as f64
    }
}

/// Allocate the two zero-initialised input vectors.
pub fn allocate_vectors(len: usize) -> (DVector<f32>, DVector<f32>) {
    (DVector::zeros(len), DVector::zeros(len))
}

/// Time `iterations` calls of `dot(x, y)` inside one timed region.
///
/// Each call overwrites the result accumulator; the accumulator goes through
/// [`black_box`] so the loop cannot be elided.
pub fn time_iterations<V, F>(x: &V, y: &V, iterations: usize, mut dot: F) -> HarnessReport
where
    V: ?Sized,
    F: FnMut(&V, &V) -> f32,
{
    let mut result = 0.0f32;

    let start = now();
    for _ in 0..iterations {
        result = black_box(dot(black_box(x), black_box(y)));
    }
    let elapsed = elapsed(start);

    HarnessReport {
        elapsed,
        iterations,
        result,
    }
}

/// Allocate the vectors and time the nalgebra dot product.
pub fn run(config: &HarnessConfig) -> HarnessReport {
    let (x, y) = allocate_vectors(config.len);
    tracing::debug!(len = config.len, iterations = config.iterations, "vectors allocated");

    let report = time_iterations(&x, &y, config.iterations, |a, b| a.dot(b));
    tracing::debug!(
        elapsed_us = report.elapsed_micros(),
        avg_us = report.avg_micros(),
        "timed region finished"
    );

    report
}

/// Write the two-line report: `<avg>us` then the last result.
pub fn write_report<W: Write + ?Sized>(report: &HarnessReport, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}us", report.avg_micros())?;
    writeln!(out, "{}", report.result)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HarnessConfig::default();
        assert_eq!(config.len, 1_048_576);
        assert_eq!(config.iterations, 10_000);
    }

    #[test]
    fn test_allocate_vectors_zeroed() {
        let (x, y) = allocate_vectors(16);
        assert_eq!(x.len(), 16);
        assert_eq!(y.len(), 16);
        assert!(x.iter().chain(y.iter()).all(|&v| v == 0.0));
    }

    #[test]
    fn test_avg_micros() {
        let report = HarnessReport {
            elapsed: Duration::from_millis(10),
            iterations: 100,
            result: 0.0,
        };
        assert!((report.elapsed_micros() - 10_000.0).abs() < 1e-9);
        assert!((report.avg_micros() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_avg_micros_no_iterations() {
        let report = HarnessReport {
            elapsed: Duration::from_micros(5),
            iterations: 0,
            result: 0.0,
        };
        assert_eq!(report.avg_micros(), 0.0);
    }

    #[test]
    fn test_time_iterations_keeps_last_result() {
        let x = [1.0f32, 2.0];
        let y = [3.0f32, 4.0];
        let mut calls = 0;
        let report = time_iterations(&x[..], &y[..], 5, |_, _| {
            calls += 1;
            calls as f32
        });
        assert_eq!(calls, 5);
        assert_eq!(report.iterations, 5);
        assert_eq!(report.result, 5.0);
    }

    #[test]
    fn test_run_small_config() {
        let report = run(&HarnessConfig {
            len: 64,
            iterations: 3,
        });
        assert_eq!(report.iterations, 3);
        assert_eq!(report.result, 0.0);
        assert!(report.avg_micros() >= 0.0);
    }

    #[test]
    fn test_write_report_shape() {
        let report = HarnessReport {
            elapsed: Duration::from_micros(250),
            iterations: 10,
            result: 3.5,
        };
        let mut out = Vec::new();
        write_report(&report, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "25us\n3.5\n");
    }
}
