//! # Dot Product Algorithm
//!
//! The dot product (also known as scalar product) computes the sum of products
//! of corresponding elements in two vectors:
//!
//! `dot(a, b) = Σ(a[i] * b[i])`
//!
//! ## Optimization Strategies
//!
//! - **Loop unrolling**: independent accumulators hide FP add latency
//! - **SIMD**: SSE2 / AVX2 / NEON process 4-8 floats per instruction
//! - **FMA**: fused multiply-add where the target enables it
//! - **Library**: nalgebra's own kernel as the third-party baseline

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use std::sync::Arc;

use crate::error::{BenchError, BenchResult};
use crate::registry::AlgorithmRunner;
use crate::utils::bench::{random_vector, seeded_rng};
use crate::utils::timer::Variant;

/// Length used by [`DotProductRunner::verify`]; odd so every remainder path runs
pub const VERIFY_LEN: usize = 1023;

/// Seed used by [`DotProductRunner::verify`]
pub const VERIFY_SEED: u64 = 0x5eed;

/// Absolute tolerance against the reference; summation order changes the low bits
pub const VERIFY_TOLERANCE: f32 = 1e-3;

/// Runner for the dot product algorithm
pub struct DotProductRunner;

impl AlgorithmRunner for DotProductRunner {
    fn name(&self) -> &'static str {
        "dot_product"
    }

    fn description(&self) -> &'static str {
        "Computes the sum of products of corresponding vector elements"
    }

    fn category(&self) -> &'static str {
        "math"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn variant_closures(&self, size: usize, iterations: usize, seed: u64) -> Vec<Variant<'static>> {
        let mut rng = seeded_rng(seed);
        let a = Arc::new(random_vector(&mut rng, size));
        let b = Arc::new(random_vector(&mut rng, size));

        code::available_variants()
            .into_iter()
            .map(|v| bench::variant_closure(v, Arc::clone(&a), Arc::clone(&b), iterations))
            .collect()
    }

    fn verify(&self) -> BenchResult<()> {
        let mut rng = seeded_rng(VERIFY_SEED);
        let a = random_vector(&mut rng, VERIFY_LEN);
        let b = random_vector(&mut rng, VERIFY_LEN);

        let variants = code::available_variants();
        let reference = variants
            .iter()
            .find(|v| v.name == REFERENCE_VARIANT)
            .ok_or(BenchError::MissingReference(REFERENCE_VARIANT))?;

        let expected = checked_dot(reference.function, &a, &b)?;

        for variant in variants.iter().filter(|v| v.name != REFERENCE_VARIANT) {
            let actual = checked_dot(variant.function, &a, &b)?;
            let diff = (actual - expected).abs();

            if diff > VERIFY_TOLERANCE {
                return Err(BenchError::Verification {
                    variant: variant.name,
                    expected,
                    actual,
                    diff,
                });
            }
            tracing::debug!(variant = variant.name, diff, "variant verified");
        }

        tracing::info!(variants = variants.len(), "dot_product variants verified");
        Ok(())
    }
}
