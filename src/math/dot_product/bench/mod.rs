//! Measurable closures for dot product variants.

use std::hint::black_box;
use std::sync::Arc;

use super::code::DotProductFn;
use crate::utils::bench::Measurement;
use crate::utils::timer::{measure, Variant};
use crate::utils::VariantInfo;

/// Time `iterations` calls of `func(a, b)` in one region.
///
/// Returns the per-call average and the last result.
pub fn timed_batch(func: DotProductFn, a: &[f32], b: &[f32], iterations: usize) -> (Measurement, f32) {
    let iterations = iterations.max(1);

    let (total, result) = measure!({
        let mut result = 0.0f32;
        for _ in 0..iterations {
            result = black_box(func(black_box(a), black_box(b)));
        }
        result
    });

    (total.div_f64(iterations as f64), result)
}

/// Wrap a variant and its shared inputs into a [`Variant`] for the timer.
pub fn variant_closure(
    info: VariantInfo<DotProductFn>,
    a: Arc<Vec<f32>>,
    b: Arc<Vec<f32>>,
    iterations: usize,
) -> Variant<'static> {
    let func = info.function;
    Variant {
        name: info.name,
        description: info.description,
        run: Box::new(move || {
            let (per_call, result) = timed_batch(func, &a, &b, iterations);
            (per_call, Some(result as f64))
        }),
    }
}
