//! aarch64 NEON implementation.
//!
//! NEON is mandatory on aarch64. Uses fused multiply-add over 4 lanes and a
//! single horizontal add at the end.

use std::arch::aarch64::*;

/// Dot product with NEON `vfmaq_f32` / `vaddvq_f32`.
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn dot_product_aarch64_neon(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    let len = a.len();
    let chunks = len / 4;

    // SAFETY: NEON is always present on aarch64; every load reads 4 floats
    // starting at idx with idx + 4 <= len
    let mut result = unsafe {
        let mut acc = vdupq_n_f32(0.0);

        for i in 0..chunks {
            let idx = i * 4;
            let a_vec = vld1q_f32(a.as_ptr().add(idx));
            let b_vec = vld1q_f32(b.as_ptr().add(idx));
            acc = vfmaq_f32(acc, a_vec, b_vec);
        }

        vaddvq_f32(acc)
    };

    let base = chunks * 4;
    result += a[base..]
        .iter()
        .zip(&b[base..])
        .map(|(x, y)| x * y)
        .sum::<f32>();

    result
}
