//! x86_64 SSE2 implementation.
//!
//! SSE2 is part of the x86_64 baseline, so this variant is always available
//! on that architecture. Processes 4 f32 values per iteration.

use std::arch::x86_64::*;

/// Dot product with SSE2 intrinsics over 128-bit registers.
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn dot_product_x86_64_sse2(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    let len = a.len();
    let chunks = len / 4;

    // SAFETY: SSE2 is always present on x86_64; every load reads 4 floats
    // starting at idx with idx + 4 <= chunks * 4 <= len
    let mut result = unsafe {
        let mut sum_vec = _mm_setzero_ps();

        for i in 0..chunks {
            let idx = i * 4;
            let a_vec = _mm_loadu_ps(a.as_ptr().add(idx));
            let b_vec = _mm_loadu_ps(b.as_ptr().add(idx));
            sum_vec = _mm_add_ps(sum_vec, _mm_mul_ps(a_vec, b_vec));
        }

        // [a, b, c, d] -> a+b+c+d using SSE2 shuffles only
        let hi = _mm_movehl_ps(sum_vec, sum_vec); // [c, d, c, d]
        let sums = _mm_add_ps(sum_vec, hi); // [a+c, b+d, _, _]
        let shuf = _mm_shuffle_ps(sums, sums, 0b01); // [b+d, _, _, _]
        _mm_cvtss_f32(_mm_add_ss(sums, shuf))
    };

    let base = chunks * 4;
    result += a[base..]
        .iter()
        .zip(&b[base..])
        .map(|(x, y)| x * y)
        .sum::<f32>();

    result
}
