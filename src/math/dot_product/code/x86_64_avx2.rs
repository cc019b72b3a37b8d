//! x86_64 AVX2 implementation.
//!
//! Compiled only when the target enables AVX2 (e.g. `-C target-cpu=native`).
//! Processes 8 f32 values per iteration and fuses the multiply-add when FMA
//! is enabled too.

use std::arch::x86_64::*;

/// Dot product with AVX2 intrinsics over 256-bit registers.
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn dot_product_x86_64_avx2(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    let len = a.len();
    let chunks = len / 8;

    // SAFETY: this module is only compiled with target_feature = "avx2";
    // every load reads 8 floats starting at idx with idx + 8 <= len
    let mut result = unsafe {
        let mut sum_vec = _mm256_setzero_ps();

        for i in 0..chunks {
            let idx = i * 8;
            let a_vec = _mm256_loadu_ps(a.as_ptr().add(idx));
            let b_vec = _mm256_loadu_ps(b.as_ptr().add(idx));

            #[cfg(target_feature = "fma")]
            {
                sum_vec = _mm256_fmadd_ps(a_vec, b_vec, sum_vec);
            }
            #[cfg(not(target_feature = "fma"))]
            {
                sum_vec = _mm256_add_ps(sum_vec, _mm256_mul_ps(a_vec, b_vec));
            }
        }

        // [a..h] -> [a+e, b+f, c+g, d+h] -> scalar
        let hi = _mm256_extractf128_ps(sum_vec, 1);
        let lo = _mm256_castps256_ps128(sum_vec);
        let sum128 = _mm_add_ps(lo, hi);

        let shuf = _mm_movehdup_ps(sum128);
        let sums = _mm_add_ps(sum128, shuf);
        let shuf2 = _mm_movehl_ps(sums, sums);
        _mm_cvtss_f32(_mm_add_ss(sums, shuf2))
    };

    let base = chunks * 8;
    result += a[base..]
        .iter()
        .zip(&b[base..])
        .map(|(x, y)| x * y)
        .sum::<f32>();

    result
}
