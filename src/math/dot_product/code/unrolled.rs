//! Scalar loops unrolled over independent accumulators.
//!
//! Splitting the sum across N accumulators breaks the serial dependency on a
//! single register, so the CPU can keep several multiply-adds in flight.

/// Dot product with 4 accumulators.
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn dot_product_unrolled4(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    let mut sum = [0.0f32; 4];

    let a_chunks = a.chunks_exact(4);
    let b_chunks = b.chunks_exact(4);
    let tail: f32 = a_chunks
        .remainder()
        .iter()
        .zip(b_chunks.remainder())
        .map(|(x, y)| x * y)
        .sum();

    for (x, y) in a_chunks.zip(b_chunks) {
        sum[0] += x[0] * y[0];
        sum[1] += x[1] * y[1];
        sum[2] += x[2] * y[2];
        sum[3] += x[3] * y[3];
    }

    (sum[0] + sum[1]) + (sum[2] + sum[3]) + tail
}

/// Dot product with 8 accumulators.
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn dot_product_unrolled8(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    let mut sum = [0.0f32; 8];

    let a_chunks = a.chunks_exact(8);
    let b_chunks = b.chunks_exact(8);
    let tail: f32 = a_chunks
        .remainder()
        .iter()
        .zip(b_chunks.remainder())
        .map(|(x, y)| x * y)
        .sum();

    for (x, y) in a_chunks.zip(b_chunks) {
        for ((s, x), y) in sum.iter_mut().zip(x).zip(y) {
            *s += x * y;
        }
    }

    let pairs = [sum[0] + sum[4], sum[1] + sum[5], sum[2] + sum[6], sum[3] + sum[7]];
    (pairs[0] + pairs[1]) + (pairs[2] + pairs[3]) + tail
}
