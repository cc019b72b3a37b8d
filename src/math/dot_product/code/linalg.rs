//! nalgebra-backed variant.

use nalgebra::DVectorView;

/// Dot product through `nalgebra::Matrix::dot` on borrowed views.
///
/// # Panics
/// Panics if the vectors have different lengths.
pub fn dot_product_nalgebra(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");

    let x = DVectorView::from_slice(a, a.len());
    let y = DVectorView::from_slice(b, b.len());
    x.dot(&y)
}
