//! Dot product implementations.
//!
//! Every variant has the signature [`DotProductFn`] and panics when the two
//! slices differ in length.

mod c_impl;
mod linalg;
mod original;
mod unrolled;

#[cfg(target_arch = "aarch64")]
mod aarch64_neon;
#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
mod x86_64_avx2;
#[cfg(target_arch = "x86_64")]
mod x86_64_sse2;

#[cfg(c_implementation_active)]
pub use c_impl::{dot_product_c_original, dot_product_c_unrolled4};
pub use c_impl::C_IMPL_AVAILABLE;
pub use linalg::dot_product_nalgebra;
pub use original::dot_product_original;
pub use unrolled::{dot_product_unrolled4, dot_product_unrolled8};

#[cfg(target_arch = "aarch64")]
pub use aarch64_neon::dot_product_aarch64_neon;
#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub use x86_64_avx2::dot_product_x86_64_avx2;
#[cfg(target_arch = "x86_64")]
pub use x86_64_sse2::dot_product_x86_64_sse2;

use crate::error::{ensure_same_len, BenchResult};
use crate::utils::VariantInfo;

/// Dot product function signature
pub type DotProductFn = fn(&[f32], &[f32]) -> f32;

/// Name of the reference variant
pub const REFERENCE_VARIANT: &str = "original";

/// Get all variants available on the current target
pub fn available_variants() -> Vec<VariantInfo<DotProductFn>> {
    let mut variants: Vec<VariantInfo<DotProductFn>> = vec![
        VariantInfo {
            name: REFERENCE_VARIANT,
            description: "Iterator zip/map/sum reference implementation",
            function: dot_product_original,
        },
        VariantInfo {
            name: "unrolled4",
            description: "Scalar loop with 4 independent accumulators",
            function: dot_product_unrolled4,
        },
        VariantInfo {
            name: "unrolled8",
            description: "Scalar loop with 8 independent accumulators",
            function: dot_product_unrolled8,
        },
        VariantInfo {
            name: "nalgebra",
            description: "nalgebra DVectorView::dot",
            function: dot_product_nalgebra,
        },
    ];

    #[cfg(target_arch = "x86_64")]
    variants.push(VariantInfo {
        name: "x86_64-sse2",
        description: "x86_64 with SSE2 SIMD intrinsics",
        function: dot_product_x86_64_sse2,
    });

    #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
    variants.push(VariantInfo {
        name: "x86_64-avx2",
        description: "x86_64 with AVX2 SIMD intrinsics",
        function: dot_product_x86_64_avx2,
    });

    #[cfg(target_arch = "aarch64")]
    variants.push(VariantInfo {
        name: "aarch64-neon",
        description: "aarch64 with NEON fused multiply-add",
        function: dot_product_aarch64_neon,
    });

    #[cfg(c_implementation_active)]
    {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C reference loop",
            function: dot_product_c_original,
        });
        variants.push(VariantInfo {
            name: "c-unrolled4",
            description: "C loop with 4 accumulators",
            function: dot_product_c_unrolled4,
        });
    }

    variants
}

/// Call `f` after checking the lengths instead of letting it panic.
pub fn checked_dot(f: DotProductFn, a: &[f32], b: &[f32]) -> BenchResult<f32> {
    ensure_same_len(a.len(), b.len())?;
    Ok(f(a, b))
}
