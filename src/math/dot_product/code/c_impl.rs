//! FFI bindings for the C variants compiled by `build.rs`.

#[cfg(c_implementation_active)]
mod ffi {
    use libc::size_t;
    use std::os::raw::c_float;

    extern "C" {
        pub fn dot_product_c_original(a: *const c_float, b: *const c_float, len: size_t) -> c_float;
        pub fn dot_product_c_unrolled4(a: *const c_float, b: *const c_float, len: size_t)
            -> c_float;
    }
}

/// Whether the C variants were compiled into this build
pub const C_IMPL_AVAILABLE: bool = cfg!(c_implementation_active);

/// C reference loop
#[cfg(c_implementation_active)]
pub fn dot_product_c_original(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");
    // SAFETY: both pointers are valid for a.len() reads
    unsafe { ffi::dot_product_c_original(a.as_ptr(), b.as_ptr(), a.len()) }
}

/// C loop with 4 accumulators
#[cfg(c_implementation_active)]
pub fn dot_product_c_unrolled4(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have the same length");
    // SAFETY: both pointers are valid for a.len() reads
    unsafe { ffi::dot_product_c_unrolled4(a.as_ptr(), b.as_ptr(), a.len()) }
}
