//! Utility modules for measurement and reporting.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

pub use bench::{compute_stats, elapsed, now, random_vector, seeded_rng, time_seed};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{calculate_median, measure_variants, TimingConfig, Variant, VariantResult};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// One implementation of an algorithm.
/// Generic over F, the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier (e.g., "original", "x86_64-avx2")
    pub name: &'static str,
    pub description: &'static str,
    pub function: F,
}
