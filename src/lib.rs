//! # dot-bench
//!
//! Wall-clock micro-benchmark of `f32` dot products over large vectors.
//!
//! The [`harness`] module holds the single timed measurement printed by the
//! `dot-bench` binary. The remaining modules compare alternative dot-product
//! implementations against each other (`dot-compare`).

pub mod error;
pub mod harness;
pub mod math;
pub mod registry;
pub mod utils;

pub use error::{BenchError, BenchResult};

/// Re-export tui from utils
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::harness::{HarnessConfig, HarnessReport, ITERATIONS, VECTOR_LEN};
    pub use crate::math::dot_product;
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
}

#[cfg(test)]
mod tests {
    use crate::registry::build_registry;

    #[test]
    fn test_all_algorithms_registry_verify() {
        let registry = build_registry();
        let algorithms = registry.all();

        assert!(!algorithms.is_empty());

        for algo in algorithms {
            if let Err(e) = algo.verify() {
                panic!("Algorithm '{}' failed verification: {}", algo.name(), e);
            }
        }
    }
}
