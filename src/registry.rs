//! Algorithm registry for the comparison CLI.
//!
//! Each algorithm exposes its variants as ready-to-measure closures; the
//! runner in [`crate::utils::timer`] handles warmup, ordering and statistics.

use crate::error::{BenchError, BenchResult};
use crate::utils::timer::Variant;

/// Trait that all algorithm benchmarkers must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "dot_product")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "math")
    fn category(&self) -> &'static str;

    /// Names of the variants available on this target
    fn available_variants(&self) -> Vec<&'static str>;

    /// Build one measurable closure per variant over inputs of `size`
    /// elements generated from `seed`. Each closure times `iterations` calls
    /// and reports the per-call average.
    fn variant_closures(&self, size: usize, iterations: usize, seed: u64) -> Vec<Variant<'static>>;

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> BenchResult<()>;
}

/// Registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// Find algorithm by name, or fail listing the registered ones
    pub fn get(&self, name: &str) -> BenchResult<&dyn AlgorithmRunner> {
        self.find(name).ok_or_else(|| BenchError::UnknownAlgorithm {
            name: name.to_string(),
            available: self.list_names().join(", "),
        })
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();
    registry.register(crate::math::dot_product::DotProductRunner);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_dot_product() {
        let registry = build_registry();
        assert_eq!(registry.list_names(), ["dot_product"]);
        let algo = registry.find("dot_product").unwrap();
        assert_eq!(algo.category(), "math");
        assert!(algo.available_variants().contains(&"original"));
    }

    #[test]
    fn test_get_unknown() {
        let registry = build_registry();
        let err = registry.get("sort").err().unwrap();
        assert_eq!(
            err.to_string(),
            "algorithm 'sort' not found (available: dot_product)"
        );
    }
}
