//! Error types for the comparison tooling.
//!
//! The timing harness itself has no error taxonomy; these cover verification,
//! lookup and export in the variant comparison path.

use thiserror::Error;

/// Result type used across the library
pub type BenchResult<T> = Result<T, BenchError>;

/// Errors raised while verifying, looking up or exporting benchmarks
#[derive(Error, Debug)]
pub enum BenchError {
    /// Two vectors of different lengths were handed to a dot product
    #[error("vector length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the first vector
        left: usize,
        /// Length of the second vector
        right: usize,
    },

    /// The reference variant used for verification is not registered
    #[error("no '{0}' variant found for reference")]
    MissingReference(&'static str),

    /// A variant disagreed with the reference beyond tolerance
    #[error("variant '{variant}' failed verification: expected {expected}, got {actual}, diff {diff}")]
    Verification {
        /// Name of the failing variant
        variant: &'static str,
        /// Reference result
        expected: f32,
        /// Variant result
        actual: f32,
        /// Absolute difference
        diff: f32,
    },

    /// No algorithm registered under this name
    #[error("algorithm '{name}' not found (available: {available})")]
    UnknownAlgorithm {
        /// Requested name
        name: String,
        /// Comma-separated registered names
        available: String,
    },

    /// I/O failure while exporting results
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fail with [`BenchError::LengthMismatch`] unless both lengths agree.
pub fn ensure_same_len(left: usize, right: usize) -> BenchResult<()> {
    if left == right {
        Ok(())
    } else {
        Err(BenchError::LengthMismatch { left, right })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_same_len() {
        assert!(ensure_same_len(4, 4).is_ok());
        let err = ensure_same_len(4, 5).unwrap_err();
        assert!(matches!(err, BenchError::LengthMismatch { left: 4, right: 5 }));
        assert_eq!(err.to_string(), "vector length mismatch: 4 vs 5");
    }
}
