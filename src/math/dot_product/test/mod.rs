//! Correctness tests for dot product implementations.

#[cfg(test)]
mod tests {
    use crate::math::dot_product::code::*;
    use crate::math::dot_product::DotProductRunner;
    use crate::registry::AlgorithmRunner;
    use crate::utils::bench::{random_vector, seeded_rng};
    use crate::BenchError;

    const EPSILON: f32 = 1e-5;

    fn assert_close(a: f32, b: f32, msg: &str) {
        let diff = (a - b).abs();
        assert!(
            diff < EPSILON,
            "{}: expected {}, got {}, diff = {}",
            msg,
            b,
            a,
            diff
        );
    }

    #[test]
    fn test_original_basic() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let b = [5.0, 6.0, 7.0, 8.0];
        // 5 + 12 + 21 + 32
        assert_close(dot_product_original(&a, &b), 70.0, "original basic");
    }

    #[test]
    fn test_original_squares() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        assert_close(dot_product_original(&x, &x), 140.0, "original squares");
    }

    #[test]
    fn test_original_empty() {
        let a: [f32; 0] = [];
        assert_close(dot_product_original(&a, &a), 0.0, "original empty");
    }

    #[test]
    fn test_every_variant_matches_reference_on_small_lengths() {
        // lengths around every unroll/SIMD width, including empty and the pure-tail cases
        for len in [0, 1, 3, 4, 5, 7, 8, 9, 15, 16, 17, 33] {
            let a: Vec<f32> = (0..len).map(|i| i as f32 * 0.5).collect();
            let b: Vec<f32> = (0..len).map(|i| 1.0 - i as f32 * 0.25).collect();
            let expected = dot_product_original(&a, &b);

            for variant in available_variants() {
                let actual = (variant.function)(&a, &b);
                assert!(
                    (actual - expected).abs() <= 1e-3 * expected.abs().max(1.0),
                    "variant '{}' at len {}: expected {}, got {}",
                    variant.name,
                    len,
                    expected,
                    actual
                );
            }
        }
    }

    #[test]
    fn test_unrolled_handles_tail() {
        let a = [1.0; 11];
        let b = [2.0; 11];
        assert_close(dot_product_unrolled4(&a, &b), 22.0, "unrolled4 tail");
        assert_close(dot_product_unrolled8(&a, &b), 22.0, "unrolled8 tail");
    }

    #[test]
    fn test_nalgebra_matches_reference() {
        let mut rng = seeded_rng(11);
        let a = random_vector(&mut rng, 4096);
        let b = random_vector(&mut rng, 4096);
        let diff = (dot_product_nalgebra(&a, &b) - dot_product_original(&a, &b)).abs();
        assert!(diff < 1e-3, "nalgebra diff {}", diff);
    }

    #[test]
    fn test_length_mismatch_panics_for_every_variant() {
        for variant in available_variants() {
            let result = std::panic::catch_unwind(|| (variant.function)(&[1.0, 2.0], &[1.0]));
            assert!(result.is_err(), "variant '{}' accepted mismatched lengths", variant.name);
        }
    }

    #[test]
    fn test_checked_dot_reports_mismatch() {
        let err = checked_dot(dot_product_original, &[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, BenchError::LengthMismatch { left: 2, right: 1 }));
        assert_eq!(checked_dot(dot_product_original, &[2.0], &[4.0]).unwrap(), 8.0);
    }

    #[test]
    fn test_reference_is_listed_first() {
        let variants = available_variants();
        assert_eq!(variants[0].name, REFERENCE_VARIANT);
        let names: Vec<_> = variants.iter().map(|v| v.name).collect();
        assert!(names.contains(&"unrolled4"));
        assert!(names.contains(&"unrolled8"));
        assert!(names.contains(&"nalgebra"));
        assert_eq!(names.iter().any(|n| n.starts_with("c-")), C_IMPL_AVAILABLE);
    }

    #[test]
    fn test_c_variants_follow_build_outcome() {
        // build.rs sets the cfg and the compiler name together, or neither
        assert_eq!(crate::utils::C_COMPILER_NAME.is_some(), C_IMPL_AVAILABLE);
        let c_count = available_variants()
            .iter()
            .filter(|v| v.name.starts_with("c-"))
            .count();
        assert_eq!(c_count, if C_IMPL_AVAILABLE { 2 } else { 0 });
    }

    #[test]
    fn test_unrolled8_and_simd_tails() {
        // one full block plus every possible tail length
        for len in 8..16 {
            let a: Vec<f32> = (0..len).map(|i| i as f32).collect();
            let b = vec![1.0f32; len];
            let expected = (len * (len - 1) / 2) as f32;
            for variant in available_variants() {
                assert_close((variant.function)(&a, &b), expected, variant.name);
            }
        }
    }

    #[test]
    fn test_runner_verify() {
        DotProductRunner.verify().unwrap();
    }

    #[test]
    fn test_runner_closures_share_inputs() {
        let mut closures = DotProductRunner.variant_closures(257, 2, 99);
        assert_eq!(closures.len(), available_variants().len());

        let results: Vec<f64> = closures
            .iter_mut()
            .map(|v| (v.run)().1.unwrap())
            .collect();
        for r in &results[1..] {
            assert!((r - results[0]).abs() < 1e-3);
        }
    }
}
