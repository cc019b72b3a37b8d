//! Terminal output for the comparison CLI.

use crate::registry::{AlgorithmRegistry, AlgorithmRunner};
use crate::utils::bench::format_measurement;
use crate::utils::timer::VariantResult;
use terminal_size::{terminal_size, Width};

/// Current terminal width, clamped to [40, 200]
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Sorting priority for a variant.
/// Order: original (0), Rust (1), C (2), SIMD (3)
fn variant_sort_key(result: &VariantResult) -> (u8, String) {
    let name = result.name.to_lowercase();

    if name == "original" {
        (0, String::new())
    } else if name.contains("sse") || name.contains("avx") || name.contains("neon") {
        (3, name)
    } else if name.starts_with("c-") {
        (2, name)
    } else {
        (1, name)
    }
}

/// Sort variants: original first, then Rust, C, SIMD
pub fn sort_variants(results: &mut [VariantResult]) {
    results.sort_by_key(variant_sort_key);
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Relative error of `value` against `baseline` (absolute error near zero)
fn relative_error(value: Option<f64>, baseline: Option<f64>) -> f64 {
    match (value, baseline) {
        (Some(v), Some(b)) => {
            let diff = (v - b).abs();
            if b.abs() > 1e-9 {
                diff / b.abs()
            } else {
                diff
            }
        }
        _ => 0.0,
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let name_line = format!("Algorithm: {}", algo.name());
    let cat_line = format!("Category:  {}", algo.category());
    let desc_line = algo.description();
    let var_line = format!("Variants: {}", algo.available_variants().join(", "));

    let content_width = [
        name_line.chars().count(),
        cat_line.chars().count(),
        desc_line.chars().count(),
        var_line.chars().count(),
    ]
    .into_iter()
    .max()
    .unwrap_or(60)
    .min(max_content_width);

    let border = "─".repeat(content_width + 2);
    let row = |s: &str| println!("│ {:<width$} │", truncate(s, content_width), width = content_width);

    println!("┌{}┐", border);
    row(&name_line);
    row(&cat_line);
    row(desc_line);
    println!("├{}┤", border);
    row(&var_line);
    println!("└{}┘", border);
    println!();
}

/// Print the results table for one input size.
///
/// Speedup and relative error are computed against the first row.
pub fn print_results_table(results: &[VariantResult], size: usize, iterations: usize) {
    let Some(baseline) = results.first() else {
        return;
    };

    // 12+12+12+9+9+10 columns, 6 separators, 2 indent
    let fixed_width = 72;
    let variant_col_width = get_term_width().saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + 64 + 6;

    let baseline_time = baseline.avg_nanos_f64;

    println!(
        "  Size: {} ({} samples x {} calls)",
        size, baseline.samples, iterations
    );
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>12} {:>12} {:>12} {:>9} {:>9} {:>10}",
        "Variant",
        "Average",
        "Min",
        "Max",
        "Speedup",
        "CV",
        "Rel. Error",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let avg_ns = result.avg_nanos_f64;
        let speedup = if avg_ns > 0.0 { baseline_time / avg_ns } else { 0.0 };
        let cv = if avg_ns > 0.0 {
            result.std_dev.as_nanos() as f64 / avg_ns
        } else {
            0.0
        };

        let display_name = match (result.name.starts_with("c-"), crate::utils::C_COMPILER_NAME) {
            (true, Some(c)) => format!("{} ({})", result.name, c),
            _ => result.name.clone(),
        };

        println!(
            "  {:<v_width$} {:>12} {:>12} {:>12} {:>8.2}x {:>8.2}% {:>10.2e}",
            truncate(&display_name, variant_col_width),
            format_measurement(result.avg_time),
            format_measurement(result.min_time),
            format_measurement(result.max_time),
            speedup,
            cv * 100.0,
            relative_error(result.result_sample, baseline.result_sample),
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Dot Product Benchmarks ";
    let padding = term_width.saturating_sub(title.len()) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!(
        "║{}{}{}║",
        " ".repeat(padding),
        title,
        " ".repeat(right_padding)
    );
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn result(name: &str) -> VariantResult {
        VariantResult {
            name: name.to_string(),
            description: String::new(),
            avg_time: Duration::ZERO,
            avg_nanos_f64: 0.0,
            median_time: Duration::ZERO,
            min_time: Duration::ZERO,
            max_time: Duration::ZERO,
            std_dev: Duration::ZERO,
            iterations: 1,
            samples: 1,
            result_sample: None,
        }
    }

    #[test]
    fn test_sort_variants() {
        let mut results = vec![
            result("x86_64-avx2"),
            result("c-original"),
            result("unrolled8"),
            result("original"),
            result("nalgebra"),
        ];
        sort_variants(&mut results);
        let names: Vec<_> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            ["original", "nalgebra", "unrolled8", "c-original", "x86_64-avx2"]
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long name", 8), "a ver...");
    }

    #[test]
    fn test_relative_error() {
        assert_eq!(relative_error(Some(2.0), Some(2.0)), 0.0);
        assert!((relative_error(Some(2.2), Some(2.0)) - 0.1).abs() < 1e-9);
        assert_eq!(relative_error(None, Some(1.0)), 0.0);
    }
}
