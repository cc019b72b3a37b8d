//! Side-by-side comparison of the dot product variants.
//!
//! Usage:
//!   dot-compare                       # Run every algorithm
//!   dot-compare --list                # List available algorithms
//!   dot-compare dot_product           # Run one algorithm
//!   dot-compare --sizes 1024,1048576  # Custom input sizes

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use dot_bench::registry::{build_registry, AlgorithmRunner};
use dot_bench::tui;
use dot_bench::utils::runner::{export_csv, RawTimingData};
use dot_bench::utils::timer::{measure_variants, PinStrategy, TimingConfig};
use dot_bench::utils::time_seed;

#[derive(Parser, Debug)]
#[command(name = "dot-compare", about = "Compare dot product implementations")]
struct Cli {
    /// Algorithm to run (omit for all)
    algorithm: Option<String>,

    /// List available algorithms and exit
    #[arg(short, long)]
    list: bool,

    /// Comma-separated input sizes
    #[arg(long, value_delimiter = ',', default_values_t = [1024usize, 16384, 1024 * 1024])]
    sizes: Vec<usize>,

    /// Calls timed together in one sample
    #[arg(long = "iter", default_value_t = 100)]
    iterations: usize,

    /// Samples per variant
    #[arg(short, long, default_value_t = 30)]
    runs: usize,

    /// Untimed warmup samples per variant
    #[arg(long, default_value_t = 3)]
    warmup: usize,

    /// Seed for input data (default: time-based)
    #[arg(long)]
    seed: Option<u64>,

    /// CPU pinning strategy
    #[arg(long, value_enum, default_value_t = Pin::PerExecution)]
    pin: Pin,

    /// Export raw timings to CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Pin {
    Global,
    PerExecution,
}

impl From<Pin> for PinStrategy {
    fn from(value: Pin) -> Self {
        match value {
            Pin::Global => PinStrategy::Global,
            Pin::PerExecution => PinStrategy::PerExecution,
        }
    }
}

fn run_algorithm(
    algo: &dyn AlgorithmRunner,
    cli: &Cli,
    config: &TimingConfig,
    seed: u64,
    raw: &mut Vec<RawTimingData>,
) -> anyhow::Result<()> {
    tui::print_algo_info_box(algo);

    algo.verify()
        .with_context(|| format!("verification failed for '{}'", algo.name()))?;
    println!("  All variants agree with the reference.");
    println!();

    for &size in &cli.sizes {
        tracing::info!(algorithm = algo.name(), size, "measuring");
        let closures = algo.variant_closures(size, cli.iterations, seed);
        let mut results = measure_variants(closures, cli.iterations, config);

        raw.extend(
            results
                .iter()
                .map(|r| RawTimingData::from_result(algo.name(), size, r)),
        );

        tui::sort_variants(&mut results);
        tui::print_results_table(&results, size, cli.iterations);
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    let _ = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .try_init();

    let registry = build_registry();

    if cli.list {
        tui::print_available_algorithms(&registry);
        return Ok(());
    }

    let algorithms: Vec<&dyn AlgorithmRunner> = match &cli.algorithm {
        Some(name) => vec![registry.get(name)?],
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    let seed = cli.seed.unwrap_or_else(time_seed);
    let config = TimingConfig {
        runs_per_variant: cli.runs,
        warmup_iterations: cli.warmup,
        pin_strategy: cli.pin.into(),
    };
    tracing::info!(
        seed,
        c_variants = dot_bench::math::dot_product::C_IMPL_AVAILABLE,
        "starting comparison"
    );

    tui::print_header();

    let mut raw = Vec::new();
    for algo in algorithms {
        run_algorithm(algo, &cli, &config, seed, &mut raw)?;
    }

    if let Some(path) = &cli.csv {
        export_csv(path, &raw).with_context(|| format!("failed to export {}", path.display()))?;
        println!("  Raw data exported to: {}", path.display());
        println!();
    }

    println!("Note: Speedup is relative to the first variant ('original').");
    Ok(())
}
