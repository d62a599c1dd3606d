//! CLI for checking and benchmarking the search and sort variants.
//!
//! Usage:
//!   search-lab                  # Benchmark all algorithms
//!   search-lab --list           # List available algorithms
//!   search-lab --check          # Run every self-test routine and verify()
//!   search-lab linear_search    # Benchmark one algorithm
//!   search-lab --help           # Show help

use clap::{Parser, ValueEnum};
use linear_search_lab::error::LabError;
use linear_search_lab::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
use linear_search_lab::suite::{all_entries, run_suite};
use linear_search_lab::tui;
use linear_search_lab::utils::{export_csv, run_algorithms, time_seed, PinStrategy, TimingConfig};
use tracing::{debug, info, warn};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PinArg {
    Global,
    PerExecution,
    Off,
}

impl From<PinArg> for PinStrategy {
    fn from(arg: PinArg) -> Self {
        match arg {
            PinArg::Global => PinStrategy::Global,
            PinArg::PerExecution => PinStrategy::PerExecution,
            PinArg::Off => PinStrategy::Off,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "search-lab", version, about = "Verify and benchmark linear search and insertion sort variants")]
struct Cli {
    /// Name of a specific algorithm to benchmark (omit for all)
    algorithm: Option<String>,

    /// List all available algorithms
    #[arg(short, long)]
    list: bool,

    /// Run the self-test suite (optionally one routine or algorithm) and verify every variant
    #[arg(short, long, value_name = "NAME", num_args = 0..=1, default_missing_value = "")]
    check: Option<String>,

    /// Comma-separated input sizes
    #[arg(long, value_delimiter = ',', default_value = "64,256,1024,4096")]
    sizes: Vec<usize>,

    /// Number of measurement runs per variant
    #[arg(short, long, default_value_t = 30)]
    runs: usize,

    /// Warmup calls per variant before measuring
    #[arg(long, default_value_t = 10)]
    warmup: usize,

    /// Random seed for reproducible inputs and schedule (default: time-based)
    #[arg(long)]
    seed: Option<u64>,

    /// CPU pinning strategy
    #[arg(long, value_enum, default_value_t = PinArg::PerExecution)]
    pin: PinArg,

    /// Export raw timings to CSV
    #[arg(long, value_name = "PATH")]
    csv: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .without_time()
        .init();

    debug!("search-lab started with verbosity level: {}", cli.verbose);

    let registry = build_registry();
    if let Err(err) = run(&cli, &registry) {
        eprintln!("Error: {err}");
        if let LabError::UnknownAlgorithm { .. } = err {
            eprintln!("Use --list to see available algorithms.");
        }
        std::process::exit(1);
    }
}

fn run(cli: &Cli, registry: &AlgorithmRegistry) -> Result<(), LabError> {
    if cli.list {
        tui::print_available_algorithms(registry);
        return Ok(());
    }

    if let Some(filter) = &cli.check {
        let filter = (!filter.is_empty()).then_some(filter.as_str());
        return check(registry, filter);
    }

    let algorithms: Vec<&dyn AlgorithmRunner> = match &cli.algorithm {
        Some(name) => vec![registry.find(name).ok_or_else(|| LabError::UnknownAlgorithm {
            name: name.clone(),
            available: registry.list_names().join(", "),
        })?],
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    let seed = cli.seed.unwrap_or_else(time_seed);
    let config = TimingConfig {
        runs_per_variant: cli.runs,
        warmup_iterations: cli.warmup,
        pin_strategy: cli.pin.into(),
        schedule_seed: cli.seed,
    };
    info!("input seed {}", seed);

    tui::print_header();
    let grouped = run_algorithms(&algorithms, &cli.sizes, seed, &config);

    if let Some(path) = &cli.csv {
        export_csv(path, &grouped.raw_data)?;
        println!("  Raw data exported to: {}", path);
        println!();
    }

    tui::print_grouped_results(&algorithms, &cli.sizes, &grouped);
    println!("Note: Speedup is relative to the 'original' variant.");
    Ok(())
}

/// Run the suite and every runner's `verify()`.
///
/// A filter naming neither a suite routine nor an algorithm is an error, so a
/// mistyped name cannot pass as an empty, successful check.
fn check(registry: &AlgorithmRegistry, filter: Option<&str>) -> Result<(), LabError> {
    let entries = all_entries();
    let selected = |algo: &str| match filter {
        None => true,
        Some(f) => f == algo || entries.iter().any(|e| e.name == f && e.algorithm == algo),
    };
    let runners: Vec<&dyn AlgorithmRunner> = registry
        .all()
        .iter()
        .map(|a| a.as_ref())
        .filter(|a| selected(a.name()))
        .collect();

    let report = run_suite(filter);
    if let Some(name) = filter {
        if report.total() == 0 && runners.is_empty() {
            let mut available: Vec<&str> = entries.iter().map(|e| e.name).collect();
            available.extend(registry.list_names());
            return Err(LabError::UnknownAlgorithm {
                name: name.to_string(),
                available: available.join(", "),
            });
        }
    }

    tui::print_suite_report(&report);
    let mut failed = report.failed.len();

    for algo in runners {
        match algo.verify() {
            Ok(()) => info!("✅ {} variants verified: {}", algo.name(), algo.available_variants().join(", ")),
            Err(err) => {
                warn!("❌ {}: {}", algo.name(), err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(LabError::Verification { failed });
    }
    Ok(())
}
