//! Benchmark orchestration and CSV export.

use crate::registry::{AlgorithmRunner, BenchmarkResult};
use crate::utils::timer::{measure_variants, TimingConfig};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Raw timing data for a single variant (used for CSV export)
#[derive(Clone, Debug)]
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub result_sample: Option<f64>,
}

/// Results of [`run_algorithms`], indexed `[algorithm][size]`.
#[derive(Debug, Default)]
pub struct GroupedResults {
    pub results: Vec<Vec<Vec<BenchmarkResult>>>,
    pub raw_data: Vec<RawTimingData>,
}

/// Benchmark every algorithm at every size.
///
/// `seed` drives input generation; the same seed gives the same inputs.
pub fn run_algorithms(
    algorithms: &[&dyn AlgorithmRunner],
    sample_sizes: &[usize],
    seed: u64,
    config: &TimingConfig,
) -> GroupedResults {
    let mut grouped = GroupedResults::default();

    for algo in algorithms {
        let mut per_size = Vec::with_capacity(sample_sizes.len());

        for &size in sample_sizes {
            info!("benchmarking {} at size {}", algo.name(), size);
            let closures = algo.get_variant_closures(size, seed);
            if closures.is_empty() {
                debug!("{} skips size {}", algo.name(), size);
            }
            let results = measure_variants(closures, config);

            grouped.raw_data.extend(results.iter().map(|r| RawTimingData {
                algo_name: algo.name().to_string(),
                variant_name: r.name.clone(),
                input_size: size,
                avg_nanos: r.avg_nanos_f64 as u64,
                result_sample: r.result_sample,
            }));
            per_size.push(results);
        }

        grouped.results.push(per_size);
    }

    grouped
}

/// Write timing rows as CSV to any writer.
pub fn write_csv<W: Write>(mut out: W, data: &[RawTimingData]) -> std::io::Result<()> {
    writeln!(out, "algorithm,variant,compiler,input_size,avg_time,unit,result")?;

    for entry in data {
        let compiler = if entry.variant_name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            "rustc"
        };

        writeln!(
            out,
            "{},{},{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            compiler,
            entry.input_size,
            entry.avg_nanos,
            crate::utils::bench::unit_name(),
            entry.result_sample.map(|v| v.to_string()).unwrap_or_default()
        )?;
    }

    Ok(())
}

/// Export timing data to CSV file
pub fn export_csv(path: impl AsRef<Path>, data: &[RawTimingData]) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut out = std::io::BufWriter::new(file);
    write_csv(&mut out, data)?;
    out.flush()
}
