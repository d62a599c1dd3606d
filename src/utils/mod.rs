//! Utility modules for benchmarking and execution.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub mod cycles;

pub use bench::{elapsed, now, shuffle, time_seed, Measurement};
pub use cpu_affinity::CpuPinGuard;
pub use runner::{export_csv, run_algorithms, GroupedResults, RawTimingData};
pub use timer::{measure_variants, PinStrategy, TimingConfig, Variant, VariantResult};

/// C compiler name detected at build time
pub const C_COMPILER_NAME: Option<&str> = option_env!("C_COMPILER_NAME");

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "original", "in_place")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}
