//! Shared measurement primitives.
//!
//! By default (`cpu_cycles` feature), measurements use CPU cycle counters.
//! Use `--features use_time` or `--no-default-features` to use wall-clock
//! time instead.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::time::Duration;

// Cycles if: cpu_cycles is enabled AND use_time is NOT enabled.
// Wall-clock time otherwise.

/// Measurement value type - cycles (u64) or Duration depending on feature
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = Duration;

/// Read current measurement (cycles or time)
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Measurement {
    crate::utils::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> std::time::Instant {
    std::time::Instant::now()
}

/// Calculate elapsed measurement
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Measurement) -> Measurement {
    crate::utils::cycles::read_cycles().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: std::time::Instant) -> Measurement {
    start.elapsed()
}

/// Raw count behind a measurement: cycles, or nanoseconds.
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn to_nanos(m: Measurement) -> u64 {
    m
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn to_nanos(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Get the measurement unit name
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    {
        "cycles"
    }
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Format a statistic for the results table.
///
/// Statistics are stored as `Duration` whatever the unit; in cycle mode the
/// nanosecond count *is* the cycle count.
pub fn format_measurement(d: Duration) -> String {
    #[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
    {
        format!("{} {}", d.as_nanos(), unit_name())
    }
    #[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
    {
        format!("{:?}", d)
    }
}

/// Time an expression, returning `(measurement, value)`.
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = $crate::utils::bench::now();
        let result = $e;
        ($crate::utils::bench::elapsed(start), result)
    }};
}

/// Fisher-Yates shuffle driven by a seeded RNG
pub fn shuffle<T>(slice: &mut [T], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    slice.shuffle(&mut rng);
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}
