//! Named self-test suite.
//!
//! Each algorithm's `test` module exposes its fixture routines as plain
//! functions. This module lists them by name so that every routine can be run
//! on its own or all together, from `cargo test` or from `search-lab --check`.

use crate::error::VerifyError;
use tracing::{info, warn};

/// One independently runnable test routine.
pub struct SuiteEntry {
    /// Routine name, e.g. `test_linear_search2`.
    pub name: &'static str,
    /// Registry name of the algorithm the routine exercises.
    pub algorithm: &'static str,
    pub run: fn() -> Result<(), VerifyError>,
}

/// Outcome of [`run_suite`].
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub passed: Vec<&'static str>,
    pub failed: Vec<(&'static str, VerifyError)>,
}

impl SuiteReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn total(&self) -> usize {
        self.passed.len() + self.failed.len()
    }
}

/// Every routine, in the order they are defined per algorithm.
pub fn all_entries() -> Vec<SuiteEntry> {
    use crate::search::linear_search::test as search;
    use crate::sort::insertion_sort::test as sort;

    vec![
        SuiteEntry {
            name: "test_linear_search1",
            algorithm: "linear_search",
            run: search::test_linear_search1,
        },
        SuiteEntry {
            name: "test_linear_search1a",
            algorithm: "linear_search",
            run: search::test_linear_search1a,
        },
        SuiteEntry {
            name: "test_reverse_linear_search",
            algorithm: "linear_search",
            run: search::test_reverse_linear_search,
        },
        SuiteEntry {
            name: "test_location_of",
            algorithm: "linear_search",
            run: search::test_location_of,
        },
        SuiteEntry {
            name: "test_linear_search2",
            algorithm: "linear_search",
            run: search::test_linear_search2,
        },
        SuiteEntry {
            name: "test_linear_search3",
            algorithm: "linear_search",
            run: search::test_linear_search3,
        },
        SuiteEntry {
            name: "test_linear_search4",
            algorithm: "linear_search",
            run: search::test_linear_search4,
        },
        SuiteEntry {
            name: "test_insert_before",
            algorithm: "insertion_sort",
            run: sort::test_insert_before,
        },
        SuiteEntry {
            name: "test_insertion_sort",
            algorithm: "insertion_sort",
            run: sort::test_insertion_sort,
        },
    ]
}

/// Run every entry whose name or algorithm equals `filter` (all when `None`).
pub fn run_suite(filter: Option<&str>) -> SuiteReport {
    let mut report = SuiteReport::default();

    for entry in all_entries() {
        if let Some(f) = filter {
            if entry.name != f && entry.algorithm != f {
                continue;
            }
        }

        match (entry.run)() {
            Ok(()) => report.passed.push(entry.name),
            Err(err) => {
                warn!("{} failed: {}", entry.name, err);
                report.failed.push((entry.name, err));
            }
        }
    }

    report
}

pub(crate) fn announce(routine: &str) {
    info!("Calling {} ...", routine);
}

pub(crate) fn passed(routine: &str) {
    info!(" ... {} done: all tests passed", routine);
}

/// Compare one call's result against the fixture.
pub(crate) fn expect_eq<T>(
    routine: &'static str,
    call: impl FnOnce() -> String,
    expected: T,
    actual: T,
) -> Result<(), VerifyError>
where
    T: PartialEq + std::fmt::Debug,
{
    if expected == actual {
        Ok(())
    } else {
        Err(VerifyError::mismatch(routine, call(), expected, actual))
    }
}
