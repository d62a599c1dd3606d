//! # Linear Search Lab
//!
//! Variations of linear search (forward, reverse, sentinel, range-bounded,
//! recursive) and an insertion sort built from sorted insertion. Each
//! algorithm registers its variants so they can be verified against the
//! reference implementation and timed side by side.

pub mod error;
pub mod registry;
pub mod search;
pub mod sort;
pub mod suite;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::error::{LabError, VerifyError};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
    pub use crate::search::linear_search::{
        linear_search1, linear_search1a, linear_search2, linear_search3, linear_search4,
        linear_search4_all, location_of, reverse_linear_search,
    };
    pub use crate::sort::insertion_sort::{insert_before, insertion_sort, insertion_sort_in_place};
    pub use crate::suite::{run_suite, SuiteReport};
}
