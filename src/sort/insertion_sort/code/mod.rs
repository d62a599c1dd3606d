//! Insertion sort implementations.

mod in_place;
mod original;

pub use in_place::{insertion_sort_copy, insertion_sort_in_place, std_stable_sort};
pub use original::{insert_before, insertion_sort};

use crate::utils::VariantInfo;

/// Type alias for the sort function signature: input untouched, sorted copy
/// returned.
pub type SortFn = fn(&[i32]) -> Vec<i32>;

/// Get all available variants
pub fn available_variants() -> Vec<VariantInfo<SortFn>> {
    vec![
        VariantInfo {
            name: "original",
            description: "Builds a new vector with insert_before per element",
            function: insertion_sort as SortFn,
        },
        VariantInfo {
            name: "in_place",
            description: "Copies once, then shifts elements left inside the copy",
            function: insertion_sort_copy as SortFn,
        },
        VariantInfo {
            name: "std_stable",
            description: "slice::sort baseline (driftsort)",
            function: std_stable_sort as SortFn,
        },
    ]
}
