//! Linear search implementations.
//!
//! This module contains all implementation variants of linear search.

pub mod c_impl;
mod original;
mod range;
mod reverse;
mod sentinel;
mod text;

pub use c_impl::{linear_search_c_original, linear_search_c_sentinel, C_IMPL_AVAILABLE};
pub use original::linear_search1;
pub use range::{linear_search3, linear_search4, linear_search4_all};
pub use reverse::reverse_linear_search;
pub use sentinel::{linear_search2, location_of, SentinelGuard};
pub use text::linear_search1a;

/// Type alias for the search function signature.
///
/// Takes `&mut` so the sentinel variants fit the same table; every variant
/// leaves the slice as it found it.
pub type SearchFn = fn(&mut [i32], i32) -> Option<usize>;

/// Which match a variant reports when the target occurs more than once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanOrder {
    /// Smallest matching index.
    Forward,
    /// Largest matching index.
    Backward,
}

/// Variant descriptor
pub struct SearchVariant {
    pub name: &'static str,
    pub description: &'static str,
    pub function: SearchFn,
    pub order: ScanOrder,
}

fn original_variant(v: &mut [i32], x: i32) -> Option<usize> {
    linear_search1(v, x)
}

fn reverse_variant(v: &mut [i32], x: i32) -> Option<usize> {
    reverse_linear_search(v, x)
}

fn range_variant(v: &mut [i32], x: i32) -> Option<usize> {
    linear_search3(v, x, 0, v.len())
}

fn recursive_variant(v: &mut [i32], x: i32) -> Option<usize> {
    linear_search4_all(v, x)
}

/// Get all available variants
pub fn available_variants() -> Vec<SearchVariant> {
    let mut variants = vec![
        SearchVariant {
            name: "original",
            description: "Forward scan, returns the first match",
            function: original_variant,
            order: ScanOrder::Forward,
        },
        SearchVariant {
            name: "reverse",
            description: "Backward scan from the last element",
            function: reverse_variant,
            order: ScanOrder::Backward,
        },
        SearchVariant {
            name: "sentinel",
            description: "Target planted in the last slot, unchecked inner loop",
            function: linear_search2,
            order: ScanOrder::Forward,
        },
        SearchVariant {
            name: "range",
            description: "Bounded scan over [0, len)",
            function: range_variant,
            order: ScanOrder::Forward,
        },
        SearchVariant {
            name: "recursive",
            description: "Recursive halving scan over [0, len)",
            function: recursive_variant,
            order: ScanOrder::Forward,
        },
    ];

    if C_IMPL_AVAILABLE {
        variants.push(SearchVariant {
            name: "c-original",
            description: "C forward scan",
            function: linear_search_c_original,
            order: ScanOrder::Forward,
        });
        variants.push(SearchVariant {
            name: "c-sentinel",
            description: "C sentinel scan",
            function: linear_search_c_sentinel,
            order: ScanOrder::Forward,
        });
    }

    variants
}
