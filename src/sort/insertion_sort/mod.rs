//! # Insertion Sort
//!
//! Builds the sorted output one element at a time, shifting each new element
//! left until its predecessor is not greater. Stable, *O*(*n^2*).
//!
//! ## Variants
//!
//! - **original**: a fresh vector grown with [`insert_before`]
//! - **in_place**: one copy, then swaps inside it
//! - **std_stable**: `slice::sort`, for scale

pub mod code;
pub mod test;

pub use code::*;

use crate::error::VerifyError;
use crate::registry::{AlgorithmRunner, VariantClosure};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Quadratic variants make larger inputs take seconds per sample.
const MAX_BENCH_SIZE: usize = 8192;

/// Generate `size` values from a seeded RNG, in `-size..size` so repeats occur.
pub(crate) fn generate_test_data(size: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let bound = (size as i32).max(1);
    (0..size).map(|_| rng.random_range(-bound..bound)).collect()
}

/// Runner for the insertion sort algorithm
pub struct InsertionSortRunner;

impl AlgorithmRunner for InsertionSortRunner {
    fn name(&self) -> &'static str {
        "insertion_sort"
    }

    fn description(&self) -> &'static str {
        "Sorts by inserting each element into an already sorted prefix"
    }

    fn category(&self) -> &'static str {
        "sort"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>> {
        if size > MAX_BENCH_SIZE {
            return Vec::new();
        }

        let input = generate_test_data(size, seed);

        code::available_variants()
            .into_iter()
            .map(|v| {
                let input = input.clone();
                let func = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, sorted) = crate::measure!(std::hint::black_box(func(&input)));
                        // Median element; identical for every correct variant.
                        let sample = sorted.get(sorted.len() / 2).map(|&m| m as f64);
                        (elapsed, sample)
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), VerifyError> {
        test::verify_all()
    }
}
