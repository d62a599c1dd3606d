//! # Linear Search
//!
//! Sequentially checks each element until the target is found or the slice is
//! exhausted. O(n) in every variant; the variants differ in what the inner
//! loop has to check:
//!
//! - **original**: bounds check and compare per element
//! - **reverse**: same work, scanning from the end (reports the last match)
//! - **sentinel**: the target is planted in the last slot so the inner loop
//!   only compares
//! - **range** / **recursive**: bounded scans over `[begin, end)`, iterative
//!   and recursive (halving, so depth stays logarithmic)
//!
//! The string form [`linear_search1a`] is not part of the variant table; it is
//! covered by the self-test suite.

pub mod code;
pub mod test;

pub use code::*;

use crate::error::VerifyError;
use crate::registry::{AlgorithmRunner, VariantClosure};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Number of lookups timed per sample.
const LOOKUPS_PER_SAMPLE: usize = 64;

/// Generate test data: a shuffled permutation of `0..size` and a vector of
/// the same length drawn from a small value range (many repeats).
pub(crate) fn generate_test_data(size: usize, seed: u64) -> (Vec<i32>, Vec<i32>) {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut unique: Vec<i32> = (0..size as i32).collect();
    unique.shuffle(&mut rng);

    let repeated: Vec<i32> = (0..size).map(|_| rng.random_range(0..16)).collect();

    (unique, repeated)
}

/// Lookup targets for a permutation of `0..size`: about half hit, half miss.
fn generate_targets(size: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
    let upper = (size as i32).saturating_mul(2).max(2);
    (0..LOOKUPS_PER_SAMPLE)
        .map(|_| rng.random_range(0..upper))
        .collect()
}

/// Encode a search result the way the numeric result column expects it.
fn index_sample(found: Option<usize>) -> f64 {
    found.map_or(-1.0, |i| i as f64)
}

/// Runner for the linear search algorithm
pub struct LinearSearchRunner;

impl AlgorithmRunner for LinearSearchRunner {
    fn name(&self) -> &'static str {
        "linear_search"
    }

    fn description(&self) -> &'static str {
        "Finds the index of a value by scanning the slice element by element"
    }

    fn category(&self) -> &'static str {
        "search"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>> {
        let (data, _) = generate_test_data(size, seed);
        let targets = generate_targets(size, seed);

        code::available_variants()
            .into_iter()
            .map(|v| {
                let mut data = data.clone();
                let targets = targets.clone();
                let func = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, checksum) = crate::measure!({
                            let mut checksum = 0.0;
                            for &x in &targets {
                                let found = std::hint::black_box(func(&mut data, std::hint::black_box(x)));
                                checksum += index_sample(found);
                            }
                            checksum
                        });
                        (elapsed, Some(checksum))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), VerifyError> {
        test::verify_all()
    }
}
