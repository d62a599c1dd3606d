//! Algorithm registry for dynamic algorithm discovery and execution.
//!
//! This module provides a generic interface for registering, verifying and
//! timing algorithms without needing separate binary files for each.

use crate::error::VerifyError;
use crate::utils::timer::VariantResult;

/// Result from running a variant benchmark (alias for VariantResult)
pub type BenchmarkResult = VariantResult;

/// A closure that runs one timed execution of a variant.
pub use crate::utils::timer::Variant as VariantClosure;

/// Trait that all algorithm runners must implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the algorithm (e.g., "linear_search")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "search", "sort")
    fn category(&self) -> &'static str;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str>;

    /// Get closures for each variant, ready to be measured.
    ///
    /// Input data is generated from `seed`, so two calls with the same size
    /// and seed time identical work. Returns an empty list for sizes the
    /// algorithm does not support.
    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>>;

    /// Verify correctness of all variants against the reference
    fn verify(&self) -> Result<(), VerifyError>;
}

/// Global registry of all algorithms
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm
    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    /// Get all registered algorithms
    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find algorithm by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// List algorithm names
    pub fn list_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    /// Categories in registration order, without repeats
    pub fn categories(&self) -> Vec<&'static str> {
        let mut categories: Vec<&'static str> = Vec::new();
        for algo in &self.algorithms {
            if !categories.contains(&algo.category()) {
                categories.push(algo.category());
            }
        }
        categories
    }

    /// List algorithms by category
    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all algorithms
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::search::linear_search::LinearSearchRunner);
    registry.register(crate::sort::insertion_sort::InsertionSortRunner);

    registry
}
