//! Error types for verification and the CLI.

use thiserror::Error;

/// A failed check inside a suite routine or a runner's `verify()`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    /// A call returned something other than the fixture's expected value.
    #[error("{routine}: {call} returned {actual}, expected {expected}")]
    Mismatch {
        routine: &'static str,
        call: String,
        expected: String,
        actual: String,
    },

    /// A variant left its input different from how it received it.
    #[error("variant '{variant}' modified its input: {before} became {after}")]
    InputModified {
        variant: &'static str,
        before: String,
        after: String,
    },

    /// The variant table has no `original` entry to compare against.
    #[error("no 'original' variant found for reference in '{algorithm}'")]
    MissingReference { algorithm: &'static str },

    /// A variant disagreed with the reference.
    #[error("variant '{variant}' failed verification: {detail}")]
    VariantMismatch { variant: &'static str, detail: String },
}

impl VerifyError {
    /// Build a [`VerifyError::Mismatch`] from anything `Debug`.
    pub fn mismatch<E, A>(routine: &'static str, call: impl Into<String>, expected: E, actual: A) -> Self
    where
        E: std::fmt::Debug,
        A: std::fmt::Debug,
    {
        VerifyError::Mismatch {
            routine,
            call: call.into(),
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        }
    }
}

/// Top-level errors surfaced by the `search-lab` binary.
#[derive(Debug, Error)]
pub enum LabError {
    #[error("algorithm '{name}' not found (available: {available})")]
    UnknownAlgorithm { name: String, available: String },

    #[error("failed to export CSV: {0}")]
    Csv(#[from] std::io::Error),

    #[error("{failed} check(s) failed")]
    Verification { failed: usize },
}
