//! Search algorithms.

pub mod linear_search;
