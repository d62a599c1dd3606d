//! Original (reference) forward linear search.
//!
//! Every other search variant is checked against this one.

/// Returns the smallest `i` such that `v[i] == x`, or [`None`] if `x` is not
/// anywhere in `v`.
///
/// No precondition: `v` may be empty.
///
/// # Example
/// ```
/// use linear_search_lab::search::linear_search::linear_search1;
///
/// let v = [5, 2, 1, 3, 4];
/// assert_eq!(linear_search1(&v, 1), Some(2));
/// assert_eq!(linear_search1(&v, 6), None);
/// ```
pub fn linear_search1(v: &[i32], x: i32) -> Option<usize> {
    for (i, &elem) in v.iter().enumerate() {
        if elem == x {
            return Some(i);
        }
    }
    None
}
