//! Insertion sort built from repeated sorted insertion.
//!
//! This is not the fastest way to write insertion sort: every element goes
//! into a fresh vector through [`insert_before`]. See
//! [`insertion_sort_in_place`](super::insertion_sort_in_place) for the version
//! that works inside the input.

/// Insert `x` into `v`, keeping `v` sorted.
///
/// # Pre-condition
/// `v` is sorted ascending: `v[0] <= v[1] <= ... <= v[v.len() - 1]`.
/// An unsorted `v` is not detected; the result is then unspecified.
///
/// `x` is pushed at the end and swapped left past every strictly greater
/// predecessor, so it lands after any elements equal to it.
///
/// # Example
/// ```
/// use linear_search_lab::sort::insertion_sort::insert_before;
///
/// let mut v = vec![0, 3];
/// insert_before(&mut v, 5);
/// insert_before(&mut v, 1);
/// assert_eq!(v, [0, 1, 3, 5]);
/// ```
pub fn insert_before(v: &mut Vec<i32>, x: i32) {
    v.push(x);
    let mut i = v.len() - 1;
    while i > 0 && v[i - 1] > x {
        v.swap(i - 1, i);
        i -= 1;
    }
}

/// Return a sorted copy of `v`, built by calling [`insert_before`] once per
/// element. `v` is not modified.
///
/// Takes *O*(*n^2*) time in the worst case.
pub fn insertion_sort(v: &[i32]) -> Vec<i32> {
    let mut result = Vec::with_capacity(v.len());
    for &x in v {
        insert_before(&mut result, x);
    }
    result
}
