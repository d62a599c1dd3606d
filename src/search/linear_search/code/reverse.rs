//! Linear search that starts at the end of the slice.

/// Scans `v` from the back and returns the first index where `v[i] == x`,
/// which is the *largest* matching index, or [`None`].
///
/// Agrees with [`linear_search1`](super::linear_search1) whenever `x` occurs
/// at most once.
pub fn reverse_linear_search(v: &[i32], x: i32) -> Option<usize> {
    let mut i = v.len();
    while i > 0 {
        i -= 1;
        if v[i] == x {
            return Some(i);
        }
    }
    None
}
