//! Linear search restricted to a half-open range `[begin, end)`.

/// Returns the smallest `i` in `[begin, end)` such that `v[i] == x`, or
/// [`None`].
///
/// Requires `begin <= end <= v.len()`; out-of-range bounds panic.
pub fn linear_search3(v: &[i32], x: i32, begin: usize, end: usize) -> Option<usize> {
    for i in begin..end {
        if v[i] == x {
            return Some(i);
        }
    }
    None
}

/// Recursive form of [`linear_search3`] with the same contract.
///
/// The range is split in half and the left half searched first, so the first
/// match still wins and the recursion depth is `log2(end - begin)` rather than
/// one frame per element.
pub fn linear_search4(v: &[i32], x: i32, begin: usize, end: usize) -> Option<usize> {
    if begin >= end {
        return None;
    }
    if end - begin == 1 {
        return (v[begin] == x).then_some(begin);
    }
    let mid = begin + (end - begin) / 2;
    linear_search4(v, x, begin, mid).or_else(|| linear_search4(v, x, mid, end))
}

/// [`linear_search4`] over the whole slice.
pub fn linear_search4_all(v: &[i32], x: i32) -> Option<usize> {
    linear_search4(v, x, 0, v.len())
}
