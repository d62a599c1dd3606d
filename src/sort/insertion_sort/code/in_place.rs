//! In-place insertion sort.

/// Sorts `v` in place, in ascending order.
///
/// Stable: equal elements keep their relative order, because an element only
/// moves past strictly greater predecessors.
pub fn insertion_sort_in_place(v: &mut [i32]) {
    for i in 1..v.len() {
        let mut j = i;
        while j > 0 && v[j - 1] > v[j] {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Copy `v` and sort the copy with [`insertion_sort_in_place`].
pub fn insertion_sort_copy(v: &[i32]) -> Vec<i32> {
    let mut result = v.to_vec();
    insertion_sort_in_place(&mut result);
    result
}

/// Baseline: the standard library's stable sort on a copy.
pub fn std_stable_sort(v: &[i32]) -> Vec<i32> {
    let mut result = v.to_vec();
    result.sort();
    result
}
