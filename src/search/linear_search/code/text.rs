//! Linear search for a `char` in a string.

/// Returns the position of the first `c` in `s`, or [`None`].
///
/// Positions count characters, not bytes: in `"héllo"` the first `'l'` is at
/// position 2.
///
/// # Example
/// ```
/// use linear_search_lab::search::linear_search::linear_search1a;
///
/// assert_eq!(linear_search1a("hello", 'l'), Some(2));
/// assert_eq!(linear_search1a("", 'x'), None);
/// ```
pub fn linear_search1a(s: &str, c: char) -> Option<usize> {
    for (i, ch) in s.chars().enumerate() {
        if ch == c {
            return Some(i);
        }
    }
    None
}
