//! Sentinel linear search.
//!
//! The bounds check disappears from the inner loop by writing the target into
//! the last slot before scanning: the scan is then guaranteed to stop. The
//! slot is borrowed for the duration of one call and written back by
//! [`SentinelGuard`] on every exit path.

use std::ops::Deref;

/// Returns the smallest `i` such that `v[i] == x`, without bounds checks.
///
/// # Safety
///
/// `x` must be present in `v`. If it is not, the scan walks past the end of
/// the slice and reads memory it does not own; the behavior is undefined.
pub unsafe fn location_of(v: &[i32], x: i32) -> usize {
    let ptr = v.as_ptr();
    let mut i = 0;
    // SAFETY: the caller guarantees a match at some j < v.len(), and the loop
    // stops at the first one.
    while unsafe { *ptr.add(i) } != x {
        i += 1;
    }
    i
}

/// Temporary custody of a slice's last element.
///
/// Created by [`SentinelGuard::plant`], which swaps the sentinel into the last
/// slot. Dropping the guard puts the saved value back, including when the
/// holder unwinds.
#[derive(Debug)]
pub struct SentinelGuard<'a> {
    slice: &'a mut [i32],
    saved: i32,
}

impl<'a> SentinelGuard<'a> {
    /// Overwrite the last element of `slice` with `sentinel`.
    ///
    /// Returns [`None`] for an empty slice, which has no slot to borrow.
    pub fn plant(slice: &'a mut [i32], sentinel: i32) -> Option<Self> {
        let last = slice.last_mut()?;
        let saved = std::mem::replace(last, sentinel);
        Some(Self { slice, saved })
    }

    /// Index of the slot holding the sentinel.
    pub fn sentinel_index(&self) -> usize {
        self.slice.len() - 1
    }
}

impl Deref for SentinelGuard<'_> {
    type Target = [i32];

    fn deref(&self) -> &[i32] {
        self.slice
    }
}

impl Drop for SentinelGuard<'_> {
    fn drop(&mut self) {
        if let Some(last) = self.slice.last_mut() {
            *last = self.saved;
        }
    }
}

/// Sentinel search: same answer as [`linear_search1`](super::linear_search1).
///
/// `v` is `&mut` because its last element is overwritten during the scan. It
/// is restored before returning, so callers observe no change.
///
/// - empty slice: [`None`]
/// - one element: direct comparison
/// - last element already equals `x`: no write needed, the slot already
///   stops the scan
pub fn linear_search2(v: &mut [i32], x: i32) -> Option<usize> {
    let n = v.len();
    match n {
        0 => return None,
        1 => return (v[0] == x).then_some(0),
        _ => {}
    }

    if v[n - 1] == x {
        // SAFETY: v[n - 1] == x.
        return Some(unsafe { location_of(v, x) });
    }

    let guard = SentinelGuard::plant(v, x)?;
    // SAFETY: the guard holds x in the last slot until it is dropped.
    let i = unsafe { location_of(&guard, x) };
    let sentinel = guard.sentinel_index();
    drop(guard);

    // Hitting the sentinel slot means x was nowhere else.
    (i < sentinel).then_some(i)
}
