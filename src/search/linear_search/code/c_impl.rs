//! FFI bindings for the C search variants.

#[cfg(c_implementation_active)]
mod ffi {
    use libc::{c_int, ptrdiff_t, size_t};

    extern "C" {
        pub fn linear_search_c_original(v: *const c_int, len: size_t, x: c_int) -> ptrdiff_t;
        pub fn linear_search_c_sentinel(v: *mut c_int, len: size_t, x: c_int) -> ptrdiff_t;
    }
}

/// Map the C `-1` convention onto `Option`.
#[cfg(c_implementation_active)]
fn from_c_index(i: libc::ptrdiff_t) -> Option<usize> {
    usize::try_from(i).ok()
}

/// C forward search wrapper
#[cfg(c_implementation_active)]
pub fn linear_search_c_original(v: &mut [i32], x: i32) -> Option<usize> {
    // SAFETY: pointer and length come from the same live slice; the C side
    // only reads `len` elements.
    from_c_index(unsafe { ffi::linear_search_c_original(v.as_ptr(), v.len(), x) })
}

/// C sentinel search wrapper
#[cfg(c_implementation_active)]
pub fn linear_search_c_sentinel(v: &mut [i32], x: i32) -> Option<usize> {
    // SAFETY: exclusive borrow of the slice for the call; the C side writes
    // only v[len - 1] and restores it before returning.
    from_c_index(unsafe { ffi::linear_search_c_sentinel(v.as_mut_ptr(), v.len(), x) })
}

/// Check if C implementations are available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

// Stub implementations for missing C compiler
#[cfg(not(c_implementation_active))]
pub fn linear_search_c_original(_v: &mut [i32], _x: i32) -> Option<usize> {
    panic!("C implementation not compiled (requires a C compiler at build time)")
}

#[cfg(not(c_implementation_active))]
pub fn linear_search_c_sentinel(_v: &mut [i32], _x: i32) -> Option<usize> {
    panic!("C implementation not compiled (requires a C compiler at build time)")
}
