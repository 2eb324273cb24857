//! ABI layer for the `<string.h>` subset.
//!
//! Each function is an `extern "C"` entry point that:
//! 1. Short-circuits null pointers to an inert result
//! 2. Scans the raw arguments into slices
//! 3. Delegates to the `nanolibc-core` safe implementations

use std::ffi::{c_char, c_int, c_void};

use crate::util::scan_c_string;

// ---------------------------------------------------------------------------
// memset
// ---------------------------------------------------------------------------

/// C `memset` -- fills `n` bytes at `dst` with the low 8 bits of `c`.
///
/// Returns `dst` for chaining. The prior contents of `dst` are never read.
///
/// # Safety
///
/// Caller must ensure `dst` is valid for `n` bytes of writes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn memset(dst: *mut c_void, c: c_int, n: usize) -> *mut c_void {
    if dst.is_null() || n == 0 {
        return dst;
    }

    // SAFETY: caller guarantees `dst` is writable for `n` bytes.
    let dest = unsafe { std::slice::from_raw_parts_mut(dst.cast::<u8>(), n) };
    nanolibc_core::string::memset(dest, c as u8, n);
    dst
}

// ---------------------------------------------------------------------------
// strlen
// ---------------------------------------------------------------------------

/// C `strlen` -- computes the length of a NUL-terminated string.
///
/// # Safety
///
/// Caller must ensure `s` points to a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strlen(s: *const c_char) -> usize {
    if s.is_null() {
        return 0;
    }

    // SAFETY: caller guarantees a terminator exists within readable memory.
    let (len, _terminated) = unsafe { scan_c_string(s, None) };
    len
}

// ---------------------------------------------------------------------------
// strnlen
// ---------------------------------------------------------------------------

/// C `strnlen` -- like `strlen`, but inspects at most `maxlen` bytes.
///
/// Returns `maxlen` when no terminator appears within the bound.
///
/// # Safety
///
/// Caller must ensure `s` is valid for reads up to the first NUL or
/// `maxlen` bytes, whichever comes first.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strnlen(s: *const c_char, maxlen: usize) -> usize {
    if s.is_null() {
        return 0;
    }

    // SAFETY: the scan never reads past `maxlen` bytes.
    let (len, _terminated) = unsafe { scan_c_string(s, Some(maxlen)) };
    len
}

// ---------------------------------------------------------------------------
// strcmp
// ---------------------------------------------------------------------------

/// C `strcmp` -- compares two NUL-terminated strings lexicographically.
///
/// Bytes compare as unsigned values; the result matches the sign of the
/// first differing pair.
///
/// # Safety
///
/// Caller must ensure both `s1` and `s2` point to valid NUL-terminated
/// strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strcmp(s1: *const c_char, s2: *const c_char) -> c_int {
    if s1.is_null() || s2.is_null() {
        return 0;
    }

    // SAFETY: caller guarantees terminated strings; the slices include the
    // terminator so the core loop stops inside them.
    let (len1, _) = unsafe { scan_c_string(s1, None) };
    let (len2, _) = unsafe { scan_c_string(s2, None) };
    let lhs = unsafe { std::slice::from_raw_parts(s1.cast::<u8>(), len1 + 1) };
    let rhs = unsafe { std::slice::from_raw_parts(s2.cast::<u8>(), len2 + 1) };
    nanolibc_core::string::strcmp(lhs, rhs)
}

// ---------------------------------------------------------------------------
// strncmp
// ---------------------------------------------------------------------------

/// C `strncmp` -- compares at most `n` bytes of two strings.
///
/// A side's terminator still ends the walk early; bytes past a NUL are
/// never read even when `n` reaches beyond it.
///
/// # Safety
///
/// Caller must ensure both strings are valid for reads up to their
/// terminator or `n` bytes, whichever comes first.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strncmp(s1: *const c_char, s2: *const c_char, n: usize) -> c_int {
    if n == 0 {
        return 0;
    }
    if s1.is_null() || s2.is_null() {
        return 0;
    }

    // SAFETY: each side is scanned no further than `n` bytes, so the
    // slices cover exactly the readable prefix.
    let (len1, term1) = unsafe { scan_c_string(s1, Some(n)) };
    let (len2, term2) = unsafe { scan_c_string(s2, Some(n)) };
    let lhs = unsafe { std::slice::from_raw_parts(s1.cast::<u8>(), len1 + usize::from(term1)) };
    let rhs = unsafe { std::slice::from_raw_parts(s2.cast::<u8>(), len2 + usize::from(term2)) };
    nanolibc_core::string::strncmp(lhs, rhs, n)
}

// ---------------------------------------------------------------------------
// strcpy
// ---------------------------------------------------------------------------

/// C `strcpy` -- copies the NUL-terminated string `src` into `dst`.
///
/// Returns `dst`.
///
/// # Safety
///
/// Caller must ensure `dst` has capacity for `strlen(src) + 1` bytes and
/// that the regions do not overlap.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strcpy(dst: *mut c_char, src: *const c_char) -> *mut c_char {
    if dst.is_null() || src.is_null() {
        return dst;
    }

    // SAFETY: caller guarantees `src` is terminated, `dst` has room for the
    // string plus NUL, and the regions are disjoint.
    let (src_len, _) = unsafe { scan_c_string(src, None) };
    let source = unsafe { std::slice::from_raw_parts(src.cast::<u8>(), src_len + 1) };
    let dest = unsafe { std::slice::from_raw_parts_mut(dst.cast::<u8>(), src_len + 1) };
    nanolibc_core::string::strcpy(dest, source);
    dst
}

// ---------------------------------------------------------------------------
// strncpy
// ---------------------------------------------------------------------------

/// C `strncpy` -- copies at most `n` bytes of `src` into `dst`.
///
/// When the source (including its NUL) fits within `n`, the remainder of
/// `dst` up to `n` bytes is zero-padded. When the source content is `n`
/// bytes or longer, exactly `n` bytes are copied and no terminator is
/// appended. Returns `dst`.
///
/// # Safety
///
/// Caller must ensure `dst` is valid for `n` bytes of writes, `src` is
/// valid for reads up to its terminator or `n` bytes, and the regions do
/// not overlap.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn strncpy(dst: *mut c_char, src: *const c_char, n: usize) -> *mut c_char {
    if n == 0 || dst.is_null() || src.is_null() {
        return dst;
    }

    // SAFETY: `src` is scanned no further than `n` bytes; caller guarantees
    // `dst` holds `n` writable bytes and the regions are disjoint.
    let (src_len, _) = unsafe { scan_c_string(src, Some(n)) };
    let source = unsafe { std::slice::from_raw_parts(src.cast::<u8>(), src_len) };
    let dest = unsafe { std::slice::from_raw_parts_mut(dst.cast::<u8>(), n) };
    nanolibc_core::string::strncpy(dest, source, n);
    dst
}
