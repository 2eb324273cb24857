//! ABI layer for the `<stdlib.h>` subset: `atoi`.

use std::ffi::{c_char, c_int};

use crate::util::scan_c_string;

// ---------------------------------------------------------------------------
// atoi
// ---------------------------------------------------------------------------

/// C `atoi` -- parses a decimal integer from a NUL-terminated string.
///
/// Leading whitespace is skipped, then an optional sign, then a maximal
/// digit run. Values beyond the `int` range saturate at the bounds.
///
/// # Safety
///
/// Caller must ensure `nptr` points to a valid NUL-terminated string.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn atoi(nptr: *const c_char) -> c_int {
    if nptr.is_null() {
        return 0;
    }

    // SAFETY: caller guarantees a terminator exists within readable memory.
    let (len, _terminated) = unsafe { scan_c_string(nptr, None) };
    let slice = unsafe { std::slice::from_raw_parts(nptr.cast::<u8>(), len) };
    nanolibc_core::stdlib::atoi(slice)
}
