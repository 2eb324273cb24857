//! Differential fixture execution shared by harness tooling.
//!
//! Executes a fixture case against both the `nanolibc-core` implementation
//! and the host libc (through the `libc` crate), so the harness can verify
//! captured expectations and flag host divergence in one pass.
//!
//! Input conventions (per-function JSON objects):
//! - String arguments are byte arrays; the array is the entire accessible
//!   memory for that argument. Host-side buffers carry a trailing sentinel
//!   NUL so unterminated fixture inputs stay bounded, which mirrors the
//!   slice model on the implementation side.
//! - Comparison results are recorded as sign classes (`-1`/`0`/`1`) since
//!   libc only guarantees the sign of `strcmp`/`strncmp`.
//! - Classification results are recorded as `0`/`1` since host `isdigit`/
//!   `isspace` return unspecified non-zero values.

use std::ffi::{c_char, c_int, c_void};

use thiserror::Error;

/// Error raised when a fixture case cannot be executed.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("unsupported fixture function: {0}")]
    UnsupportedFunction(String),
    #[error("{function}: missing or malformed input field '{field}'")]
    BadInput { function: String, field: String },
    #[error("{function}: destination too small ({have} bytes, {needed} needed)")]
    DestinationTooSmall {
        function: String,
        have: usize,
        needed: usize,
    },
}

/// Outcome of running one fixture case on both sides.
#[derive(Debug, Clone)]
pub struct DifferentialExecution {
    /// Output from the `nanolibc-core` implementation.
    pub impl_output: String,
    /// Output from the host libc.
    pub host_output: String,
    /// Whether both sides agreed.
    pub host_parity: bool,
}

/// Execute a single fixture case against both implementations.
pub fn execute_fixture_case(
    function: &str,
    inputs: &serde_json::Value,
) -> Result<DifferentialExecution, ExecError> {
    let (impl_output, host_output) = match function {
        "isdigit" => exec_classify(function, inputs, nanolibc_core::ctype::is_digit, |c| {
            // SAFETY: pure predicate over an integer argument.
            unsafe { libc::isdigit(c) }
        })?,
        "isspace" => exec_classify(function, inputs, nanolibc_core::ctype::is_space, |c| {
            // SAFETY: pure predicate over an integer argument.
            unsafe { libc::isspace(c) }
        })?,
        "atoi" => exec_atoi(function, inputs)?,
        "memset" => exec_memset(function, inputs)?,
        "strlen" => exec_strlen(function, inputs)?,
        "strnlen" => exec_strnlen(function, inputs)?,
        "strcmp" => exec_strcmp(function, inputs)?,
        "strncmp" => exec_strncmp(function, inputs)?,
        "strcpy" => exec_strcpy(function, inputs)?,
        "strncpy" => exec_strncpy(function, inputs)?,
        other => return Err(ExecError::UnsupportedFunction(other.to_string())),
    };

    let host_parity = impl_output == host_output;
    Ok(DifferentialExecution {
        impl_output,
        host_output,
        host_parity,
    })
}

// ---------------------------------------------------------------------------
// Input decoding
// ---------------------------------------------------------------------------

fn bytes_field(
    function: &str,
    inputs: &serde_json::Value,
    field: &str,
) -> Result<Vec<u8>, ExecError> {
    inputs
        .get(field)
        .and_then(|v| v.as_array())
        .and_then(|arr| {
            arr.iter()
                .map(|v| v.as_u64().and_then(|n| u8::try_from(n).ok()))
                .collect::<Option<Vec<u8>>>()
        })
        .ok_or_else(|| ExecError::BadInput {
            function: function.to_string(),
            field: field.to_string(),
        })
}

fn usize_field(
    function: &str,
    inputs: &serde_json::Value,
    field: &str,
) -> Result<usize, ExecError> {
    inputs
        .get(field)
        .and_then(|v| v.as_u64())
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| ExecError::BadInput {
            function: function.to_string(),
            field: field.to_string(),
        })
}

fn int_field(function: &str, inputs: &serde_json::Value, field: &str) -> Result<i64, ExecError> {
    inputs
        .get(field)
        .and_then(|v| v.as_i64())
        .ok_or_else(|| ExecError::BadInput {
            function: function.to_string(),
            field: field.to_string(),
        })
}

/// Copy a fixture byte array and append the host-side sentinel NUL.
fn sentineled(bytes: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(bytes.len() + 1);
    buf.extend_from_slice(bytes);
    buf.push(0);
    buf
}

// ---------------------------------------------------------------------------
// Per-function execution
// ---------------------------------------------------------------------------

fn exec_classify(
    function: &str,
    inputs: &serde_json::Value,
    impl_fn: fn(u8) -> bool,
    host_fn: fn(c_int) -> c_int,
) -> Result<(String, String), ExecError> {
    let c = int_field(function, inputs, "c")?;

    let impl_result = match u8::try_from(c) {
        Ok(byte) => i32::from(impl_fn(byte)),
        Err(_) => 0,
    };
    // Host ctype has defined behavior only for 0..=255 and EOF; classify
    // anything else as non-matching without consulting it.
    let host_result = if (0..=255).contains(&c) {
        i32::from(host_fn(c as c_int) != 0)
    } else {
        0
    };

    Ok((impl_result.to_string(), host_result.to_string()))
}

fn exec_atoi(function: &str, inputs: &serde_json::Value) -> Result<(String, String), ExecError> {
    let s = bytes_field(function, inputs, "s")?;

    let impl_result = nanolibc_core::stdlib::atoi(&s);
    let host_buf = sentineled(&s);
    // SAFETY: `host_buf` is NUL-terminated by construction.
    let host_result = unsafe { libc::atoi(host_buf.as_ptr().cast::<c_char>()) };

    Ok((impl_result.to_string(), host_result.to_string()))
}

fn exec_memset(function: &str, inputs: &serde_json::Value) -> Result<(String, String), ExecError> {
    let dst_len = usize_field(function, inputs, "dst_len")?;
    let fill = int_field(function, inputs, "fill")?;
    let n = usize_field(function, inputs, "n")?;
    // The allocation is `dst_len` bytes on both sides; a fixture asking for
    // more is clamped rather than trusted with an over-write.
    let n = n.min(dst_len);

    let mut impl_dst = vec![0u8; dst_len];
    nanolibc_core::string::memset(&mut impl_dst, fill as u8, n);

    let mut host_dst = vec![0u8; dst_len];
    if n > 0 {
        // SAFETY: `host_dst` owns `dst_len >= n` writable bytes.
        unsafe {
            libc::memset(host_dst.as_mut_ptr().cast::<c_void>(), fill as c_int, n);
        }
    }

    Ok((format!("{impl_dst:?}"), format!("{host_dst:?}")))
}

fn exec_strlen(function: &str, inputs: &serde_json::Value) -> Result<(String, String), ExecError> {
    let s = bytes_field(function, inputs, "s")?;

    let impl_result = nanolibc_core::string::strlen(&s);
    let host_buf = sentineled(&s);
    // SAFETY: `host_buf` is NUL-terminated by construction.
    let host_result = unsafe { libc::strlen(host_buf.as_ptr().cast::<c_char>()) };

    Ok((impl_result.to_string(), host_result.to_string()))
}

fn exec_strnlen(function: &str, inputs: &serde_json::Value) -> Result<(String, String), ExecError> {
    let s = bytes_field(function, inputs, "s")?;
    let n = usize_field(function, inputs, "n")?;

    let impl_result = nanolibc_core::string::strnlen(&s, n);
    let host_buf = sentineled(&s);
    // SAFETY: the scan stops at the sentinel NUL even when `n` exceeds the
    // fixture bytes.
    let host_result = unsafe { libc::strnlen(host_buf.as_ptr().cast::<c_char>(), n) };

    Ok((impl_result.to_string(), host_result.to_string()))
}

fn exec_strcmp(function: &str, inputs: &serde_json::Value) -> Result<(String, String), ExecError> {
    let s1 = bytes_field(function, inputs, "s1")?;
    let s2 = bytes_field(function, inputs, "s2")?;

    let impl_result = nanolibc_core::string::strcmp(&s1, &s2).signum();
    let host1 = sentineled(&s1);
    let host2 = sentineled(&s2);
    // SAFETY: both buffers are NUL-terminated by construction.
    let host_result = unsafe {
        libc::strcmp(
            host1.as_ptr().cast::<c_char>(),
            host2.as_ptr().cast::<c_char>(),
        )
    }
    .signum();

    Ok((impl_result.to_string(), host_result.to_string()))
}

fn exec_strncmp(function: &str, inputs: &serde_json::Value) -> Result<(String, String), ExecError> {
    let s1 = bytes_field(function, inputs, "s1")?;
    let s2 = bytes_field(function, inputs, "s2")?;
    let n = usize_field(function, inputs, "n")?;

    let impl_result = nanolibc_core::string::strncmp(&s1, &s2, n).signum();
    let host1 = sentineled(&s1);
    let host2 = sentineled(&s2);
    // SAFETY: the walk stops at each side's sentinel NUL within the bound.
    let host_result = unsafe {
        libc::strncmp(
            host1.as_ptr().cast::<c_char>(),
            host2.as_ptr().cast::<c_char>(),
            n,
        )
    }
    .signum();

    Ok((impl_result.to_string(), host_result.to_string()))
}

fn exec_strcpy(function: &str, inputs: &serde_json::Value) -> Result<(String, String), ExecError> {
    let src = bytes_field(function, inputs, "src")?;
    let dst_len = usize_field(function, inputs, "dst_len")?;

    let src_len = nanolibc_core::string::strlen(&src);
    if dst_len < src_len + 1 {
        return Err(ExecError::DestinationTooSmall {
            function: function.to_string(),
            have: dst_len,
            needed: src_len + 1,
        });
    }

    // Prefill with a visible marker so untouched tail bytes show up in the
    // recorded output.
    let mut impl_dst = vec![0xAAu8; dst_len];
    nanolibc_core::string::strcpy(&mut impl_dst, &src);

    let mut host_dst = vec![0xAAu8; dst_len];
    let host_src = sentineled(&src);
    // SAFETY: `host_dst` holds `src_len + 1` writable bytes and the buffers
    // are distinct allocations.
    unsafe {
        libc::strcpy(
            host_dst.as_mut_ptr().cast::<c_char>(),
            host_src.as_ptr().cast::<c_char>(),
        );
    }

    Ok((format!("{impl_dst:?}"), format!("{host_dst:?}")))
}

fn exec_strncpy(function: &str, inputs: &serde_json::Value) -> Result<(String, String), ExecError> {
    let src = bytes_field(function, inputs, "src")?;
    let dst_len = usize_field(function, inputs, "dst_len")?;
    let n = usize_field(function, inputs, "n")?;

    if dst_len < n {
        return Err(ExecError::DestinationTooSmall {
            function: function.to_string(),
            have: dst_len,
            needed: n,
        });
    }

    let mut impl_dst = vec![0xAAu8; dst_len];
    nanolibc_core::string::strncpy(&mut impl_dst, &src, n);

    let mut host_dst = vec![0xAAu8; dst_len];
    let host_src = sentineled(&src);
    if n > 0 {
        // SAFETY: `host_dst` holds `n` writable bytes; the source stops at
        // its sentinel NUL within the bound.
        unsafe {
            libc::strncpy(
                host_dst.as_mut_ptr().cast::<c_char>(),
                host_src.as_ptr().cast::<c_char>(),
                n,
            );
        }
    }

    Ok((format!("{impl_dst:?}"), format!("{host_dst:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn run(function: &str, inputs: serde_json::Value) -> DifferentialExecution {
        execute_fixture_case(function, &inputs).expect("case should execute")
    }

    #[test]
    fn classification_agrees_with_host() {
        for c in 0..=255i64 {
            let digit = run("isdigit", json!({ "c": c }));
            assert!(digit.host_parity, "isdigit({c}) diverged");
            let space = run("isspace", json!({ "c": c }));
            assert!(space.host_parity, "isspace({c}) diverged");
        }
    }

    #[test]
    fn classification_sentinel_is_non_matching() {
        let eof = run("isdigit", json!({ "c": -1 }));
        assert_eq!(eof.impl_output, "0");
        assert!(eof.host_parity);
    }

    #[test]
    fn atoi_parity_on_canonical_inputs() {
        for s in [
            b"42".to_vec(),
            b"-7".to_vec(),
            b"abc".to_vec(),
            b"".to_vec(),
            b"   123".to_vec(),
            b"12ab".to_vec(),
        ] {
            let exec = run("atoi", json!({ "s": s }));
            assert!(exec.host_parity, "atoi diverged: {exec:?}");
        }
    }

    #[test]
    fn memset_records_partial_fill() {
        let exec = run("memset", json!({ "dst_len": 8, "fill": 65, "n": 4 }));
        assert_eq!(exec.impl_output, "[65, 65, 65, 65, 0, 0, 0, 0]");
        assert!(exec.host_parity);
    }

    #[test]
    fn strnlen_unterminated_hits_bound() {
        let exec = run("strnlen", json!({ "s": [104, 105], "n": 10 }));
        assert_eq!(exec.impl_output, "2");
        assert!(exec.host_parity);
    }

    #[test]
    fn strcmp_outputs_sign_classes() {
        let exec = run("strcmp", json!({ "s1": [97, 0], "s2": [98, 0] }));
        assert_eq!(exec.impl_output, "-1");
        assert!(exec.host_parity);
    }

    #[test]
    fn strncpy_zero_pads_on_both_sides() {
        let exec = run("strncpy", json!({ "src": [104, 105, 0], "dst_len": 5, "n": 5 }));
        assert_eq!(exec.impl_output, "[104, 105, 0, 0, 0]");
        assert!(exec.host_parity);
    }

    #[test]
    fn strcpy_rejects_undersized_destination() {
        let err = execute_fixture_case(
            "strcpy",
            &json!({ "src": [104, 105, 0], "dst_len": 2 }),
        )
        .unwrap_err();
        assert!(matches!(err, ExecError::DestinationTooSmall { .. }));
    }

    #[test]
    fn unknown_function_is_an_error() {
        let err = execute_fixture_case("memcpy", &json!({})).unwrap_err();
        assert!(matches!(err, ExecError::UnsupportedFunction(_)));
    }
}
