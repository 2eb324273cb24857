//! Host libc fixture capture.
//!
//! Runs canonical input grids through the host side of the differential
//! executor and serializes the observed outputs as reference fixtures for
//! later verification. `captured_at` is supplied by the caller so capture
//! output is deterministic.

use serde_json::json;
use thiserror::Error;

use nanolibc_fixture_exec::{ExecError, execute_fixture_case};

use crate::fixtures::{FixtureCase, FixtureSet};

/// Fixture schema version emitted by capture.
pub const FIXTURE_VERSION: &str = "v1";

/// Function families capture knows how to build grids for.
pub const FAMILIES: &[&str] = &["ctype", "stdlib", "string"];

/// Error raised during fixture capture.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("unknown capture family: {0}")]
    UnknownFamily(String),
    #[error(transparent)]
    Exec(#[from] ExecError),
}

/// Capture the canonical fixture set for one family against the host libc.
pub fn capture_family(family: &str, captured_at: &str) -> Result<FixtureSet, CaptureError> {
    let grid = match family {
        "ctype" => ctype_grid(),
        "stdlib" => stdlib_grid(),
        "string" => string_grid(),
        other => return Err(CaptureError::UnknownFamily(other.to_string())),
    };

    let mut cases = Vec::with_capacity(grid.len());
    for spec in grid {
        let execution = execute_fixture_case(spec.function, &spec.inputs)?;
        cases.push(FixtureCase {
            name: spec.name,
            function: spec.function.to_string(),
            spec_section: spec.spec_section.to_string(),
            inputs: spec.inputs,
            expected_output: execution.host_output,
        });
    }

    Ok(FixtureSet {
        version: FIXTURE_VERSION.to_string(),
        family: family.to_string(),
        captured_at: captured_at.to_string(),
        cases,
    })
}

struct CaseSpec {
    name: String,
    function: &'static str,
    spec_section: &'static str,
    inputs: serde_json::Value,
}

impl CaseSpec {
    fn new(
        name: impl Into<String>,
        function: &'static str,
        spec_section: &'static str,
        inputs: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            function,
            spec_section,
            inputs,
        }
    }
}

fn ctype_grid() -> Vec<CaseSpec> {
    let mut grid = Vec::new();

    // Boundary bytes around the digit range plus the whitespace set, a
    // printable letter, NUL, a high byte, and the EOF sentinel.
    let probes: &[(&str, i64)] = &[
        ("slash", 47),
        ("zero", 48),
        ("nine", 57),
        ("colon", 58),
        ("tab", 9),
        ("newline", 10),
        ("vtab", 11),
        ("formfeed", 12),
        ("carriage_return", 13),
        ("space", 32),
        ("letter_a", 97),
        ("nul", 0),
        ("high_byte", 255),
        ("eof_sentinel", -1),
    ];

    for &(label, c) in probes {
        grid.push(CaseSpec::new(
            format!("isdigit_{label}"),
            "isdigit",
            "C17 7.4.1.5",
            json!({ "c": c }),
        ));
        grid.push(CaseSpec::new(
            format!("isspace_{label}"),
            "isspace",
            "C17 7.4.1.10",
            json!({ "c": c }),
        ));
    }

    grid
}

fn stdlib_grid() -> Vec<CaseSpec> {
    let inputs: &[(&'static str, &'static [u8])] = &[
        ("plain", b"42"),
        ("negative", b"-7"),
        ("explicit_plus", b"+99"),
        ("zero", b"0"),
        ("garbage", b"abc"),
        ("empty", b""),
        ("bare_sign", b"-"),
        ("leading_whitespace", b"   123"),
        ("tab_newline_prefix", b"\t\n-8"),
        ("trailing_garbage", b"12ab"),
        ("digit_then_space", b"7 8"),
        ("leading_zeros", b"007"),
        ("int_max", b"2147483647"),
        ("int_min", b"-2147483648"),
    ];

    inputs
        .iter()
        .map(|(label, bytes)| {
            CaseSpec::new(
                format!("atoi_{label}"),
                "atoi",
                "C17 7.22.1.2",
                json!({ "s": bytes.to_vec() }),
            )
        })
        .collect()
}

fn string_grid() -> Vec<CaseSpec> {
    vec![
        // memset
        CaseSpec::new(
            "memset_full",
            "memset",
            "C17 7.24.6.1",
            json!({ "dst_len": 8, "fill": 65, "n": 8 }),
        ),
        CaseSpec::new(
            "memset_partial",
            "memset",
            "C17 7.24.6.1",
            json!({ "dst_len": 8, "fill": 65, "n": 4 }),
        ),
        CaseSpec::new(
            "memset_zero_len",
            "memset",
            "C17 7.24.6.1",
            json!({ "dst_len": 4, "fill": 88, "n": 0 }),
        ),
        CaseSpec::new(
            "memset_low_bits_of_fill",
            "memset",
            "C17 7.24.6.1",
            json!({ "dst_len": 3, "fill": 321, "n": 3 }),
        ),
        // strlen
        CaseSpec::new(
            "strlen_basic",
            "strlen",
            "C17 7.24.6.3",
            json!({ "s": [104, 101, 108, 108, 111, 0] }),
        ),
        CaseSpec::new("strlen_empty", "strlen", "C17 7.24.6.3", json!({ "s": [0] })),
        CaseSpec::new(
            "strlen_embedded_nul",
            "strlen",
            "C17 7.24.6.3",
            json!({ "s": [97, 98, 0, 99, 100, 0] }),
        ),
        // strnlen
        CaseSpec::new(
            "strnlen_terminator_first",
            "strnlen",
            "POSIX strnlen",
            json!({ "s": [104, 105, 0], "n": 10 }),
        ),
        CaseSpec::new(
            "strnlen_bound_first",
            "strnlen",
            "POSIX strnlen",
            json!({ "s": [104, 101, 108, 108, 111, 0], "n": 3 }),
        ),
        CaseSpec::new(
            "strnlen_zero_bound",
            "strnlen",
            "POSIX strnlen",
            json!({ "s": [104, 105, 0], "n": 0 }),
        ),
        CaseSpec::new(
            "strnlen_unterminated",
            "strnlen",
            "POSIX strnlen",
            json!({ "s": [104, 105, 106], "n": 8 }),
        ),
        // strcmp
        CaseSpec::new(
            "strcmp_equal",
            "strcmp",
            "C17 7.24.4.2",
            json!({ "s1": [97, 98, 99, 0], "s2": [97, 98, 99, 0] }),
        ),
        CaseSpec::new(
            "strcmp_less",
            "strcmp",
            "C17 7.24.4.2",
            json!({ "s1": [97, 98, 99, 0], "s2": [97, 98, 100, 0] }),
        ),
        CaseSpec::new(
            "strcmp_prefix",
            "strcmp",
            "C17 7.24.4.2",
            json!({ "s1": [97, 98, 0], "s2": [97, 98, 99, 0] }),
        ),
        CaseSpec::new(
            "strcmp_unsigned_high_byte",
            "strcmp",
            "C17 7.24.4.2",
            json!({ "s1": [128, 0], "s2": [97, 0] }),
        ),
        // strncmp
        CaseSpec::new(
            "strncmp_equal_within_bound",
            "strncmp",
            "C17 7.24.4.4",
            json!({ "s1": [97, 98, 99, 100, 0], "s2": [97, 98, 99, 120, 0], "n": 3 }),
        ),
        CaseSpec::new(
            "strncmp_differs_at_bound",
            "strncmp",
            "C17 7.24.4.4",
            json!({ "s1": [97, 98, 99, 100, 0], "s2": [97, 98, 99, 120, 0], "n": 4 }),
        ),
        CaseSpec::new(
            "strncmp_zero_bound",
            "strncmp",
            "C17 7.24.4.4",
            json!({ "s1": [97, 0], "s2": [122, 0], "n": 0 }),
        ),
        CaseSpec::new(
            "strncmp_stops_at_terminator",
            "strncmp",
            "C17 7.24.4.4",
            json!({ "s1": [97, 98, 0, 88, 88], "s2": [97, 98, 0, 89, 89], "n": 5 }),
        ),
        // strcpy
        CaseSpec::new(
            "strcpy_basic",
            "strcpy",
            "C17 7.24.2.3",
            json!({ "src": [104, 105, 0], "dst_len": 5 }),
        ),
        CaseSpec::new(
            "strcpy_empty",
            "strcpy",
            "C17 7.24.2.3",
            json!({ "src": [0], "dst_len": 2 }),
        ),
        // strncpy
        CaseSpec::new(
            "strncpy_zero_pads",
            "strncpy",
            "C17 7.24.2.4",
            json!({ "src": [104, 105, 0], "dst_len": 5, "n": 5 }),
        ),
        CaseSpec::new(
            "strncpy_truncates_unterminated",
            "strncpy",
            "C17 7.24.2.4",
            json!({ "src": [104, 101, 108, 108, 111, 0], "dst_len": 3, "n": 3 }),
        ),
        CaseSpec::new(
            "strncpy_exact_fit",
            "strncpy",
            "C17 7.24.2.4",
            json!({ "src": [104, 101, 108, 108, 111, 0], "dst_len": 5, "n": 5 }),
        ),
        CaseSpec::new(
            "strncpy_leaves_tail_past_n",
            "strncpy",
            "C17 7.24.2.4",
            json!({ "src": [104, 105, 0], "dst_len": 8, "n": 4 }),
        ),
    ]
}
