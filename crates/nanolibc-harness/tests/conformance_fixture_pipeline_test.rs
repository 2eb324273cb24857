//! Integration test: fixture capture -> file -> verify round trip.
//!
//! Validates that:
//! 1. Capture produces fixture JSON for every known family.
//! 2. Fixture files reload through `FixtureSet::from_file`.
//! 3. The runner verifies the reloaded fixtures clean.
//! 4. Reports render both markdown and JSON for the run.
//!
//! Run: cargo test -p nanolibc-harness --test conformance_fixture_pipeline_test

use std::path::PathBuf;

use nanolibc_harness::capture::{FAMILIES, capture_family};
use nanolibc_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary};

const CAPTURED_AT: &str = "2026-08-01T00:00:00Z";

fn scratch_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    std::fs::create_dir_all(&dir).expect("scratch dir should be creatable");
    dir
}

#[test]
fn every_family_round_trips_through_disk() {
    let dir = scratch_dir("fixture_pipeline");

    for family in FAMILIES {
        let set = capture_family(family, CAPTURED_AT).expect("capture should succeed");
        assert!(!set.cases.is_empty(), "{family} grid must not be empty");

        let path = dir.join(format!("{family}.v1.json"));
        std::fs::write(&path, set.to_json().unwrap()).unwrap();

        let reloaded = FixtureSet::from_file(&path).expect("fixture file should reload");
        assert_eq!(reloaded.family, *family);
        assert_eq!(reloaded.captured_at, CAPTURED_AT);
        assert_eq!(reloaded.cases.len(), set.cases.len());

        let results = TestRunner::new("pipeline").run(&reloaded);
        for r in &results {
            assert!(r.passed, "{family}/{} failed: {:?}", r.case_name, r.diff);
        }
    }
}

#[test]
fn fixture_sets_cover_every_symbol() {
    let mut functions = std::collections::BTreeSet::new();
    for family in FAMILIES {
        let set = capture_family(family, CAPTURED_AT).unwrap();
        for case in &set.cases {
            functions.insert(case.function.clone());
        }
    }

    for symbol in [
        "isspace", "isdigit", "atoi", "memset", "strlen", "strnlen", "strcmp", "strncmp",
        "strcpy", "strncpy",
    ] {
        assert!(functions.contains(symbol), "no fixture covers {symbol}");
    }
    assert_eq!(functions.len(), 10, "unexpected extra symbols: {functions:?}");
}

#[test]
fn report_renders_for_a_full_run() {
    let mut results = Vec::new();
    for family in FAMILIES {
        let set = capture_family(family, CAPTURED_AT).unwrap();
        results.extend(TestRunner::new("report").run(&set));
    }

    let report = ConformanceReport {
        title: String::from("nanolibc Conformance Report"),
        timestamp: CAPTURED_AT.to_string(),
        summary: VerificationSummary::from_results(results),
    };

    let markdown = report.to_markdown();
    assert!(markdown.contains("# nanolibc Conformance Report"));
    assert!(markdown.contains("| strncpy_zero_pads | C17 7.24.2.4 | PASS |"));
    assert!(!markdown.contains("FAIL"));

    let parsed: ConformanceReport = serde_json::from_str(&report.to_json()).unwrap();
    assert_eq!(parsed.summary.total, report.summary.total);
    assert!(parsed.summary.all_passed());
}
