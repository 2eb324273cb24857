//! CLI entrypoint for the nanolibc conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use nanolibc_harness::structured_log::{
    ArtifactIndex, LogEmitter, LogEntry, LogLevel, Outcome, StreamKind,
};
use nanolibc_harness::{ConformanceReport, FixtureSet, TestRunner, VerificationSummary};

/// Conformance tooling for nanolibc.
#[derive(Debug, Parser)]
#[command(name = "nanolibc-harness")]
#[command(about = "Conformance testing harness for nanolibc")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Capture host libc behavior as fixture files.
    Capture {
        /// Output directory for fixture JSON files.
        #[arg(long)]
        output: PathBuf,
        /// Function family to capture ("ctype", "stdlib", "string", or "all").
        #[arg(long, default_value = "all")]
        family: String,
        /// Fixed timestamp string recorded as `captured_at` for deterministic output.
        #[arg(long)]
        timestamp: String,
    },
    /// Verify our implementation against captured fixtures.
    Verify {
        /// Directory containing fixture JSON files.
        #[arg(long)]
        fixture: PathBuf,
        /// Output report path (markdown; a .json sibling is written too).
        #[arg(long)]
        report: Option<PathBuf>,
        /// Optional structured JSONL log path (an artifact index is written alongside).
        #[arg(long)]
        log: Option<PathBuf>,
        /// Optional fixed timestamp string for deterministic report generation.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Render a diff between expected and actual text values.
    Diff {
        /// Expected text payload.
        #[arg(long)]
        expected: String,
        /// Actual text payload.
        #[arg(long)]
        actual: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Capture {
            output,
            family,
            timestamp,
        } => {
            std::fs::create_dir_all(&output)?;
            let families: Vec<&str> = if family == "all" {
                nanolibc_harness::capture::FAMILIES.to_vec()
            } else {
                vec![family.as_str()]
            };

            for family in families {
                let set = nanolibc_harness::capture::capture_family(family, &timestamp)?;
                let path = output.join(format!("{family}.v1.json"));
                std::fs::write(&path, set.to_json()?)?;
                eprintln!(
                    "Captured {} cases for {family} to {}",
                    set.cases.len(),
                    path.display()
                );
            }
        }
        Command::Verify {
            fixture,
            report,
            log,
            timestamp,
        } => {
            let mut fixture_paths: Vec<PathBuf> = std::fs::read_dir(&fixture)?
                .filter_map(|entry| entry.ok().map(|entry| entry.path()))
                .filter(|path| path.extension().and_then(|s| s.to_str()) == Some("json"))
                .collect();
            fixture_paths.sort();

            let mut fixture_sets = Vec::new();
            for path in fixture_paths {
                match FixtureSet::from_file(&path) {
                    Ok(set) => fixture_sets.push(set),
                    Err(err) => eprintln!("Skipping {}: {}", path.display(), err),
                }
            }
            if fixture_sets.is_empty() {
                return Err(format!("No fixture JSON files found in {}", fixture.display()).into());
            }

            let runner = TestRunner::new("fixture-verify");
            let mut emitter = match &log {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    Some(LogEmitter::to_file(path, "fixture-verify", "run-1")?)
                }
                None => None,
            };

            let mut results = Vec::new();
            for set in &fixture_sets {
                let set_results = runner.run(set);
                if let Some(emitter) = emitter.as_mut() {
                    for r in &set_results {
                        let outcome = if r.passed { Outcome::Pass } else { Outcome::Fail };
                        let level = if r.passed {
                            LogLevel::Info
                        } else {
                            LogLevel::Error
                        };
                        emitter.emit_entry(
                            LogEntry::new("", level, "case_result")
                                .with_stream(StreamKind::Conformance)
                                .with_api(set.family.clone(), find_function(set, &r.case_name))
                                .with_case(r.case_name.clone())
                                .with_outcome(outcome),
                        )?;
                    }
                }
                results.extend(set_results);
            }

            let summary = VerificationSummary::from_results(results);
            let report_doc = ConformanceReport {
                title: String::from("nanolibc Conformance Report"),
                timestamp: timestamp
                    .unwrap_or_else(|| format!("{:?}", std::time::SystemTime::now())),
                summary,
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );

            if let Some(report_path) = report {
                if let Some(parent) = report_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                let markdown = report_doc.to_markdown();
                let json = report_doc.to_json();
                std::fs::write(&report_path, &markdown)?;
                let json_path = report_path.with_extension("json");
                std::fs::write(&json_path, &json)?;
                eprintln!("Wrote report to {}", report_path.display());

                if let Some(log_path) = &log {
                    let mut index = ArtifactIndex::new("run-1");
                    index.add(report_path.display().to_string(), "report_md", markdown.as_bytes());
                    index.add(json_path.display().to_string(), "report_json", json.as_bytes());
                    let index_path = log_path.with_extension("artifacts.json");
                    std::fs::write(&index_path, index.to_json()?)?;
                    eprintln!("Wrote artifact index to {}", index_path.display());
                }
            }

            if let Some(mut emitter) = emitter {
                emitter.flush()?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Diff { expected, actual } => {
            println!("{}", nanolibc_harness::diff::render_diff(&expected, &actual));
        }
    }

    Ok(())
}

fn find_function(set: &FixtureSet, case_name: &str) -> String {
    set.cases
        .iter()
        .find(|case| case.name == case_name)
        .map(|case| case.function.clone())
        .unwrap_or_default()
}
