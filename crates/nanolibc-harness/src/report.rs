//! Report generation for conformance results.

use serde::{Deserialize, Serialize};

use crate::verify::VerificationSummary;

/// A conformance report combining verification results for one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Spec | Status |\n");
        out.push_str("|------|------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | {} |\n",
                r.case_name, r.spec_section, status
            ));
        }

        let failures: Vec<_> = self.summary.results.iter().filter(|r| !r.passed).collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n\n");
            for r in failures {
                out.push_str(&format!("### {}\n\n", r.case_name));
                if let Some(diff) = &r.diff {
                    out.push_str(&format!("```\n{diff}\n```\n"));
                }
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::verify::VerificationResult;

    fn report_with(results: Vec<VerificationResult>) -> ConformanceReport {
        ConformanceReport {
            title: "nanolibc Conformance Report".to_string(),
            timestamp: "2026-08-01T00:00:00Z".to_string(),
            summary: VerificationSummary::from_results(results),
        }
    }

    #[test]
    fn markdown_lists_every_case() {
        let report = report_with(vec![
            VerificationResult {
                case_name: "strlen_basic".to_string(),
                spec_section: "C17 7.24.6.3".to_string(),
                passed: true,
                expected: "5".to_string(),
                actual: "5".to_string(),
                diff: None,
            },
            VerificationResult {
                case_name: "atoi_plain".to_string(),
                spec_section: "C17 7.22.1.2".to_string(),
                passed: false,
                expected: "42".to_string(),
                actual: "41".to_string(),
                diff: Some("-42\n+41".to_string()),
            },
        ]);

        let md = report.to_markdown();
        assert!(md.contains("| strlen_basic | C17 7.24.6.3 | PASS |"));
        assert!(md.contains("| atoi_plain | C17 7.22.1.2 | FAIL |"));
        assert!(md.contains("## Failures"));
        assert!(md.contains("+41"));
    }

    #[test]
    fn json_round_trips() {
        let report = report_with(Vec::new());
        let parsed: ConformanceReport = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(parsed.title, "nanolibc Conformance Report");
        assert_eq!(parsed.summary.total, 0);
    }
}
