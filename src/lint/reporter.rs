//! Rendering of aggregated findings.
//!
//! Pure formatting, no decision logic: one line per finding plus a
//! summary, leaving exit-code policy to the caller.

use std::fmt::Write;

use crate::lint::types::{LintFinding, LintResults};

/// Render one finding as `path:line:column: description: severity`.
pub fn render_finding(finding: &LintFinding) -> String {
    format!(
        "{}:{}:{}: {}: {}",
        finding.path, finding.line, finding.column, finding.description, finding.severity
    )
}

/// Render all findings, one line each.
pub fn render_findings(findings: &[LintFinding]) -> String {
    let mut out = String::new();
    for finding in findings {
        let _ = writeln!(out, "{}", render_finding(finding));
    }
    out
}

/// Render findings followed by a summary line.
pub fn render_results(results: &LintResults) -> String {
    let mut out = render_findings(&results.findings);

    if results.is_clean() {
        let _ = writeln!(out, "No lint findings.");
    } else {
        let _ = writeln!(
            out,
            "Found {} findings ({} errors, {} warnings) in {}ms.",
            results.findings.len(),
            results.error_count,
            results.warning_count,
            results.duration_ms
        );
    }

    let failed = results.failed_linters();
    if failed > 0 {
        let _ = writeln!(out, "{} of {} linters failed to run:", failed, results.reports.len());
        for report in results.reports.iter().filter(|r| r.error.is_some()) {
            let _ = writeln!(
                out,
                "  {}: {}",
                report.name,
                report.error.as_deref().unwrap_or_default()
            );
        }
    }

    out
}
