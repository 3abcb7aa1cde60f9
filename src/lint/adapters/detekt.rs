//! detekt adapter.

use std::fs;

use crate::error::AdapterError;
use crate::exec::Executor;
use crate::lint::adapters::{parse_lines, AdapterOutcome, LinterAdapter};
use crate::lint::parsers::parse_detekt_line;
use crate::lint::types::Linter;

/// Runs detekt over the discovered Kotlin files.
///
/// detekt cannot put its findings on stdout, so the adapter points it at
/// a per-invocation temporary report file and reads that back. The file
/// is scoped to the invocation and removed on every exit path, including
/// a tool failure, since detekt exits non-zero whenever it has findings
/// and usually leaves a usable report behind.
pub struct DetektAdapter;

impl LinterAdapter for DetektAdapter {
    fn linter(&self) -> Linter {
        Linter::Detekt
    }

    fn run(&self, exe: &dyn Executor, files: &[String]) -> Result<AdapterOutcome, AdapterError> {
        if files.is_empty() {
            tracing::debug!("no Kotlin files to lint, skipping detekt");
            return Ok(AdapterOutcome::default());
        }

        // Scoped directory rather than a pre-created file: the report
        // only exists if detekt actually wrote it, and the directory is
        // removed on every exit path.
        let scratch = tempfile::Builder::new()
            .prefix("detekt-")
            .tempdir()
            .map_err(|source| AdapterError::ReportCreate {
                linter: "detekt",
                source,
            })?;
        let report = scratch.path().join("detekt.out");
        let report_path = report.to_string_lossy().into_owned();

        let input = files.join(",");
        let report_arg = format!("md:{}", report_path);
        match exe.run("detekt", &["-i", &input, "-r", &report_arg]) {
            Ok(out) if !out.success() => {
                tracing::debug!("detekt exited with {:?}, reading report anyway", out.status);
            }
            Ok(_) => {}
            // The report may still have been produced; only failing to
            // read it back is fatal for this adapter.
            Err(err) => tracing::warn!("detekt invocation failed: {}", err),
        }

        let raw = fs::read_to_string(&report).map_err(|source| AdapterError::ReportRead {
            linter: "detekt",
            path: report_path,
            source,
        })?;

        Ok(parse_lines(&raw, parse_detekt_line))
    }
}
