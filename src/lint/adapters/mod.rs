//! Per-tool linter adapters.
//!
//! An adapter owns one external tool's invocation convention: the command
//! line it is run with, which stream (or report file) its findings come
//! back on, and which line grammar turns raw output into findings. An
//! adapter holds no state between invocations.

mod detekt;
mod golint;
mod yamllint;

pub use detekt::DetektAdapter;
pub use golint::GoLintAdapter;
pub use yamllint::YamlLintAdapter;

use crate::error::AdapterError;
use crate::exec::Executor;
use crate::lint::types::{LintFinding, Linter};

/// Findings and drop counts from one adapter invocation.
#[derive(Debug, Default)]
pub struct AdapterOutcome {
    /// Findings in the tool's own output order
    pub findings: Vec<LintFinding>,

    /// Non-empty output lines that matched no grammar and were dropped
    pub skipped_lines: usize,
}

/// One external linter's invocation wrapper.
pub trait LinterAdapter: Sync {
    /// Which registered linter this adapter runs
    fn linter(&self) -> Linter;

    /// Run the tool against the given file list and parse its output.
    ///
    /// `files` is the pre-filtered file list for this tool's extensions;
    /// adapters whose tool does its own file discovery ignore it. A tool
    /// exiting non-zero is not a failure (that conventionally means
    /// findings exist); produced output is always parsed. Lines that
    /// match no grammar are dropped and counted, never raised.
    fn run(&self, exe: &dyn Executor, files: &[String]) -> Result<AdapterOutcome, AdapterError>;
}

/// Resolve a registered linter to its adapter.
pub fn adapter_for(linter: Linter) -> &'static dyn LinterAdapter {
    match linter {
        Linter::Detekt => &DetektAdapter,
        Linter::YamlLint => &YamlLintAdapter,
        Linter::GoLint => &GoLintAdapter,
    }
}

/// Apply one parser over every line of raw tool output.
pub(crate) fn parse_lines<F>(raw: &str, parse: F) -> AdapterOutcome
where
    F: Fn(&str) -> Result<LintFinding, crate::error::ParseError>,
{
    let mut outcome = AdapterOutcome::default();
    for line in raw.lines() {
        if line.trim().is_empty() {
            continue;
        }
        match parse(line) {
            Ok(finding) => outcome.findings.push(finding),
            Err(err) => {
                tracing::trace!("dropping unparsed line: {}", err);
                outcome.skipped_lines += 1;
            }
        }
    }
    outcome
}
