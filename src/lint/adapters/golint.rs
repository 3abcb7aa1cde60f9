//! golangci-lint adapter.

use crate::error::AdapterError;
use crate::exec::Executor;
use crate::lint::adapters::{parse_lines, AdapterOutcome, LinterAdapter};
use crate::lint::parsers::parse_golint_line;
use crate::lint::types::Linter;

/// Runs golangci-lint over the whole module tree.
///
/// golangci-lint resolves its own file set from `./...`, so this adapter
/// takes no file list; include/exclude filtering belongs in the tool's
/// own configuration.
pub struct GoLintAdapter;

impl LinterAdapter for GoLintAdapter {
    fn linter(&self) -> Linter {
        Linter::GoLint
    }

    fn run(&self, exe: &dyn Executor, _files: &[String]) -> Result<AdapterOutcome, AdapterError> {
        // Non-zero exit means findings were written; parse whatever came
        // back either way.
        let out = exe.run("golangci-lint", &["run", "./..."])?;
        if !out.success() {
            tracing::debug!("golangci-lint exited with {:?}", out.status);
        }

        Ok(parse_lines(&out.combined, parse_golint_line))
    }
}
