//! lintmux: linter aggregator that normalizes external linter output
//!
//! This library runs a configured set of external linters (detekt,
//! yamllint, golangci-lint), parses each tool's plain-text output into a
//! normalized [`LintFinding`], and merges results across tools without
//! letting one tool's failure abort the batch.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use std::time::Duration;
//!
//! use lintmux::{render_results, run_all, Settings, SystemExecutor};
//!
//! let root = Path::new(".");
//! let settings = Settings::discover(root)?;
//! let exe = SystemExecutor::new(Duration::from_secs(settings.lint.timeout_secs));
//!
//! let results = run_all(&settings, &exe, root);
//! print!("{}", render_results(&results));
//! if !results.is_clean() {
//!     std::process::exit(1);
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod exec;
pub mod files;
pub mod lint;

// Re-export commonly used types
pub use cli::{Cli, Commands, OutputFormat};
pub use config::{LintSettings, LinterSettings, Settings};
pub use error::{AdapterError, ExecError, LintMuxError, ParseError, Result};
pub use exec::{CommandOutput, Executor, SystemExecutor};
pub use lint::{
    parse_output_line, render_finding, render_findings, render_results, run_all, LintFinding,
    LintResults, Linter, LinterRunReport,
};
