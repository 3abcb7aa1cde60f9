//! Linter aggregation.
//!
//! This module runs a configured set of external linters and merges their
//! heterogeneous text output into one normalized finding type:
//!
//! - **Kotlin**: detekt
//! - **YAML**: yamllint
//! - **Go**: golangci-lint
//!
//! Each tool gets an adapter (invocation convention) and an isolated line
//! parser (output grammar). The dispatcher fans out over the configured
//! linters and never lets one tool's failure abort the batch.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::path::Path;
//! use std::time::Duration;
//!
//! use lintmux::config::Settings;
//! use lintmux::exec::SystemExecutor;
//! use lintmux::lint::{render_results, run_all};
//!
//! let root = Path::new(".");
//! let settings = Settings::discover(root)?;
//! let exe = SystemExecutor::new(Duration::from_secs(settings.lint.timeout_secs));
//!
//! let results = run_all(&settings, &exe, root);
//! print!("{}", render_results(&results));
//! ```

// Submodules
pub mod adapters;
pub mod parsers;
mod registry;
mod reporter;
mod types;

// Re-export types for public API
pub use types::{LintFinding, LintResults, Linter, LinterRunReport};

// Re-export core functions
pub use adapters::{adapter_for, AdapterOutcome, LinterAdapter};
pub use parsers::{parse_detekt_line, parse_golint_line, parse_output_line, parse_yamllint_line};
pub use registry::run_all;
pub use reporter::{render_finding, render_findings, render_results};
