//! Output parsers for the supported linting tools.
//!
//! Each submodule holds one tool's line grammar as an isolated,
//! independently tested pure function. A parser either produces a complete
//! finding from one raw output line or fails; partial records are never
//! returned.

pub mod detekt;
pub mod golint;
pub mod yamllint;

pub use detekt::parse_detekt_line;
pub use golint::parse_golint_line;
pub use yamllint::parse_yamllint_line;

use crate::error::ParseError;
use crate::lint::types::{LintFinding, Linter};

/// Parse one raw output line with the grammar of the given linter.
pub fn parse_output_line(linter: Linter, line: &str) -> Result<LintFinding, ParseError> {
    match linter {
        Linter::Detekt => parse_detekt_line(line),
        Linter::YamlLint => parse_yamllint_line(line),
        Linter::GoLint => parse_golint_line(line),
    }
}
