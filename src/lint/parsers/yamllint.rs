//! yamllint output parser.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;
use crate::lint::types::{LintFinding, Linter};

/// yamllint `--format parsable` lines look like:
///
/// ```text
/// file.yaml:10:5: [warning] too many spaces after colon (colons)
/// file.yaml:1:8: [error] no new line character at the end of file (new-line-at-end-of-file)
/// ```
static YAMLLINT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^:]*):(\d+):(\d+): \[(.*)\] (.*) \((.*)\)$").unwrap());

/// Parse one line of yamllint parsable output.
///
/// All five captured fields map directly onto the finding; the trailing
/// parenthesized rule name becomes the source. The description keeps any
/// inner parentheses of its own.
pub fn parse_yamllint_line(line: &str) -> Result<LintFinding, ParseError> {
    let caps = YAMLLINT_LINE
        .captures(line)
        .ok_or(ParseError::NoMatch("yamllint"))?;

    let line_no = parse_number(&caps[2], "line number")?;
    let column = parse_number(&caps[3], "column number")?;

    Ok(LintFinding {
        linter: Linter::YamlLint,
        path: caps[1].to_string(),
        line: line_no,
        column,
        description: caps[5].to_string(),
        severity: caps[4].to_string(),
        source: caps[6].to_string(),
    })
}

fn parse_number(value: &str, what: &'static str) -> Result<usize, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        linter: "yamllint",
        what,
        value: value.to_string(),
    })
}
