//! golangci-lint output parser.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;
use crate::lint::types::{LintFinding, Linter};

/// golangci-lint console lines come in two shapes:
///
/// ```text
/// pkg/config/config.go:32:5: shadow: declaration of "err" shadows declaration at line 10 (govet)
/// config_test.go:66: unnecessary trailing newline (whitespace)
/// ```
///
/// The column token is optional. The description runs greedily up to the
/// trailing parenthesized linter name, so colons inside the message stay
/// intact.
static GOLINT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^:]*):(\d+):(?:(\d+):)? (.*) \((.*)\)$").unwrap());

/// Parse one line of golangci-lint console output.
///
/// A missing column is reported as `0`, not as a parse failure; a
/// non-numeric token in the line position is a failure, since that means
/// the format was not recognized rather than that data was absent.
pub fn parse_golint_line(line: &str) -> Result<LintFinding, ParseError> {
    let caps = GOLINT_LINE
        .captures(line)
        .ok_or(ParseError::NoMatch("golint"))?;

    let line_no = parse_number(&caps[2], "line number")?;
    let column = match caps.get(3) {
        Some(m) => parse_number(m.as_str(), "column number")?,
        None => 0,
    };

    Ok(LintFinding {
        linter: Linter::GoLint,
        path: caps[1].to_string(),
        line: line_no,
        column,
        description: caps[4].to_string(),
        severity: "error".to_string(),
        source: caps[5].to_string(),
    })
}

fn parse_number(value: &str, what: &'static str) -> Result<usize, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        linter: "golint",
        what,
        value: value.to_string(),
    })
}
