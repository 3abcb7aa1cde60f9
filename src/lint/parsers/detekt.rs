//! detekt output parser.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;
use crate::lint::types::{LintFinding, Linter};

/// detekt markdown report lines look like:
///
/// ```text
/// MagicNumber - [<anonymous>] at /path/to/App.kt:423:4
/// LongMethod - 116/60 - [someFunction] at /path/to/App.kt:78:11
/// ```
///
/// The segment before the bracketed context may itself contain ` - `
/// separated detail (rule threshold), which stays part of the rule text.
static DETEKT_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*(.*)\s*-\s*\[(.*)\]\s*at\s*(.*):(\d+):(\d+)$").unwrap());

/// Parse one line of detekt report output.
///
/// The description folds the rule text and the bracketed context together
/// as `"<rule> in <context>"`. detekt reports no severity of its own, so
/// every finding is an error attributed to the `detekt` rule source.
pub fn parse_detekt_line(line: &str) -> Result<LintFinding, ParseError> {
    let caps = DETEKT_LINE
        .captures(line)
        .ok_or(ParseError::NoMatch("detekt"))?;

    let rule = caps[1].trim_end();
    let context = &caps[2];
    let line_no = parse_number(&caps[4], "line number")?;
    let column = parse_number(&caps[5], "column number")?;

    Ok(LintFinding {
        linter: Linter::Detekt,
        path: caps[3].to_string(),
        line: line_no,
        column,
        description: format!("{} in {}", rule, context),
        severity: "error".to_string(),
        source: "detekt".to_string(),
    })
}

fn parse_number(value: &str, what: &'static str) -> Result<usize, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidNumber {
        linter: "detekt",
        what,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_with_line_and_column() {
        let finding =
            parse_detekt_line("MagicNumber - [<anonymous>] at /a/b/App.kt:423:4").unwrap();

        assert_eq!(finding.linter, Linter::Detekt);
        assert_eq!(finding.path, "/a/b/App.kt");
        assert_eq!(finding.line, 423);
        assert_eq!(finding.column, 4);
        assert_eq!(finding.description, "MagicNumber in <anonymous>");
        assert_eq!(finding.severity, "error");
        assert_eq!(finding.source, "detekt");
    }

    #[test]
    fn test_parse_line_with_rule_detail_segment() {
        let finding = parse_detekt_line(
            "LongMethod - 116/60 - [platformsResourceDocumentation] at \
             /work/git/test-app/src/main/kotlin/no/acme/test/App.kt:78:11",
        )
        .unwrap();

        assert_eq!(
            finding.path,
            "/work/git/test-app/src/main/kotlin/no/acme/test/App.kt"
        );
        assert_eq!(finding.line, 78);
        assert_eq!(finding.column, 11);
        assert_eq!(
            finding.description,
            "LongMethod - 116/60 in platformsResourceDocumentation"
        );
    }

    #[test]
    fn test_wrong_keyword_is_no_match() {
        // "av" instead of "at" before the position
        let result = parse_detekt_line(
            "LongMethod - 116/60 - [platformsResourceDocumentation] av /a/b/App.kt:78:11",
        );
        assert_eq!(result, Err(ParseError::NoMatch("detekt")));
    }

    #[test]
    fn test_non_numeric_line_is_a_failure() {
        // A malformed line number must not become a zero-substituted finding
        let result = parse_detekt_line("MagicNumber - [<anonymous>] at /a/b/App.kt:12A:4");
        assert!(result.is_err());
    }

    #[test]
    fn test_non_numeric_column_is_a_failure() {
        let result = parse_detekt_line("MagicNumber - [<anonymous>] at /a/b/App.kt:423:X");
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_and_banner_lines_do_not_match() {
        assert!(parse_detekt_line("").is_err());
        assert!(parse_detekt_line("# Findings (3)").is_err());
    }
}
