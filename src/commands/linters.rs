//! Linters command handler - list registered linters and availability

use std::fmt::Write;

use crate::cli::{LintersArgs, OutputFormat};
use crate::commands::CommandContext;
use crate::error::Result;
use crate::lint::Linter;

/// Run the linters command
pub fn run_linters(_args: &LintersArgs, ctx: &CommandContext) -> Result<String> {
    let rows: Vec<LinterRow> = Linter::ALL.iter().map(LinterRow::probe).collect();

    match ctx.format {
        OutputFormat::Text => Ok(render_text(&rows)),
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "_type": "linters",
                "linters": rows,
            });
            let mut text = serde_json::to_string_pretty(&payload)?;
            text.push('\n');
            Ok(text)
        }
    }
}

#[derive(Debug, serde::Serialize)]
struct LinterRow {
    name: &'static str,
    language: &'static str,
    program: &'static str,
    extensions: &'static [&'static str],
    available: bool,
}

impl LinterRow {
    fn probe(linter: &Linter) -> Self {
        Self {
            name: linter.as_str(),
            language: linter.language(),
            program: linter.program(),
            extensions: linter.file_extensions(),
            available: which::which(linter.program()).is_ok(),
        }
    }
}

fn render_text(rows: &[LinterRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let status = if row.available {
            "available"
        } else {
            "not installed"
        };
        let _ = writeln!(
            out,
            "{:<10} {:<8} {} ({})",
            row.name, row.language, status, row.program
        );
    }
    out
}
