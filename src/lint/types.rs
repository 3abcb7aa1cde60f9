//! Core types for the lint module.
//!
//! This module contains the fundamental types used throughout the linting
//! system:
//! - `Linter` - Enum of supported linting tools
//! - `LintFinding` - A single normalized finding produced by a linter
//! - `LinterRunReport` - Outcome of one linter invocation
//! - `LintResults` - Combined results from running all configured linters

use serde::{Deserialize, Serialize};

// ============================================================================
// Core Types
// ============================================================================

/// Supported linting tools.
///
/// The registry is a fixed enumeration: a configured linter name either
/// resolves to one of these variants or is reported as unknown and
/// skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Linter {
    // Kotlin
    Detekt,

    // YAML
    YamlLint,

    // Go
    GoLint,
}

impl Linter {
    /// Every registered linter, in default configuration order.
    pub const ALL: [Linter; 3] = [Linter::Detekt, Linter::YamlLint, Linter::GoLint];

    pub fn as_str(&self) -> &'static str {
        match self {
            Linter::Detekt => "detekt",
            Linter::YamlLint => "yamllint",
            Linter::GoLint => "golint",
        }
    }

    /// Get the human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Linter::Detekt => "detekt",
            Linter::YamlLint => "yamllint",
            Linter::GoLint => "golint",
        }
    }

    /// Get the language this linter is for
    pub fn language(&self) -> &'static str {
        match self {
            Linter::Detekt => "kotlin",
            Linter::YamlLint => "yaml",
            Linter::GoLint => "go",
        }
    }

    /// The executable invoked for this linter
    pub fn program(&self) -> &'static str {
        match self {
            Linter::Detekt => "detekt",
            Linter::YamlLint => "yamllint",
            Linter::GoLint => "golangci-lint",
        }
    }

    /// File extensions the linter is fed.
    ///
    /// An empty slice means the tool discovers its own files and the
    /// dispatcher does not build a file list for it.
    pub fn file_extensions(&self) -> &'static [&'static str] {
        match self {
            Linter::Detekt => &[".kt"],
            Linter::YamlLint => &[".yaml", ".yml"],
            Linter::GoLint => &[],
        }
    }
}

impl std::str::FromStr for Linter {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "detekt" => Ok(Linter::Detekt),
            "yamllint" | "yaml-lint" => Ok(Linter::YamlLint),
            "golint" | "golangci-lint" | "golangci" => Ok(Linter::GoLint),
            _ => Err(()),
        }
    }
}

// ============================================================================
// Finding Types
// ============================================================================

/// A single normalized finding produced by a linter.
///
/// A finding is created the instant a raw output line matches its tool's
/// grammar and is never mutated afterwards. Parsing either fully succeeds
/// and yields a complete record, or fails and yields none; `0` for `line`
/// or `column` means the tool reported no position information, never that
/// a numeric field failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintFinding {
    /// Which linter reported this
    pub linter: Linter,

    /// File path exactly as reported by the tool
    pub path: String,

    /// Line number (0 = no line information)
    pub line: usize,

    /// Column number (0 = no column information)
    pub column: usize,

    /// Human-readable message, tool-specific formatting folded in
    pub description: String,

    /// The tool's own severity vocabulary ("error", "warning"); not
    /// unified across tools
    pub severity: String,

    /// Secondary classifier supplied by the tool (rule ID, category)
    pub source: String,
}

// ============================================================================
// Result Types
// ============================================================================

/// Outcome of one configured linter entry.
#[derive(Debug, Clone, Serialize)]
pub struct LinterRunReport {
    /// Configured linter name (kept verbatim so unknown entries are
    /// visible in the report)
    pub name: String,

    /// Number of findings parsed from this linter's output
    pub findings: usize,

    /// Output lines that matched no grammar and were dropped
    pub skipped_lines: usize,

    /// Duration in milliseconds
    pub duration_ms: u64,

    /// Why this linter produced no usable run, if it failed
    pub error: Option<String>,
}

/// Combined results from running all configured linters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintResults {
    /// All findings, concatenated in configuration order, preserving each
    /// tool's own output order
    pub findings: Vec<LintFinding>,

    /// One report per configured entry, in configuration order
    pub reports: Vec<LinterRunReport>,

    /// Findings whose severity is "error"
    pub error_count: usize,

    /// Findings whose severity is "warning"
    pub warning_count: usize,

    /// Total wall-clock duration in milliseconds
    pub duration_ms: u64,
}

impl LintResults {
    /// True when no linter produced a finding.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    /// Number of configured linters that failed to run.
    pub fn failed_linters(&self) -> usize {
        self.reports.iter().filter(|r| r.error.is_some()).count()
    }
}
