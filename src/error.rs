//! Error types and exit codes for lintmux

use std::io;
use std::process::ExitCode;

use thiserror::Error;

/// Top-level error type for lintmux operations.
///
/// Per-linter conditions never surface here: a linter that cannot be
/// started, times out, or emits unparseable lines is recorded on its run
/// report and the batch keeps going. Only catastrophic conditions (bad
/// configuration, unusable working directory) abort the process.
#[derive(Error, Debug)]
pub enum LintMuxError {
    #[error("Config file not found: {path}")]
    ConfigNotFound { path: String },

    #[error("Failed to parse {path}: {message}")]
    ConfigParse { path: String, message: String },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl LintMuxError {
    /// Convert error to the process exit code:
    /// - 0: success, no findings
    /// - 1: findings reported, or IO error
    /// - 2: configuration error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::ConfigNotFound { .. } => ExitCode::from(2),
            Self::ConfigParse { .. } => ExitCode::from(2),
            Self::Json(_) => ExitCode::from(1),
            Self::Io(_) => ExitCode::from(1),
        }
    }
}

/// Result type alias for lintmux operations
pub type Result<T> = std::result::Result<T, LintMuxError>;

/// One raw output line did not match a tool's grammar.
///
/// Adapters drop such lines silently (banner and progress noise is
/// expected between findings) and only keep a count for observability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("line does not match {0} output format")]
    NoMatch(&'static str),

    #[error("invalid {what} in {linter} output: {value}")]
    InvalidNumber {
        linter: &'static str,
        what: &'static str,
        value: String,
    },
}

/// An external command could not produce usable output.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("failed to start {program}: {source}")]
    Launch { program: String, source: io::Error },

    #[error("{program} timed out after {secs}s")]
    TimedOut { program: String, secs: u64 },

    #[error("failed to capture output of {program}: {source}")]
    Capture { program: String, source: io::Error },
}

/// A single linter invocation failed.
///
/// Reported per-adapter by the dispatcher; never aborts the remaining
/// linters. A non-zero exit from the tool itself is not an error at this
/// level, since linters conventionally exit non-zero when they find
/// issues.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error(transparent)]
    Exec(#[from] ExecError),

    #[error("failed to create {linter} report file: {source}")]
    ReportCreate { linter: &'static str, source: io::Error },

    #[error("failed to read {linter} report {path}: {source}")]
    ReportRead {
        linter: &'static str,
        path: String,
        source: io::Error,
    },
}
