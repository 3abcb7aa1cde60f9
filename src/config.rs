//! Configuration loading for lintmux.
//!
//! Settings live in a `lintmux.toml` at the repository root:
//!
//! ```toml
//! [lint]
//! exclude = ["^vendor/"]
//! timeout_secs = 300
//!
//! [[lint.linters]]
//! name = "yamllint"
//! exclude = ["^charts/"]
//!
//! [[lint.linters]]
//! name = "detekt"
//! include = ["^src/"]
//! ```
//!
//! A missing config file is not an error; the defaults enable every
//! registered linter with no path filters.

use std::fs;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{LintMuxError, Result};
use crate::lint::Linter;

/// Config file name looked up at the repository root.
pub const CONFIG_FILE: &str = "lintmux.toml";

const DEFAULT_TIMEOUT_SECS: u64 = 600;

/// Configuration settings for lintmux.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub lint: LintSettings,
}

/// Settings for the linting process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintSettings {
    /// Linters to run, in order
    #[serde(default = "default_linters")]
    pub linters: Vec<LinterSettings>,

    /// Path patterns (regex) excluded for every linter
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Per-invocation timeout for external tools
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for LintSettings {
    fn default() -> Self {
        Self {
            linters: default_linters(),
            exclude: Vec::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Settings for one configured linter entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinterSettings {
    /// Registry name of the linter
    pub name: String,

    /// Path patterns (regex); when non-empty, only matching files are fed
    /// to the linter
    #[serde(default)]
    pub include: Vec<String>,

    /// Path patterns (regex) excluded for this linter
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl LinterSettings {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

fn default_linters() -> Vec<LinterSettings> {
    Linter::ALL
        .iter()
        .map(|l| LinterSettings::named(l.as_str()))
        .collect()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Settings {
    /// Read settings from the given file.
    pub fn load(path: &Path) -> Result<Settings> {
        let data = fs::read_to_string(path).map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                LintMuxError::ConfigNotFound {
                    path: path.display().to_string(),
                }
            } else {
                LintMuxError::Io(err)
            }
        })?;

        toml::from_str(&data).map_err(|err| LintMuxError::ConfigParse {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }

    /// Load `lintmux.toml` from the repository root, falling back to
    /// defaults when no config file exists.
    pub fn discover(root: &Path) -> Result<Settings> {
        let path = root.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            tracing::debug!("no {} found, using default settings", CONFIG_FILE);
            Ok(Settings::default())
        }
    }
}

/// Compile a pattern list, dropping invalid entries with a warning.
///
/// Filtering is advisory; a bad pattern must not take the linter run
/// down.
pub fn compile_patterns(patterns: &[String]) -> Vec<Regex> {
    patterns
        .iter()
        .filter_map(|pattern| match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(err) => {
                tracing::warn!("ignoring invalid path pattern {:?}: {}", pattern, err);
                None
            }
        })
        .collect()
}

/// Apply include/exclude pattern filtering to a discovered file list.
pub fn filter_files(
    files: Vec<String>,
    include: &[Regex],
    exclude: &[Regex],
) -> Vec<String> {
    files
        .into_iter()
        .filter(|file| {
            (include.is_empty() || include.iter().any(|re| re.is_match(file)))
                && !exclude.iter().any(|re| re.is_match(file))
        })
        .collect()
}
