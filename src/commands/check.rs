//! Check command handler - run the configured linters and report findings

use std::time::Duration;

use crate::cli::{CheckArgs, OutputFormat};
use crate::commands::CommandContext;
use crate::config::{LinterSettings, Settings};
use crate::error::Result;
use crate::exec::SystemExecutor;
use crate::lint::{render_results, run_all};

/// What the check produced; the caller turns `clean` into the exit code.
pub struct CheckOutcome {
    pub output: String,
    pub clean: bool,
}

/// Run the check command
pub fn run_check(args: &CheckArgs, ctx: &CommandContext) -> Result<CheckOutcome> {
    let root = match &args.path {
        Some(path) => path.clone(),
        None => std::env::current_dir()?,
    };

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::discover(&root)?,
    };

    if let Some(name) = &args.linter {
        restrict_to_linter(&mut settings, name);
    }

    if ctx.verbose {
        let names: Vec<&str> = settings
            .lint
            .linters
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        tracing::debug!("running linters: {}", names.join(", "));
    }

    let exe =
        SystemExecutor::new(Duration::from_secs(settings.lint.timeout_secs)).with_cwd(&root);
    let results = run_all(&settings, &exe, &root);

    let output = match ctx.format {
        OutputFormat::Text => render_results(&results),
        OutputFormat::Json => {
            let payload = serde_json::json!({
                "_type": "lint_check",
                "clean": results.is_clean(),
                "error_count": results.error_count,
                "warning_count": results.warning_count,
                "duration_ms": results.duration_ms,
                "findings": &results.findings,
                "linters": &results.reports,
            });
            let mut text = serde_json::to_string_pretty(&payload)?;
            text.push('\n');
            text
        }
    };

    Ok(CheckOutcome {
        output,
        clean: results.is_clean(),
    })
}

/// Keep only the named entry; a linter that is registered but absent from
/// the configuration still runs when requested explicitly.
fn restrict_to_linter(settings: &mut Settings, name: &str) {
    settings.lint.linters.retain(|l| l.name == name);
    if settings.lint.linters.is_empty() {
        settings.lint.linters.push(LinterSettings::named(name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CheckArgs;
    use std::fs;

    fn check_args(dir: &std::path::Path) -> CheckArgs {
        CheckArgs {
            path: Some(dir.to_path_buf()),
            linter: None,
            config: None,
        }
    }

    #[test]
    fn test_restrict_keeps_configured_entry() {
        let mut settings = Settings::default();
        restrict_to_linter(&mut settings, "yamllint");

        assert_eq!(settings.lint.linters.len(), 1);
        assert_eq!(settings.lint.linters[0].name, "yamllint");
    }

    #[test]
    fn test_restrict_adds_unconfigured_name() {
        let mut settings = Settings::default();
        settings.lint.linters.clear();
        restrict_to_linter(&mut settings, "detekt");

        assert_eq!(settings.lint.linters.len(), 1);
        assert_eq!(settings.lint.linters[0].name, "detekt");
    }

    #[test]
    fn test_check_on_empty_repo_is_clean() {
        // No lintable files: detekt and yamllint skip, golangci-lint is
        // not installed in the test environment and fails non-fatally.
        let dir = tempfile::tempdir().unwrap();
        let args = CheckArgs {
            linter: Some("yamllint".to_string()),
            ..check_args(dir.path())
        };

        let outcome = run_check(&args, &CommandContext::default()).unwrap();
        assert!(outcome.clean);
        assert!(outcome.output.contains("No lint findings."));
    }

    #[test]
    fn test_check_honors_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("custom.toml");
        fs::write(&config, "[lint]\nlinters = []\n").unwrap();

        let args = CheckArgs {
            config: Some(config),
            ..check_args(dir.path())
        };

        let outcome = run_check(&args, &CommandContext::default()).unwrap();
        assert!(outcome.clean);
    }

    #[test]
    fn test_check_json_output_shape() {
        let dir = tempfile::tempdir().unwrap();
        let ctx = CommandContext {
            format: OutputFormat::Json,
            verbose: false,
        };
        let args = CheckArgs {
            linter: Some("yamllint".to_string()),
            ..check_args(dir.path())
        };

        let outcome = run_check(&args, &ctx).unwrap();
        let value: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();

        assert_eq!(value["_type"], "lint_check");
        assert_eq!(value["clean"], true);
        assert!(value["findings"].as_array().unwrap().is_empty());
    }
}
