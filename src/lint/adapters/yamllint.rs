//! yamllint adapter.

use crate::error::AdapterError;
use crate::exec::Executor;
use crate::lint::adapters::{parse_lines, AdapterOutcome, LinterAdapter};
use crate::lint::parsers::parse_yamllint_line;
use crate::lint::types::Linter;

/// Runs yamllint in parsable mode over the discovered YAML files.
pub struct YamlLintAdapter;

impl LinterAdapter for YamlLintAdapter {
    fn linter(&self) -> Linter {
        Linter::YamlLint
    }

    fn run(&self, exe: &dyn Executor, files: &[String]) -> Result<AdapterOutcome, AdapterError> {
        if files.is_empty() {
            tracing::debug!("no YAML files to lint, skipping yamllint");
            return Ok(AdapterOutcome::default());
        }

        let mut args = vec!["-f", "parsable"];
        args.extend(files.iter().map(String::as_str));

        // Non-zero exit means findings were written; parse whatever came
        // back either way.
        let out = exe.run("yamllint", &args)?;
        if !out.success() {
            tracing::debug!("yamllint exited with {:?}", out.status);
        }

        Ok(parse_lines(&out.combined, parse_yamllint_line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExecError;
    use crate::exec::mock::MockExecutor;
    use crate::exec::CommandOutput;

    #[test]
    fn test_run_parses_each_line() {
        let exe = MockExecutor::with_output(
            "./test/weird.yml:1:1: [warning] missing document start \"---\" (document-start)\n\
             ./test/weird.yml:2:1: [warning] truthy value should be one of [false, true] (truthy)\n",
        );
        let files = vec!["test/weird.yml".to_string()];

        let outcome = YamlLintAdapter.run(&exe, &files).unwrap();

        assert_eq!(outcome.findings.len(), 2);
        assert_eq!(outcome.findings[0].linter, Linter::YamlLint);
        assert_eq!(outcome.findings[0].path, "./test/weird.yml");
        assert_eq!(outcome.skipped_lines, 0);

        let calls = exe.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "yamllint");
        assert_eq!(calls[0].1, vec!["-f", "parsable", "test/weird.yml"]);
    }

    #[test]
    fn test_findings_survive_non_zero_exit() {
        let exe = MockExecutor::new(|_, _| {
            Ok(CommandOutput {
                combined: "test.yaml:1:8: [error] no new line character at the end of file \
                           (new-line-at-end-of-file)\n"
                    .to_string(),
                status: Some(1),
            })
        });

        let outcome = YamlLintAdapter
            .run(&exe, &["test.yaml".to_string()])
            .unwrap();
        assert_eq!(outcome.findings.len(), 1);
    }

    #[test]
    fn test_banner_lines_are_dropped_not_fatal() {
        let exe = MockExecutor::with_output(
            "yamllint 1.33.0\n\
             test.yaml:1:8: [error] no new line character at the end of file \
             (new-line-at-end-of-file)\n",
        );

        let outcome = YamlLintAdapter
            .run(&exe, &["test.yaml".to_string()])
            .unwrap();
        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.skipped_lines, 1);
    }

    #[test]
    fn test_launch_failure_is_an_adapter_error() {
        let exe = MockExecutor::failing("yamllint not installed");

        let err = YamlLintAdapter
            .run(&exe, &["test.yaml".to_string()])
            .unwrap_err();
        assert!(matches!(err, AdapterError::Exec(ExecError::Launch { .. })));
    }

    #[test]
    fn test_no_yaml_files_skips_invocation() {
        let exe = MockExecutor::with_output("");
        let outcome = YamlLintAdapter.run(&exe, &[]).unwrap();

        assert!(outcome.findings.is_empty());
        assert!(exe.calls().is_empty());
    }
}
