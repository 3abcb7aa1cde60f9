//! Linter dispatch and result aggregation.
//!
//! The dispatcher resolves each configured linter name against the fixed
//! adapter registry and runs every resolvable entry, collecting findings
//! into one batch. No single linter can abort the batch: unknown names,
//! launch failures, and timeouts are recorded on that entry's run report
//! and the rest of the suite still runs.

use std::path::Path;
use std::time::Instant;

use rayon::prelude::*;

use crate::config::{compile_patterns, filter_files, LinterSettings, Settings};
use crate::exec::Executor;
use crate::files::list_files;
use crate::lint::adapters::adapter_for;
use crate::lint::types::{LintFinding, LintResults, Linter, LinterRunReport};

/// Run every configured linter and aggregate the findings.
///
/// Adapters are independent, so entries fan out across a rayon pool; the
/// collected results keep configuration order, and each tool's findings
/// keep that tool's own output order.
pub fn run_all(settings: &Settings, exe: &dyn Executor, root: &Path) -> LintResults {
    let start = Instant::now();
    let global_exclude = compile_patterns(&settings.lint.exclude);

    let jobs: Vec<Job> = settings
        .lint
        .linters
        .iter()
        .map(|entry| prepare_job(entry, root, &global_exclude))
        .collect();

    let runs: Vec<(LinterRunReport, Vec<LintFinding>)> = jobs
        .par_iter()
        .map(|job| execute_job(job, exe))
        .collect();

    let mut results = LintResults::default();
    for (report, findings) in runs {
        results.findings.extend(findings);
        results.reports.push(report);
    }

    results.error_count = count_severity(&results.findings, "error");
    results.warning_count = count_severity(&results.findings, "warning");
    results.duration_ms = start.elapsed().as_millis() as u64;
    results
}

enum Job {
    /// Configured name with no registered adapter
    Unknown(String),

    /// Resolved adapter plus its pre-filtered file list
    Run {
        name: String,
        linter: Linter,
        files: Vec<String>,
    },
}

fn prepare_job(entry: &LinterSettings, root: &Path, global_exclude: &[regex::Regex]) -> Job {
    let linter = match entry.name.parse::<Linter>() {
        Ok(linter) => linter,
        Err(()) => {
            tracing::warn!("Linter {} not found", entry.name);
            return Job::Unknown(entry.name.clone());
        }
    };

    let extensions = linter.file_extensions();
    let files = if extensions.is_empty() {
        // The tool discovers its own files
        Vec::new()
    } else {
        let include = compile_patterns(&entry.include);
        let mut exclude = compile_patterns(&entry.exclude);
        exclude.extend(global_exclude.iter().cloned());
        filter_files(list_files(root, extensions), &include, &exclude)
    };

    Job::Run {
        name: entry.name.clone(),
        linter,
        files,
    }
}

fn execute_job(job: &Job, exe: &dyn Executor) -> (LinterRunReport, Vec<LintFinding>) {
    match job {
        Job::Unknown(name) => (
            LinterRunReport {
                name: name.clone(),
                findings: 0,
                skipped_lines: 0,
                duration_ms: 0,
                error: Some("not registered".to_string()),
            },
            Vec::new(),
        ),
        Job::Run {
            name,
            linter,
            files,
        } => {
            let start = Instant::now();
            match adapter_for(*linter).run(exe, files) {
                Ok(outcome) => (
                    LinterRunReport {
                        name: name.clone(),
                        findings: outcome.findings.len(),
                        skipped_lines: outcome.skipped_lines,
                        duration_ms: start.elapsed().as_millis() as u64,
                        error: None,
                    },
                    outcome.findings,
                ),
                Err(err) => {
                    tracing::warn!("{} failed: {}", linter.display_name(), err);
                    (
                        LinterRunReport {
                            name: name.clone(),
                            findings: 0,
                            skipped_lines: 0,
                            duration_ms: start.elapsed().as_millis() as u64,
                            error: Some(err.to_string()),
                        },
                        Vec::new(),
                    )
                }
            }
        }
    }
}

fn count_severity(findings: &[LintFinding], severity: &str) -> usize {
    findings
        .iter()
        .filter(|f| f.severity.eq_ignore_ascii_case(severity))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LintSettings;
    use crate::exec::mock::MockExecutor;
    use crate::exec::CommandOutput;
    use std::fs;

    fn settings_for(names: &[&str]) -> Settings {
        Settings {
            lint: LintSettings {
                linters: names.iter().map(|n| LinterSettings::named(n)).collect(),
                ..Default::default()
            },
        }
    }

    fn repo_with_yaml() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("test.yaml"), "key: value\n").unwrap();
        dir
    }

    #[test]
    fn test_one_failing_linter_does_not_abort_the_batch() {
        let dir = repo_with_yaml();
        // yamllint answers; golangci-lint fails to launch
        let exe = MockExecutor::new(|program, _| match program {
            "yamllint" => Ok(CommandOutput {
                combined: "test.yaml:1:8: [error] no new line character at the end of file \
                           (new-line-at-end-of-file)\n"
                    .to_string(),
                status: Some(1),
            }),
            _ => Err(crate::error::ExecError::Launch {
                program: program.to_string(),
                source: std::io::Error::other("not installed"),
            }),
        });

        let results = run_all(&settings_for(&["yamllint", "golint"]), &exe, dir.path());

        assert_eq!(results.findings.len(), 1);
        assert_eq!(results.findings[0].linter, Linter::YamlLint);
        assert_eq!(results.reports.len(), 2);
        assert!(results.reports[0].error.is_none());
        assert!(results.reports[1].error.is_some());
        assert_eq!(results.failed_linters(), 1);
    }

    #[test]
    fn test_unknown_linter_is_skipped_not_fatal() {
        let dir = repo_with_yaml();
        let exe = MockExecutor::with_output(
            "test.yaml:1:1: [warning] missing document start \"---\" (document-start)\n",
        );

        let results = run_all(&settings_for(&["megalinter", "yamllint"]), &exe, dir.path());

        assert_eq!(results.findings.len(), 1);
        assert_eq!(results.reports[0].name, "megalinter");
        assert_eq!(results.reports[0].error.as_deref(), Some("not registered"));
        assert!(results.reports[1].error.is_none());
        // Only yamllint was actually invoked
        assert_eq!(exe.calls().len(), 1);
    }

    #[test]
    fn test_findings_keep_configuration_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.yaml"), "").unwrap();
        fs::write(dir.path().join("app.kt"), "").unwrap();

        let exe = MockExecutor::new(|program, args| match program {
            "detekt" => {
                let report = args
                    .iter()
                    .find_map(|a| a.strip_prefix("md:"))
                    .expect("no report path");
                fs::write(report, "MagicNumber - [<anonymous>] at app.kt:1:1\n").unwrap();
                Ok(CommandOutput::default())
            }
            _ => Ok(CommandOutput {
                combined: "a.yaml:1:1: [warning] missing document start \"---\" (document-start)\n"
                    .to_string(),
                status: Some(0),
            }),
        });

        let results = run_all(&settings_for(&["yamllint", "detekt"]), &exe, dir.path());

        assert_eq!(results.findings.len(), 2);
        assert_eq!(results.findings[0].linter, Linter::YamlLint);
        assert_eq!(results.findings[1].linter, Linter::Detekt);
    }

    #[test]
    fn test_severity_totals() {
        let dir = repo_with_yaml();
        let exe = MockExecutor::with_output(
            "test.yaml:1:1: [warning] missing document start \"---\" (document-start)\n\
             test.yaml:9:1: [error] duplication of key \"a\" in mapping (key-duplicates)\n",
        );

        let results = run_all(&settings_for(&["yamllint"]), &exe, dir.path());

        assert_eq!(results.error_count, 1);
        assert_eq!(results.warning_count, 1);
    }

    #[test]
    fn test_exclude_patterns_prune_the_file_list() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("vendor")).unwrap();
        fs::write(dir.path().join("app.yaml"), "").unwrap();
        fs::write(dir.path().join("vendor/dep.yaml"), "").unwrap();

        let exe = MockExecutor::with_output("");
        let mut settings = settings_for(&["yamllint"]);
        settings.lint.exclude = vec!["^vendor/".to_string()];

        run_all(&settings, &exe, dir.path());

        let calls = exe.calls();
        assert_eq!(calls[0].1, vec!["-f", "parsable", "app.yaml"]);
    }
}
