//! External command execution.
//!
//! Linter adapters never touch `std::process` directly; they go through
//! the [`Executor`] capability so tests can script tool output without
//! the tools being installed.

use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::ExecError;

/// Captured output of one external command.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    /// stdout followed by stderr, lossily decoded
    pub combined: String,

    /// Exit status code, if the process exited normally
    pub status: Option<i32>,
}

impl CommandOutput {
    /// True when the process exited with status 0.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Capability for running external tools.
///
/// Invocations are synchronous and blocking. A non-zero exit status is
/// not an error at this level: callers get the captured output either
/// way, since linters conventionally exit non-zero when they find
/// issues. Only a process that cannot be started, times out, or whose
/// output cannot be captured produces an [`ExecError`].
pub trait Executor: Sync {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ExecError>;
}

/// Executor backed by `std::process::Command`.
///
/// Output is captured through pipes; the child is polled against a
/// per-invocation deadline and killed when it exceeds it, so a hung
/// linter cannot stall the whole batch.
#[derive(Debug, Clone)]
pub struct SystemExecutor {
    timeout: Duration,
    cwd: Option<PathBuf>,
}

impl SystemExecutor {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout, cwd: None }
    }

    /// Run commands from the given directory. Adapters hand tools
    /// repository-relative file lists, so this is normally the
    /// repository root.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }
}

impl Executor for SystemExecutor {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ExecError> {
        tracing::debug!("Running '{} {}'", program, args.join(" "));

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        let mut child = cmd.spawn().map_err(|source| ExecError::Launch {
            program: program.to_string(),
            source,
        })?;

        // Drain the pipes off-thread so a chatty child cannot deadlock on
        // a full pipe buffer while we poll for exit.
        let stdout = child.stdout.take();
        let stderr = child.stderr.take();
        let stdout_reader = std::thread::spawn(move || read_all(stdout));
        let stderr_reader = std::thread::spawn(move || read_all(stderr));

        let deadline = Instant::now() + self.timeout;
        let status = loop {
            match child.try_wait() {
                Ok(Some(status)) => break status,
                Ok(None) => {
                    if Instant::now() >= deadline {
                        let _ = child.kill();
                        let _ = child.wait();
                        return Err(ExecError::TimedOut {
                            program: program.to_string(),
                            secs: self.timeout.as_secs(),
                        });
                    }
                    std::thread::sleep(Duration::from_millis(25));
                }
                Err(source) => {
                    return Err(ExecError::Capture {
                        program: program.to_string(),
                        source,
                    });
                }
            }
        };

        let mut combined = stdout_reader.join().unwrap_or_default();
        combined.push_str(&stderr_reader.join().unwrap_or_default());

        Ok(CommandOutput {
            combined,
            status: status.code(),
        })
    }
}

fn read_all<R: Read>(source: Option<R>) -> String {
    let mut buf = Vec::new();
    if let Some(mut reader) = source {
        let _ = reader.read_to_end(&mut buf);
    }
    String::from_utf8_lossy(&buf).into_owned()
}
