//! Running reference programs through an external interpreter.
//!
//! The interpreter is opaque: [`CodeExecutor::execute`] takes source text and
//! returns captured stdout or an error message. [`PythonExecutor`] pipes the
//! source into a `python3 -` process; tests substitute their own executor.
//!
//! Execution happens on a background thread (see [`spawn_execution`]) so the
//! UI keeps animating while a slow program runs.

pub mod output;
pub mod reference;

pub use output::{LineKind, OutputLine, OutputLog};
pub use reference::reference_source;

use crate::errors::ExecError;
use crossbeam_channel::Receiver;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use std::sync::Arc;
use std::thread;
use tracing::{info, warn};

pub const NO_OUTPUT_MESSAGE: &str = "Code executed successfully (no output)";

/// Result of running one program
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionOutcome {
    /// Captured standard output, or [`NO_OUTPUT_MESSAGE`] when there was none
    Success(String),
    /// Message to show verbatim in error styling
    Failure(String),
}

impl ExecutionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionOutcome::Success(_))
    }

    pub fn text(&self) -> &str {
        match self {
            ExecutionOutcome::Success(text) | ExecutionOutcome::Failure(text) => text,
        }
    }
}

pub trait CodeExecutor: Send + Sync {
    fn execute(&self, source: &str) -> ExecutionOutcome;
}

/// Runs source through a Python interpreter read from stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonExecutor {
    program: String,
}

impl PythonExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        PythonExecutor {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, source: &str) -> Result<Output, ExecError> {
        let mut child = Command::new(&self.program)
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| ExecError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // The interpreter reads the whole script before running it. If it exits
        // early the write fails, but the child is still reaped.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(source.as_bytes()),
            None => Ok(()),
        };
        let output = child.wait_with_output()?;
        match written {
            // A failing program explains itself through stderr or its exit status
            Err(err) if output.status.success() && output.stderr.is_empty() => {
                Err(ExecError::Pipe(err))
            }
            _ => Ok(output),
        }
    }
}

impl Default for PythonExecutor {
    fn default() -> Self {
        PythonExecutor::new("python3")
    }
}

impl CodeExecutor for PythonExecutor {
    fn execute(&self, source: &str) -> ExecutionOutcome {
        match self.run(source) {
            Ok(output) => outcome_from_output(&output),
            Err(err @ ExecError::Spawn { .. }) => {
                warn!(program = %self.program, error = %err, "interpreter unavailable");
                ExecutionOutcome::Failure(format!(
                    "Failed to initialize Python environment: {}",
                    error_chain(&err)
                ))
            }
            Err(err @ ExecError::Pipe(_)) => {
                warn!(program = %self.program, error = %err, "interpreter pipe failed");
                ExecutionOutcome::Failure(format!("Runtime Error: {}", error_chain(&err)))
            }
        }
    }
}

fn error_chain(err: &ExecError) -> String {
    match err {
        ExecError::Spawn { source, .. } => format!("{err}: {source}"),
        ExecError::Pipe(source) => format!("{err}: {source}"),
    }
}

/// Map a finished process to an outcome. Anything on stderr or a non-zero
/// exit status counts as a runtime error.
pub fn outcome_from_output(output: &Output) -> ExecutionOutcome {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !output.status.success() || !stderr.trim().is_empty() {
        let detail = if stderr.trim().is_empty() {
            format!("interpreter exited with {}", output.status)
        } else {
            stderr.trim_end().to_string()
        };
        return ExecutionOutcome::Failure(format!("Runtime Error: {detail}"));
    }

    if stdout.trim().is_empty() {
        ExecutionOutcome::Success(NO_OUTPUT_MESSAGE.to_string())
    } else {
        ExecutionOutcome::Success(stdout.trim_end().to_string())
    }
}

/// Run `source` on a worker thread. The receiver yields exactly one outcome.
pub fn spawn_execution(executor: Arc<dyn CodeExecutor>, source: String) -> Receiver<ExecutionOutcome> {
    let (tx, rx) = crossbeam_channel::bounded(1);
    thread::spawn(move || {
        info!(bytes = source.len(), "executing reference program");
        let outcome = executor.execute(&source);
        match &outcome {
            ExecutionOutcome::Success(_) => info!("reference program finished"),
            ExecutionOutcome::Failure(message) => warn!(%message, "reference program failed"),
        }
        // The UI may have moved on and dropped the receiver
        let _ = tx.send(outcome);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    struct Echo;

    impl CodeExecutor for Echo {
        fn execute(&self, source: &str) -> ExecutionOutcome {
            if source.contains("raise") {
                ExecutionOutcome::Failure("Runtime Error: boom".to_string())
            } else {
                ExecutionOutcome::Success(source.to_string())
            }
        }
    }

    #[test]
    fn test_background_execution_delivers_outcome() {
        let rx = spawn_execution(Arc::new(Echo), "print(1)".to_string());
        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(outcome, ExecutionOutcome::Success("print(1)".to_string()));
    }

    #[test]
    fn test_failure_is_surfaced() {
        let rx = spawn_execution(Arc::new(Echo), "raise ValueError".to_string());
        let outcome = rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert!(!outcome.is_success());
        assert_eq!(outcome.text(), "Runtime Error: boom");
    }

    #[test]
    fn test_missing_interpreter() {
        let executor = PythonExecutor::new("algotrace-no-such-interpreter");
        let outcome = executor.execute("print('hi')");
        assert!(outcome
            .text()
            .starts_with("Failed to initialize Python environment: Failed to start interpreter"));
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use std::os::unix::process::ExitStatusExt;
        use std::process::ExitStatus;

        fn output(code: i32, stdout: &str, stderr: &str) -> Output {
            Output {
                status: ExitStatus::from_raw(code << 8),
                stdout: stdout.as_bytes().to_vec(),
                stderr: stderr.as_bytes().to_vec(),
            }
        }

        #[test]
        fn test_empty_output_sentinel() {
            assert_eq!(
                outcome_from_output(&output(0, "  \n", "")),
                ExecutionOutcome::Success(NO_OUTPUT_MESSAGE.to_string())
            );
        }

        #[test]
        fn test_stdout_kept() {
            assert_eq!(
                outcome_from_output(&output(0, "Element found at index 4\n", "")),
                ExecutionOutcome::Success("Element found at index 4".to_string())
            );
        }

        // Neither program reads stdin, so a script larger than the pipe buffer
        // cannot be written in full
        fn large_script() -> String {
            "print(0)\n".repeat(200_000)
        }

        #[test]
        fn test_early_exit_is_runtime_error() {
            let outcome = PythonExecutor::new("true").execute(&large_script());
            assert!(
                outcome.text().starts_with("Runtime Error: Interpreter pipe failed"),
                "{}",
                outcome.text()
            );
        }

        #[test]
        fn test_early_exit_reports_status() {
            let outcome = PythonExecutor::new("false").execute(&large_script());
            assert!(!outcome.is_success());
            assert!(
                outcome.text().starts_with("Runtime Error: interpreter exited with"),
                "{}",
                outcome.text()
            );
        }

        #[test]
        fn test_stderr_is_runtime_error() {
            let outcome = outcome_from_output(&output(1, "", "NameError: x\n"));
            assert_eq!(
                outcome,
                ExecutionOutcome::Failure("Runtime Error: NameError: x".to_string())
            );
        }
    }
}
