//! Single-execution runner
//!
//! Executes one solution once and measures wall-clock elapsed time around the
//! invocation with a monotonic clock. Whatever the solution prints is
//! captured but never interpreted here.

use std::process::Stdio;
use std::time::Instant;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{AppError, AppResult};
use crate::models::SolutionId;

/// An invocable unit that performs one solution execution with no input and
/// returns its trimmed stdout.
#[async_trait]
pub trait Runnable: Send + Sync {
    async fn invoke(&self) -> anyhow::Result<String>;
}

/// One measured execution
#[derive(Debug, Clone)]
pub struct TimedRun {
    /// Wall-clock elapsed seconds for this execution
    pub elapsed_s: f64,
    /// Captured stdout, trimmed
    pub output: String,
}

/// Times a single invocation of a runnable
pub struct Runner;

impl Runner {
    /// Execute the runnable once and measure elapsed wall-clock time.
    ///
    /// Abnormal termination fails with an execution error carrying the
    /// solution identity; there is no retry.
    pub async fn execute(id: &SolutionId, runnable: &dyn Runnable) -> AppResult<TimedRun> {
        let start = Instant::now();
        let output = runnable
            .invoke()
            .await
            .map_err(|e| AppError::execution(id, e.to_string()))?;
        let elapsed_s = start.elapsed().as_secs_f64();

        Ok(TimedRun { elapsed_s, output })
    }
}

/// Runnable backed by a child process
pub struct CommandRunnable {
    program: String,
    args: Vec<String>,
}

impl CommandRunnable {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

#[async_trait]
impl Runnable for CommandRunnable {
    async fn invoke(&self) -> anyhow::Result<String> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await?;

        if !output.status.success() {
            anyhow::bail!(
                "process `{}` exited with {}",
                self.program,
                output.status
            );
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct OkRunnable;

    #[async_trait]
    impl Runnable for OkRunnable {
        async fn invoke(&self) -> anyhow::Result<String> {
            Ok("42".to_string())
        }
    }

    struct FailingRunnable;

    #[async_trait]
    impl Runnable for FailingRunnable {
        async fn invoke(&self) -> anyhow::Result<String> {
            anyhow::bail!("boom")
        }
    }

    #[tokio::test]
    async fn test_execute_measures_and_captures_output() {
        let id = SolutionId::new("python", 1);
        let run = Runner::execute(&id, &OkRunnable).await.unwrap();
        assert!(run.elapsed_s >= 0.0);
        assert_eq!(run.output, "42");
    }

    #[tokio::test]
    async fn test_failure_carries_solution_identity() {
        let id = SolutionId::new("python", 7);
        let err = Runner::execute(&id, &FailingRunnable).await.unwrap_err();
        match err {
            AppError::Execution {
                language, problem, ..
            } => {
                assert_eq!(language, "python");
                assert_eq!(problem, 7);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
