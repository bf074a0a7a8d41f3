//! Sampling protocol: warmup runs, timed runs, statistical reduction
//!
//! Warm-up executions prime OS, file, and interpreter caches so one-time
//! startup costs never reach the timed measurements. Warm-up failures are
//! treated identically to timed failures; warm-up timings are never recorded.

use crate::benchmark::runner::{Runnable, Runner};
use crate::config::BenchmarkConfig;
use crate::error::{AppError, AppResult};
use crate::models::{SolutionId, SummaryStats};

/// Result of one sampling session for a solution
#[derive(Debug, Clone)]
pub struct SampleOutcome {
    pub stats: SummaryStats,
    /// Output captured from the first timed run, if non-empty
    pub answer: Option<String>,
}

/// Orchestrates warmup and timed repetitions for one solution
pub struct Sampler {
    warmup_runs: u32,
    timed_runs: u32,
}

impl Sampler {
    pub fn new(config: &BenchmarkConfig) -> Self {
        Self {
            warmup_runs: config.warmup_runs,
            timed_runs: config.timed_runs,
        }
    }

    /// Run the full sampling protocol for one solution.
    ///
    /// Any execution failure in either phase fails the whole call; no partial
    /// statistics are produced for a flaky or broken solution.
    pub async fn sample(
        &self,
        id: &SolutionId,
        runnable: &dyn Runnable,
    ) -> AppResult<SampleOutcome> {
        if self.timed_runs == 0 {
            return Err(AppError::InvalidConfiguration(
                "timed run count must be at least 1".to_string(),
            ));
        }

        tracing::debug!(
            "Sampling {id}: {} warmup + {} timed runs",
            self.warmup_runs,
            self.timed_runs
        );

        for _ in 0..self.warmup_runs {
            Runner::execute(id, runnable).await?;
        }

        let mut samples = Vec::with_capacity(self.timed_runs as usize);
        let mut answer = None;

        for _ in 0..self.timed_runs {
            let run = Runner::execute(id, runnable).await?;
            if answer.is_none() && !run.output.is_empty() {
                answer = Some(run.output);
            }
            samples.push(run.elapsed_s);
        }

        // Non-empty by construction; timed_runs >= 1 was checked above
        let stats = SummaryStats::from_samples(&samples).ok_or_else(|| {
            AppError::InvalidConfiguration("no samples collected".to_string())
        })?;

        Ok(SampleOutcome { stats, answer })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};

    use async_trait::async_trait;

    use super::*;

    /// Counts invocations and optionally fails at a given invocation number
    struct CountingRunnable {
        calls: AtomicU32,
        fail_at: Option<u32>,
    }

    impl CountingRunnable {
        fn new(fail_at: Option<u32>) -> Self {
            Self {
                calls: AtomicU32::new(0),
                fail_at,
            }
        }

        fn calls(&self) -> u32 {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Runnable for CountingRunnable {
        async fn invoke(&self) -> anyhow::Result<String> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if Some(call) == self.fail_at {
                anyhow::bail!("injected failure at invocation {call}")
            }
            Ok("4613732".to_string())
        }
    }

    fn sampler(warmup_runs: u32, timed_runs: u32) -> Sampler {
        Sampler::new(&BenchmarkConfig {
            warmup_runs,
            timed_runs,
        })
    }

    #[tokio::test]
    async fn test_exact_invocation_count() {
        let id = SolutionId::new("python", 2);
        let runnable = CountingRunnable::new(None);

        let outcome = sampler(5, 20).sample(&id, &runnable).await.unwrap();

        assert_eq!(runnable.calls(), 25);
        assert_eq!(outcome.stats.runs, 20);
        assert_eq!(outcome.answer.as_deref(), Some("4613732"));
        assert!(outcome.stats.min_s <= outcome.stats.avg_s);
        assert!(outcome.stats.avg_s <= outcome.stats.max_s);
    }

    #[tokio::test]
    async fn test_failure_in_timed_phase_fails_whole_sample() {
        let id = SolutionId::new("python", 2);
        // 5 warmups succeed, 3rd timed invocation (8th overall) fails
        let runnable = CountingRunnable::new(Some(8));

        let err = sampler(5, 20).sample(&id, &runnable).await.unwrap_err();

        assert!(matches!(err, AppError::Execution { .. }));
        assert_eq!(runnable.calls(), 8);
    }

    #[tokio::test]
    async fn test_failure_in_warmup_phase_fails_whole_sample() {
        let id = SolutionId::new("go", 3);
        let runnable = CountingRunnable::new(Some(2));

        let err = sampler(5, 20).sample(&id, &runnable).await.unwrap_err();

        assert!(matches!(err, AppError::Execution { .. }));
        assert_eq!(runnable.calls(), 2);
    }

    #[tokio::test]
    async fn test_zero_timed_runs_is_invalid_configuration() {
        let id = SolutionId::new("python", 2);
        let runnable = CountingRunnable::new(None);

        let err = sampler(5, 0).sample(&id, &runnable).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidConfiguration(_)));
        // Rejected before any execution
        assert_eq!(runnable.calls(), 0);
    }
}
