//! Session orchestration
//!
//! Drives one benchmarking session: discovery, sequential sampling (parallel
//! sampling would corrupt timings through CPU contention), conditional
//! persistence, and report regeneration from the full store history.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;

use crate::benchmark::Sampler;
use crate::config::Config;
use crate::db::ResultStore;
use crate::discovery::{Discovery, SessionFilter};
use crate::error::AppResult;
use crate::models::{OutcomeKind, SessionReport, SolutionId, SolutionOutcome, SummaryStats, UpdateStatus};
use crate::report;

/// Drives sampling, persistence, and reporting for one session
pub struct Orchestrator {
    config: Config,
    discovery: Box<dyn Discovery>,
    sampler: Sampler,
}

impl Orchestrator {
    pub fn new(config: Config, discovery: Box<dyn Discovery>) -> Self {
        let sampler = Sampler::new(&config.benchmark);
        Self {
            config,
            discovery,
            sampler,
        }
    }

    /// Run one session over the filtered solution set.
    ///
    /// Per-solution failures are isolated and aggregated into the report.
    /// Discovery and storage failures are fatal: with no solutions or no
    /// usable store there is nothing left to do. A set shutdown flag stops
    /// new solutions from starting; the one in flight finishes (or fails)
    /// whole, so the store is never left mid-update.
    pub async fn run(
        &self,
        store: &ResultStore,
        filter: &SessionFilter,
        shutdown: Arc<AtomicBool>,
    ) -> AppResult<SessionReport> {
        let solutions = self.discovery.discover(filter)?;

        if solutions.is_empty() {
            tracing::warn!("No solutions found for filter {filter:?}");
        }

        let mut session = SessionReport::default();

        for solution in &solutions {
            if shutdown.load(Ordering::SeqCst) {
                tracing::warn!("Shutdown requested, skipping remaining solutions");
                break;
            }

            let id = &solution.id;
            tracing::info!("Running euler #{} ({})...", id.problem, id.language);

            let outcome = match self.sampler.sample(id, solution.runnable.as_ref()).await {
                Ok(sample) => {
                    let upsert = store
                        .upsert_if_better(id, &sample.stats, sample.answer.as_deref(), Utc::now())
                        .await;

                    match upsert {
                        Ok(upsert) => {
                            let status = match (upsert.updated, &upsert.previous) {
                                (true, None) => UpdateStatus::New,
                                (true, Some(_)) => UpdateStatus::Improved,
                                (false, _) => UpdateStatus::NotFaster,
                            };
                            log_success(id, &sample.stats, status);
                            OutcomeKind::Success {
                                stats: sample.stats,
                                status,
                            }
                        }
                        Err(e) => {
                            // Store is unusable; record and abort the session
                            tracing::error!("{id} failed: {e}");
                            session.push(SolutionOutcome {
                                id: id.clone(),
                                result: OutcomeKind::Failure {
                                    kind: e.error_code().to_string(),
                                    message: e.to_string(),
                                },
                            });
                            return Err(e);
                        }
                    }
                }
                Err(e) if e.is_session_fatal() => return Err(e),
                Err(e) => {
                    tracing::error!("{id} failed: {e}");
                    OutcomeKind::Failure {
                        kind: e.error_code().to_string(),
                        message: e.to_string(),
                    }
                }
            };

            session.push(SolutionOutcome {
                id: id.clone(),
                result: outcome,
            });
        }

        // Reports always reflect global history, not just this session's
        // filtered slice.
        let all = store.all().await?;
        let artifacts = report::render(&all);
        report::write_artifacts(
            &self.config.storage.csv_path,
            &self.config.storage.md_path,
            &artifacts,
        )
        .await?;

        Ok(session)
    }
}

fn log_success(id: &SolutionId, stats: &SummaryStats, status: UpdateStatus) {
    match status {
        UpdateStatus::New => tracing::info!("{id} NEW: {:.6}s", stats.min_s),
        UpdateStatus::Improved => tracing::info!("{id} IMPROVED: {:.6}s", stats.min_s),
        UpdateStatus::NotFaster => {
            tracing::info!("{id} {:.6}s (not faster)", stats.min_s)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tempfile::TempDir;

    use crate::benchmark::Runnable;
    use crate::config::{BenchmarkConfig, StorageConfig};
    use crate::discovery::DiscoveredSolution;

    use super::*;

    struct OkRunnable(&'static str);

    #[async_trait]
    impl Runnable for OkRunnable {
        async fn invoke(&self) -> anyhow::Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct FailingRunnable;

    #[async_trait]
    impl Runnable for FailingRunnable {
        async fn invoke(&self) -> anyhow::Result<String> {
            anyhow::bail!("exit code 1")
        }
    }

    /// Hands out a pre-built solution list once per session
    struct StaticDiscovery(Mutex<Vec<DiscoveredSolution>>);

    impl Discovery for StaticDiscovery {
        fn discover(&self, _filter: &SessionFilter) -> AppResult<Vec<DiscoveredSolution>> {
            Ok(self.0.lock().unwrap().drain(..).collect())
        }
    }

    fn config(dir: &TempDir) -> Config {
        Config {
            storage: StorageConfig {
                solutions_root: dir.path().to_path_buf(),
                db_path: dir.path().join("benchmark_results.db"),
                csv_path: dir.path().join("results.csv"),
                md_path: dir.path().join("BENCHMARKS.md"),
            },
            benchmark: BenchmarkConfig {
                warmup_runs: 1,
                timed_runs: 3,
            },
        }
    }

    fn solution(id: SolutionId, runnable: Box<dyn Runnable>) -> DiscoveredSolution {
        DiscoveredSolution { id, runnable }
    }

    #[tokio::test]
    async fn test_failure_is_isolated_and_store_untouched_for_it() {
        let dir = TempDir::new().unwrap();
        let store = ResultStore::open_in_memory().await.unwrap();
        let discovery = StaticDiscovery(Mutex::new(vec![
            solution(SolutionId::new("python", 1), Box::new(OkRunnable("233168"))),
            solution(SolutionId::new("python", 2), Box::new(FailingRunnable)),
        ]));

        let orchestrator = Orchestrator::new(config(&dir), Box::new(discovery));
        let session = orchestrator
            .run(&store, &SessionFilter::default(), Arc::new(AtomicBool::new(false)))
            .await
            .unwrap();

        assert_eq!(session.attempted(), 2);
        assert_eq!(session.new_count(), 1);
        assert!(session.has_failures());

        let failure = session.failures().next().unwrap();
        assert_eq!(failure.id, SolutionId::new("python", 2));
        match &failure.result {
            OutcomeKind::Failure { kind, .. } => assert_eq!(kind, "EXECUTION_FAILURE"),
            other => panic!("unexpected outcome: {other:?}"),
        }

        // The failed solution never reached the store
        assert!(store
            .get(&SolutionId::new("python", 2))
            .await
            .unwrap()
            .is_none());
        let stored = store.get(&SolutionId::new("python", 1)).await.unwrap().unwrap();
        assert_eq!(stored.answer.as_deref(), Some("233168"));
    }

    #[tokio::test]
    async fn test_artifacts_written_after_session() {
        let dir = TempDir::new().unwrap();
        let store = ResultStore::open_in_memory().await.unwrap();
        let cfg = config(&dir);
        let discovery = StaticDiscovery(Mutex::new(vec![solution(
            SolutionId::new("go", 7),
            Box::new(OkRunnable("104743")),
        )]));

        let orchestrator = Orchestrator::new(cfg.clone(), Box::new(discovery));
        orchestrator
            .run(&store, &SessionFilter::default(), Arc::new(AtomicBool::new(false)))
            .await
            .unwrap();

        let csv = std::fs::read_to_string(&cfg.storage.csv_path).unwrap();
        assert!(csv.lines().count() == 2);
        assert!(csv.contains("go,7,"));
        let md = std::fs::read_to_string(&cfg.storage.md_path).unwrap();
        assert!(md.contains("## go"));
    }

    #[tokio::test]
    async fn test_shutdown_skips_remaining_solutions() {
        let dir = TempDir::new().unwrap();
        let store = ResultStore::open_in_memory().await.unwrap();
        let discovery = StaticDiscovery(Mutex::new(vec![solution(
            SolutionId::new("python", 1),
            Box::new(OkRunnable("233168")),
        )]));

        let shutdown = Arc::new(AtomicBool::new(true));
        let orchestrator = Orchestrator::new(config(&dir), Box::new(discovery));
        let session = orchestrator
            .run(&store, &SessionFilter::default(), shutdown)
            .await
            .unwrap();

        assert_eq!(session.attempted(), 0);
        assert!(store.all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_repeat_session_reports_not_faster_or_improved() {
        let dir = TempDir::new().unwrap();
        let store = ResultStore::open_in_memory().await.unwrap();
        let cfg = config(&dir);

        let first = StaticDiscovery(Mutex::new(vec![solution(
            SolutionId::new("python", 1),
            Box::new(OkRunnable("233168")),
        )]));
        Orchestrator::new(cfg.clone(), Box::new(first))
            .run(&store, &SessionFilter::default(), Arc::new(AtomicBool::new(false)))
            .await
            .unwrap();

        let second = StaticDiscovery(Mutex::new(vec![solution(
            SolutionId::new("python", 1),
            Box::new(OkRunnable("233168")),
        )]));
        let session = Orchestrator::new(cfg, Box::new(second))
            .run(&store, &SessionFilter::default(), Arc::new(AtomicBool::new(false)))
            .await
            .unwrap();

        // Either the second run was faster (Improved) or not (NotFaster),
        // but it is never classified as New
        assert_eq!(session.new_count(), 0);
        assert_eq!(session.attempted(), 1);
        assert!(!session.has_failures());
    }
}
