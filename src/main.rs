//! eulermark - Application entry point

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use eulermark::{
    config::Config,
    db::ResultStore,
    discovery::{FsDiscovery, SessionFilter},
    Orchestrator,
};

/// Benchmark Project Euler solutions across languages
#[derive(Parser, Debug)]
#[command(name = "eulermark", version)]
struct Cli {
    /// Filter by language (e.g. python, rust, go)
    #[arg(short, long)]
    language: Option<String>,

    /// Filter by problem number
    #[arg(short, long)]
    problem: Option<u32>,

    /// Solutions root directory (overrides EULERMARK_SOLUTIONS_ROOT)
    #[arg(long)]
    root: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env()?;
    if let Some(root) = cli.root {
        config.storage.solutions_root = root;
    }

    let filter = SessionFilter {
        language: cli.language,
        problem: cli.problem,
    };

    tracing::info!("Opening result store at {}", config.storage.db_path.display());
    let store = ResultStore::open(&config.storage.db_path).await?;

    // Ctrl-C stops new solutions from starting; the one in flight finishes
    // or fails whole
    let shutdown = Arc::new(AtomicBool::new(false));
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupt received, finishing current solution");
                shutdown.store(true, Ordering::SeqCst);
            }
        });
    }

    let discovery = FsDiscovery::new(config.storage.solutions_root.clone());
    let orchestrator = Orchestrator::new(config.clone(), Box::new(discovery));

    let session = match orchestrator.run(&store, &filter, shutdown).await {
        Ok(session) => session,
        Err(e) => {
            tracing::error!("Session aborted: {e}");
            store.close().await;
            return Ok(ExitCode::FAILURE);
        }
    };

    store.close().await;

    tracing::info!("Benchmarked {} solution(s)", session.attempted());
    tracing::info!(
        "New records: {}, improved: {}, not faster: {}",
        session.new_count(),
        session.improved_count(),
        session.not_faster_count()
    );
    for failure in session.failures() {
        tracing::error!("Failed: {}", failure.id);
    }
    tracing::info!(
        "Results exported to {} and {}",
        config.storage.csv_path.display(),
        config.storage.md_path.display()
    );

    if session.has_failures() {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
