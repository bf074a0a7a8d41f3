//! Report generation
//!
//! Renders the store's current snapshot into a CSV export and a Markdown
//! summary. `render` is a pure function of its input: identical input yields
//! byte-identical artifacts, so no generation timestamp is embedded.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::BestResult;

/// Rendered artifacts for one store snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifacts {
    pub csv: String,
    pub markdown: String,
}

/// Render the full result set into CSV and Markdown artifacts.
///
/// Input is expected in the store's (language, problem) order; rows are
/// emitted as given.
pub fn render(results: &[BestResult]) -> ReportArtifacts {
    ReportArtifacts {
        csv: render_csv(results),
        markdown: render_markdown(results),
    }
}

/// Write both artifacts to their configured paths, overwriting previous
/// sessions' output.
pub async fn write_artifacts(
    csv_path: &Path,
    md_path: &Path,
    artifacts: &ReportArtifacts,
) -> AppResult<()> {
    tokio::fs::write(csv_path, &artifacts.csv)
        .await
        .map_err(|e| AppError::Storage(format!("cannot write {}: {e}", csv_path.display())))?;
    tokio::fs::write(md_path, &artifacts.markdown)
        .await
        .map_err(|e| AppError::Storage(format!("cannot write {}: {e}", md_path.display())))?;

    Ok(())
}

fn render_csv(results: &[BestResult]) -> String {
    let mut out = String::from(
        "Language,Problem,Min (s),Avg (s),Max (s),StdDev (s),Runs,Last Updated\n",
    );

    for row in results {
        let _ = writeln!(
            out,
            "{},{},{:.6},{:.6},{:.6},{:.6},{},{}",
            row.language,
            row.problem,
            row.min_s,
            row.avg_s,
            row.max_s,
            row.stdev_s,
            row.runs,
            row.recorded_at.format("%Y-%m-%d %H:%M:%S"),
        );
    }

    out
}

fn render_markdown(results: &[BestResult]) -> String {
    let mut out = String::from("# Project Euler Benchmark Results\n");

    let mut languages: Vec<&str> = results.iter().map(|r| r.language.as_str()).collect();
    languages.dedup();

    for language in &languages {
        let _ = writeln!(out, "\n## {language}\n");
        out.push_str("| Problem | Min (s) | Avg (s) | Max (s) | StdDev (s) | Runs | Last Updated |\n");
        out.push_str("|---------|---------|---------|---------|------------|------|---------------|\n");

        for row in results.iter().filter(|r| r.language == *language) {
            let _ = writeln!(
                out,
                "| {} | {:.6} | {:.6} | {:.6} | {:.6} | {} | {} |",
                row.problem,
                row.min_s,
                row.avg_s,
                row.max_s,
                row.stdev_s,
                row.runs,
                row.recorded_at.format("%Y-%m-%d"),
            );
        }
    }

    let fastest = fastest_per_problem(results);
    if !fastest.is_empty() {
        out.push_str("\n## Fastest language per problem\n\n");
        out.push_str("| Problem | Language | Min (s) |\n");
        out.push_str("|---------|----------|--------|\n");
        for row in fastest {
            let _ = writeln!(
                out,
                "| {} | {} | {:.6} |",
                row.problem, row.language, row.min_s
            );
        }
    }

    out
}

/// For each problem, the row with the strictly smallest min across languages.
/// Equal mins keep the first row in store order, matching the store's own
/// tie policy of favoring the established record.
fn fastest_per_problem(results: &[BestResult]) -> Vec<&BestResult> {
    let mut fastest: Vec<&BestResult> = Vec::new();

    for row in results {
        match fastest.iter_mut().find(|f| f.problem == row.problem) {
            Some(current) => {
                if row.min_s < current.min_s {
                    *current = row;
                }
            }
            None => fastest.push(row),
        }
    }

    fastest.sort_by_key(|r| r.problem);
    fastest
}
