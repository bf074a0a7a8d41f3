//! Solution discovery
//!
//! Scans the solutions root for `<language>/problem-<N>/<entry file>`
//! directories and turns each hit into an identity plus a ready-to-run
//! invocable. The core never depends on this layout directly; it only sees
//! the `Discovery` trait.

use std::fs;
use std::path::{Path, PathBuf};

use crate::benchmark::languages::LanguageSpec;
use crate::benchmark::runner::Runnable;
use crate::error::{AppError, AppResult};
use crate::models::SolutionId;

/// Optional equality filters for a session; absent fields match everything
#[derive(Debug, Clone, Default)]
pub struct SessionFilter {
    pub language: Option<String>,
    pub problem: Option<u32>,
}

impl SessionFilter {
    pub fn matches(&self, id: &SolutionId) -> bool {
        self.language
            .as_ref()
            .is_none_or(|l| *l == id.language)
            && self.problem.is_none_or(|p| p == id.problem)
    }
}

/// A discovered solution: identity plus its runnable
pub struct DiscoveredSolution {
    pub id: SolutionId,
    pub runnable: Box<dyn Runnable>,
}

/// Enumerates the solutions available for benchmarking.
///
/// Contract: no duplicate identities, stable order within a session
/// (languages in registry order, problems ascending).
pub trait Discovery: Send + Sync {
    fn discover(&self, filter: &SessionFilter) -> AppResult<Vec<DiscoveredSolution>>;
}

/// Filesystem-backed discovery under a solutions root
pub struct FsDiscovery {
    root: PathBuf,
}

impl FsDiscovery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn scan_language(
        &self,
        spec: &LanguageSpec,
        filter: &SessionFilter,
        found: &mut Vec<DiscoveredSolution>,
    ) -> AppResult<()> {
        let lang_dir = self.root.join(spec.dir());
        if !lang_dir.is_dir() {
            return Ok(());
        }

        let mut problems: Vec<(u32, PathBuf)> = Vec::new();

        let entries = fs::read_dir(&lang_dir).map_err(|e| {
            AppError::Discovery(format!("cannot read {}: {e}", lang_dir.display()))
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                AppError::Discovery(format!("cannot read {}: {e}", lang_dir.display()))
            })?;
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let Some(problem) = parse_problem_number(&path) else {
                continue;
            };

            let entry_path = path.join(spec.entry_file());
            if entry_path.is_file() {
                problems.push((problem, entry_path));
            }
        }

        problems.sort_by_key(|(n, _)| *n);

        for (problem, entry_path) in problems {
            let id = SolutionId::new(spec.language(), problem);
            if !filter.matches(&id) {
                continue;
            }
            tracing::debug!("Discovered {id} at {}", entry_path.display());
            found.push(DiscoveredSolution {
                runnable: Box::new(spec.runnable(&entry_path)),
                id,
            });
        }

        Ok(())
    }
}

impl Discovery for FsDiscovery {
    fn discover(&self, filter: &SessionFilter) -> AppResult<Vec<DiscoveredSolution>> {
        let mut found = Vec::new();

        for spec in LanguageSpec::all() {
            if let Some(language) = &filter.language {
                if language != spec.language() {
                    continue;
                }
            }
            self.scan_language(&spec, filter, &mut found)?;
        }

        Ok(found)
    }
}

/// Parse the numeric suffix of a `problem-<N>` directory name.
///
/// Directories with any other name, or a non-numeric suffix, are skipped.
fn parse_problem_number(path: &Path) -> Option<u32> {
    path.file_name()?
        .to_str()?
        .strip_prefix("problem-")?
        .parse()
        .ok()
}
