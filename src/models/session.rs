//! Session report models

use serde::{Deserialize, Serialize};

use crate::models::{SolutionId, SummaryStats};

/// How a successful sample affected the stored best result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateStatus {
    /// First result ever recorded for this identity
    New,
    /// Strictly faster min than the stored record
    Improved,
    /// Tie or regression; the stored record was left untouched
    NotFaster,
}

/// Per-solution outcome within one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionOutcome {
    pub id: SolutionId,
    pub result: OutcomeKind,
}

/// Success or failure detail for one solution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutcomeKind {
    Success {
        stats: SummaryStats,
        status: UpdateStatus,
    },
    Failure {
        /// Stable error code (e.g. EXECUTION_FAILURE)
        kind: String,
        message: String,
    },
}

/// Aggregated outcomes of one benchmarking session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionReport {
    pub outcomes: Vec<SolutionOutcome>,
}

impl SessionReport {
    pub fn push(&mut self, outcome: SolutionOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn new_count(&self) -> usize {
        self.count_status(UpdateStatus::New)
    }

    pub fn improved_count(&self) -> usize {
        self.count_status(UpdateStatus::Improved)
    }

    pub fn not_faster_count(&self) -> usize {
        self.count_status(UpdateStatus::NotFaster)
    }

    pub fn failures(&self) -> impl Iterator<Item = &SolutionOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, OutcomeKind::Failure { .. }))
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    fn count_status(&self, wanted: UpdateStatus) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.result, OutcomeKind::Success { status, .. } if status == wanted))
            .count()
    }
}
