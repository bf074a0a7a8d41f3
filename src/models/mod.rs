//! Domain models

pub mod session;
pub mod solution;
pub mod stats;

pub use session::{OutcomeKind, SessionReport, SolutionOutcome, UpdateStatus};
pub use solution::SolutionId;
pub use stats::{BestResult, SummaryStats};
