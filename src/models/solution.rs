//! Solution identity

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of one solution under benchmark: a (language, problem) pair.
///
/// Unique across the system; the result store enforces uniqueness on this
/// key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SolutionId {
    pub language: String,
    pub problem: u32,
}

impl SolutionId {
    pub fn new(language: impl Into<String>, problem: u32) -> Self {
        Self {
            language: language.into(),
            problem,
        }
    }
}

impl fmt::Display for SolutionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/problem-{}", self.language, self.problem)
    }
}
