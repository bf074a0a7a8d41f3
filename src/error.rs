//! Custom error types and handling
//!
//! This module defines the application's error taxonomy and its conversions
//! from lower-level library errors.

use crate::models::SolutionId;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Benchmark errors
    #[error("Execution failed for {language} problem {problem}: {message}")]
    Execution {
        language: String,
        problem: u32,
        message: String,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    // Persistence errors
    #[error("Storage error: {0}")]
    Storage(String),

    // Discovery errors
    #[error("Discovery error: {0}")]
    Discovery(String),

    // Startup errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Build an execution failure for a specific solution
    pub fn execution(id: &SolutionId, message: impl Into<String>) -> Self {
        Self::Execution {
            language: id.language.clone(),
            problem: id.problem,
            message: message.into(),
        }
    }

    /// Get the stable error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Execution { .. } => "EXECUTION_FAILURE",
            Self::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
            Self::Storage(_) => "STORAGE_FAILURE",
            Self::Discovery(_) => "DISCOVERY_FAILURE",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Whether this error makes the rest of the session pointless.
    ///
    /// A broken solution only fails its own identity; a broken store or an
    /// unusable discovery root fails everything that would come after it.
    pub fn is_session_fatal(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Discovery(_))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
