//! Application configuration management
//!
//! Configuration is loaded from environment variables (with `.env` support)
//! at startup. The loaded `Config` is passed explicitly to the components
//! that need it, so tests can build isolated instances.

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_CSV_PATH, DEFAULT_DB_PATH, DEFAULT_MD_PATH, DEFAULT_SOLUTIONS_ROOT,
    DEFAULT_TIMED_RUNS, DEFAULT_WARMUP_RUNS,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub benchmark: BenchmarkConfig,
}

/// Paths for the solutions tree, database, and report artifacts
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub solutions_root: PathBuf,
    pub db_path: PathBuf,
    pub csv_path: PathBuf,
    pub md_path: PathBuf,
}

/// Benchmark protocol configuration
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Number of warm-up executions (timed but discarded)
    pub warmup_runs: u32,
    /// Number of timed executions reduced into statistics
    pub timed_runs: u32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            storage: StorageConfig::from_env()?,
            benchmark: BenchmarkConfig::from_env()?,
        })
    }
}

impl StorageConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            solutions_root: PathBuf::from(
                env::var("EULERMARK_SOLUTIONS_ROOT")
                    .unwrap_or_else(|_| DEFAULT_SOLUTIONS_ROOT.to_string()),
            ),
            db_path: PathBuf::from(
                env::var("EULERMARK_DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string()),
            ),
            csv_path: PathBuf::from(
                env::var("EULERMARK_CSV_PATH").unwrap_or_else(|_| DEFAULT_CSV_PATH.to_string()),
            ),
            md_path: PathBuf::from(
                env::var("EULERMARK_MD_PATH").unwrap_or_else(|_| DEFAULT_MD_PATH.to_string()),
            ),
        })
    }
}

impl BenchmarkConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            warmup_runs: env::var("EULERMARK_WARMUP_RUNS")
                .unwrap_or_else(|_| DEFAULT_WARMUP_RUNS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("EULERMARK_WARMUP_RUNS".to_string()))?,
            timed_runs: env::var("EULERMARK_TIMED_RUNS")
                .unwrap_or_else(|_| DEFAULT_TIMED_RUNS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("EULERMARK_TIMED_RUNS".to_string()))?,
        })
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            warmup_runs: DEFAULT_WARMUP_RUNS,
            timed_runs: DEFAULT_TIMED_RUNS,
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(String),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_protocol() {
        let benchmark = BenchmarkConfig::default();
        assert_eq!(benchmark.warmup_runs, 5);
        assert_eq!(benchmark.timed_runs, 20);
    }
}
