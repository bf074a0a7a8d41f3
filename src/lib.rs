//! eulermark - Cross-language benchmarking harness for Project Euler solutions
//!
//! Discovers solution implementations per language, times each one under a
//! warmup + timed-runs protocol, persists the best-known result per
//! (language, problem) pair, and regenerates comparison reports from the
//! full persisted history.
//!
//! # Architecture
//!
//! The measurement-and-record pipeline, leaves first:
//! - **Runner**: one timed execution of a solution
//! - **Sampler**: warmup + timed repetitions, reduced to summary statistics
//! - **ResultStore**: durable best-result table with conditional updates
//! - **ReportGenerator**: CSV and Markdown artifacts from the store snapshot
//! - **Orchestrator**: drives the pipeline over the discovered solution set

pub mod benchmark;
pub mod config;
pub mod constants;
pub mod db;
pub mod discovery;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod report;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use orchestrator::Orchestrator;
