//! Application-wide constants
//!
//! Default values for the benchmark protocol and artifact paths, grouped by
//! purpose.

// =============================================================================
// BENCHMARK DEFAULTS
// =============================================================================

/// Default number of discarded warm-up executions per solution
pub const DEFAULT_WARMUP_RUNS: u32 = 5;

/// Default number of timed executions per solution
pub const DEFAULT_TIMED_RUNS: u32 = 20;

// =============================================================================
// STORAGE DEFAULTS
// =============================================================================

/// Default solutions root directory
pub const DEFAULT_SOLUTIONS_ROOT: &str = ".";

/// Default SQLite database file
pub const DEFAULT_DB_PATH: &str = "benchmark_results.db";

/// Default CSV export file
pub const DEFAULT_CSV_PATH: &str = "results.csv";

/// Default Markdown summary file
pub const DEFAULT_MD_PATH: &str = "BENCHMARKS.md";

// =============================================================================
// SUPPORTED LANGUAGES
// =============================================================================

/// Language identifiers
pub mod languages {
    pub const PYTHON: &str = "python";
    pub const RUST: &str = "rust";
    pub const GO: &str = "go";

    /// All supported language identifiers
    pub const ALL: &[&str] = &[PYTHON, RUST, GO];
}
