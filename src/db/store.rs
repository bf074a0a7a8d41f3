//! Durable store of best-known results per (language, problem)
//!
//! Backed by a single-file SQLite database. All mutation goes through
//! `upsert_if_better`, which runs a compare-then-write inside one
//! transaction, so a concurrent external reader never observes a
//! partially-written row. WAL journal mode lets such readers see a
//! consistent (possibly stale) snapshot while a session writes.

use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::AppResult;
use crate::models::{BestResult, SolutionId, SummaryStats};

/// Result of a conditional upsert
#[derive(Debug, Clone)]
pub struct UpsertOutcome {
    /// Whether the store was written
    pub updated: bool,
    /// The row now in the store (new or pre-existing)
    pub current: BestResult,
    /// The row that was in the store before this call, if any
    pub previous: Option<BestResult>,
}

/// Handle to the durable best-results table
pub struct ResultStore {
    pool: SqlitePool,
}

impl ResultStore {
    /// Open (creating if missing) the store at the given path and migrate
    /// the schema.
    pub async fn open(path: &Path) -> AppResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal);

        Self::connect(options).await
    }

    /// Open an isolated in-memory store (used by tests)
    pub async fn open_in_memory() -> AppResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        Self::connect(options).await
    }

    async fn connect(options: SqliteConnectOptions) -> AppResult<Self> {
        // Single connection: the harness is single-writer by design, and an
        // in-memory database exists per connection.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS best_results (
                language    TEXT    NOT NULL,
                problem     INTEGER NOT NULL,
                runs        INTEGER NOT NULL,
                min_s       REAL    NOT NULL,
                avg_s       REAL    NOT NULL,
                max_s       REAL    NOT NULL,
                stdev_s     REAL    NOT NULL,
                recorded_at TEXT    NOT NULL,
                answer      TEXT,
                PRIMARY KEY (language, problem)
            )
            "#,
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    /// Get the best-known result for a solution, if any
    pub async fn get(&self, id: &SolutionId) -> AppResult<Option<BestResult>> {
        let result = sqlx::query_as::<_, BestResult>(
            r#"SELECT * FROM best_results WHERE language = ? AND problem = ?"#,
        )
        .bind(&id.language)
        .bind(id.problem)
        .fetch_optional(&self.pool)
        .await?;

        Ok(result)
    }

    /// Write the new statistics only if their min strictly beats the stored
    /// record (or no record exists). Ties leave the store untouched.
    pub async fn upsert_if_better(
        &self,
        id: &SolutionId,
        stats: &SummaryStats,
        answer: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<UpsertOutcome> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, BestResult>(
            r#"SELECT * FROM best_results WHERE language = ? AND problem = ?"#,
        )
        .bind(&id.language)
        .bind(id.problem)
        .fetch_optional(&mut *tx)
        .await?;

        if let Some(existing) = &existing {
            if stats.min_s >= existing.min_s {
                tx.commit().await?;
                return Ok(UpsertOutcome {
                    updated: false,
                    current: existing.clone(),
                    previous: Some(existing.clone()),
                });
            }
        }

        let current = BestResult {
            language: id.language.clone(),
            problem: id.problem,
            runs: stats.runs,
            min_s: stats.min_s,
            avg_s: stats.avg_s,
            max_s: stats.max_s,
            stdev_s: stats.stdev_s,
            recorded_at: now,
            answer: answer.map(str::to_string),
        };

        sqlx::query(
            r#"
            INSERT INTO best_results
                (language, problem, runs, min_s, avg_s, max_s, stdev_s, recorded_at, answer)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT (language, problem) DO UPDATE SET
                runs = excluded.runs,
                min_s = excluded.min_s,
                avg_s = excluded.avg_s,
                max_s = excluded.max_s,
                stdev_s = excluded.stdev_s,
                recorded_at = excluded.recorded_at,
                answer = excluded.answer
            "#,
        )
        .bind(&current.language)
        .bind(current.problem)
        .bind(current.runs)
        .bind(current.min_s)
        .bind(current.avg_s)
        .bind(current.max_s)
        .bind(current.stdev_s)
        .bind(current.recorded_at)
        .bind(&current.answer)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(UpsertOutcome {
            updated: true,
            current,
            previous: existing,
        })
    }

    /// All stored results, ordered by (language, problem)
    pub async fn all(&self) -> AppResult<Vec<BestResult>> {
        let results = sqlx::query_as::<_, BestResult>(
            r#"SELECT * FROM best_results ORDER BY language, problem"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(results)
    }

    /// Flush and close the underlying pool
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
