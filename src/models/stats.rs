//! Summary statistics and persisted best results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reduced description of one sampling session: min/average/max/stdev over
/// the timed executions, all in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Number of timed executions behind these statistics
    pub runs: u32,
    pub min_s: f64,
    pub avg_s: f64,
    pub max_s: f64,
    pub stdev_s: f64,
}

impl SummaryStats {
    /// Reduce an ordered sequence of elapsed-seconds samples.
    ///
    /// Standard deviation uses the sample (n - 1) formula and is 0.0 for a
    /// single sample. Returns None for an empty sequence.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let runs = samples.len() as u32;
        let min_s = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max_s = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let avg_s = samples.iter().sum::<f64>() / runs as f64;

        let stdev_s = if runs > 1 {
            let variance = samples
                .iter()
                .map(|s| (s - avg_s).powi(2))
                .sum::<f64>()
                / (runs - 1) as f64;
            variance.sqrt()
        } else {
            0.0
        };

        Some(Self {
            runs,
            min_s,
            avg_s,
            max_s,
            stdev_s,
        })
    }
}

/// Persisted best-known result for one solution identity.
///
/// Replaced atomically only when a later session's min is strictly smaller
/// than the stored min; never deleted by normal operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct BestResult {
    pub language: String,
    pub problem: u32,
    pub runs: u32,
    pub min_s: f64,
    pub avg_s: f64,
    pub max_s: f64,
    pub stdev_s: f64,
    pub recorded_at: DateTime<Utc>,
    /// Captured solution output, if any (not validated)
    pub answer: Option<String>,
}

impl BestResult {
    pub fn stats(&self) -> SummaryStats {
        SummaryStats {
            runs: self.runs,
            min_s: self.min_s,
            avg_s: self.avg_s,
            max_s: self.max_s,
            stdev_s: self.stdev_s,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sequence_rejected() {
        assert!(SummaryStats::from_samples(&[]).is_none());
    }

    #[test]
    fn test_single_sample_has_zero_stdev() {
        let stats = SummaryStats::from_samples(&[0.5]).unwrap();
        assert_eq!(stats.runs, 1);
        assert_eq!(stats.min_s, 0.5);
        assert_eq!(stats.avg_s, 0.5);
        assert_eq!(stats.max_s, 0.5);
        assert_eq!(stats.stdev_s, 0.0);
    }

    #[test]
    fn test_known_sample_stdev() {
        // Sample stdev of [2, 4, 4, 4, 5, 5, 7, 9] is sqrt(32/7)
        let samples = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let stats = SummaryStats::from_samples(&samples).unwrap();
        assert_eq!(stats.min_s, 2.0);
        assert_eq!(stats.avg_s, 5.0);
        assert_eq!(stats.max_s, 9.0);
        assert!((stats.stdev_s - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_min_avg_max_ordering_invariant() {
        let samples = [0.013, 0.011, 0.019, 0.012, 0.011];
        let stats = SummaryStats::from_samples(&samples).unwrap();
        assert!(stats.min_s <= stats.avg_s);
        assert!(stats.avg_s <= stats.max_s);
        assert!(stats.stdev_s >= 0.0);
    }
}
