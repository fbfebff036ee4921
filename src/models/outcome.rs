use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Classification of one completed query run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryResult {
    Satisfied,
    Unsatisfied,
    Timeout,
    Error,
}

impl QueryResult {
    /// Spelling used in the results CSV
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryResult::Satisfied => "satisfied",
            QueryResult::Unsatisfied => "unsatisfied",
            QueryResult::Timeout => "timeout",
            QueryResult::Error => "error",
        }
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Outcome of executing one job
#[derive(Debug, Clone, Copy)]
pub struct RunMetrics {
    /// Elapsed wall-clock time in seconds. For a timeout this is the
    /// configured timeout, not the true elapsed time.
    pub real_time: f64,
    pub result: QueryResult,
}

impl RunMetrics {
    pub fn new(real_time: f64, result: QueryResult) -> Self {
        Self { real_time, result }
    }
}

/// Per-classification tally of completed jobs
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct OutcomeCounts {
    pub satisfied: usize,
    pub unsatisfied: usize,
    pub timeouts: usize,
    pub errors: usize,
}

impl OutcomeCounts {
    pub fn record(&mut self, result: QueryResult) {
        match result {
            QueryResult::Satisfied => self.satisfied += 1,
            QueryResult::Unsatisfied => self.unsatisfied += 1,
            QueryResult::Timeout => self.timeouts += 1,
            QueryResult::Error => self.errors += 1,
        }
    }

    pub fn merge(&mut self, other: OutcomeCounts) {
        self.satisfied += other.satisfied;
        self.unsatisfied += other.unsatisfied;
        self.timeouts += other.timeouts;
        self.errors += other.errors;
    }

    pub fn total(&self) -> usize {
        self.satisfied + self.unsatisfied + self.timeouts + self.errors
    }
}

/// Aggregate report for one worker run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    /// Size of the global job list across all workers
    pub total_jobs: usize,
    /// Number of jobs in this worker's slice
    pub assigned_jobs: usize,
    pub counts: OutcomeCounts,
    pub wall_time_secs: f64,
}
