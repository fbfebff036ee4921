pub mod models;
pub mod traits;
pub mod errors;
pub mod config;
pub mod implementations;
#[cfg(test)]
pub mod tests;

// Re-export core components
pub use config::{HarnessConfig, HarnessConfigFile};
pub use errors::{HarnessError, HarnessResult};
pub use implementations::catalog::{enumerate_jobs, QueryCatalog};
pub use implementations::executor::ExecutionEngine;
pub use implementations::partition::{assigned_count, JobCursor};
pub use implementations::sink::CsvResultSink;
pub use implementations::verifypn::VerifyPn;
pub use models::{
    corpus::{Model, QueryFile},
    job::ModelCheckingJob,
    outcome::{OutcomeCounts, QueryResult, RunMetrics, RunSummary},
};
pub use traits::Verifier;
