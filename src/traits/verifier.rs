use std::time::Duration;

use async_trait::async_trait;

use crate::errors::HarnessResult;
use crate::models::job::ModelCheckingJob;
use crate::models::outcome::RunMetrics;

/// Trait for executing one model checking job against an external verifier.
///
/// Implementations classify every completed invocation into exactly one of
/// the four terminal outcomes; only a failure to launch the verifier at all
/// is surfaced as an error, since no job can make progress without a binary.
#[async_trait]
pub trait Verifier: Send + Sync {
    /// Run a single job with the given per-query timeout
    async fn run_job(&self, job: &ModelCheckingJob, timeout: Duration) -> HarnessResult<RunMetrics>;
}
