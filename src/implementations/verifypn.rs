use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::warn;
use tokio::process::Command;

use crate::errors::{HarnessError, HarnessResult};
use crate::models::job::ModelCheckingJob;
use crate::models::outcome::{QueryResult, RunMetrics};
use crate::traits::verifier::Verifier;

/// Marker printed by the verifier when a query holds
pub const QUERY_IS_SATISFIED: &str = "Query is satisfied";
/// Marker printed by the verifier when a query does not hold
pub const QUERY_IS_NOT_SATISFIED: &str = "Query is NOT satisfied";

/// Adapter around the VerifyPN model checking binary.
///
/// The binary is opaque: the invocation selects a single 1-based query index
/// with cardinality constraints enabled, and the outcome is recovered by
/// pattern matching two literal phrases in its stdout.
pub struct VerifyPn {
    binary: PathBuf,
}

impl VerifyPn {
    pub fn new(binary: PathBuf) -> Self {
        Self { binary }
    }

    /// Build the argument list for one job
    pub fn build_args(&self, job: &ModelCheckingJob) -> Vec<String> {
        let mut args = vec!["-C".to_string(), "-x".to_string(), job.query_index.to_string()];
        if job.query_file.is_ltl() {
            args.push("-ltl".to_string());
            args.push("tarjan".to_string());
        }
        args.push(job.model.pnml_path.to_string_lossy().into_owned());
        args.push(job.query_file.path.to_string_lossy().into_owned());
        args
    }

    /// Classify a zero-exit run from its captured stdout
    pub fn classify_output(stdout: &str) -> QueryResult {
        if stdout.contains(QUERY_IS_SATISFIED) {
            QueryResult::Satisfied
        } else if stdout.contains(QUERY_IS_NOT_SATISFIED) {
            QueryResult::Unsatisfied
        } else {
            QueryResult::Error
        }
    }
}

#[async_trait]
impl Verifier for VerifyPn {
    async fn run_job(&self, job: &ModelCheckingJob, timeout: Duration) -> HarnessResult<RunMetrics> {
        let args = self.build_args(job);
        let start = Instant::now();

        // kill_on_drop: losing the timeout race drops the wait future and
        // with it the child process handle, which terminates the verifier.
        let child = Command::new(&self.binary)
            .args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| HarnessError::VerifierLaunchError {
                binary: self.binary.display().to_string(),
                message: e.to_string(),
            })?;

        match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(Ok(output)) => {
                let elapsed = start.elapsed().as_secs_f64();
                if !output.status.success() {
                    let stderr = String::from_utf8_lossy(&output.stderr);
                    warn!(
                        "Verifier exited with {} on {}: {}",
                        output.status,
                        job,
                        stderr.trim()
                    );
                    Ok(RunMetrics::new(elapsed, QueryResult::Error))
                } else {
                    let stdout = String::from_utf8_lossy(&output.stdout);
                    Ok(RunMetrics::new(elapsed, Self::classify_output(&stdout)))
                }
            }
            Ok(Err(e)) => Err(HarnessError::IoError(e)),
            Err(_) => {
                warn!("Timeout on {}", job);
                // The recorded time is the configured timeout, not the true
                // elapsed time.
                Ok(RunMetrics::new(timeout.as_secs_f64(), QueryResult::Timeout))
            }
        }
    }
}
