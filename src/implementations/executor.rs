use std::sync::Arc;
use std::time::Duration;

use indicatif::ProgressBar;
use log::{debug, info};
use tokio::sync::Mutex;
use tokio::task::JoinSet;

use crate::errors::{HarnessError, HarnessResult};
use crate::implementations::partition::JobCursor;
use crate::implementations::sink::CsvResultSink;
use crate::models::job::ModelCheckingJob;
use crate::models::outcome::OutcomeCounts;
use crate::traits::verifier::Verifier;

/// Concurrent execution engine for one worker instance.
///
/// A fixed number of slots pull jobs from the shared cursor; a slot blocks
/// only on its own child process completion or timeout, never on other
/// slots. The cursor and the sink are the only state shared across slots.
pub struct ExecutionEngine {
    jobs: Arc<Vec<ModelCheckingJob>>,
    verifier: Arc<dyn Verifier>,
    cursor: Arc<JobCursor>,
    sink: Arc<Mutex<CsvResultSink>>,
    timeout: Duration,
    slots: usize,
    progress: Option<ProgressBar>,
}

impl ExecutionEngine {
    pub fn new(
        jobs: Vec<ModelCheckingJob>,
        verifier: Arc<dyn Verifier>,
        cursor: JobCursor,
        sink: Arc<Mutex<CsvResultSink>>,
        timeout: Duration,
        slots: usize,
    ) -> Self {
        Self {
            jobs: Arc::new(jobs),
            verifier,
            cursor: Arc::new(cursor),
            sink,
            timeout,
            slots: slots.max(1),
            progress: None,
        }
    }

    /// Attach a progress bar advanced once per completed job
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    /// Run all jobs assigned to this worker and return the outcome tally.
    ///
    /// Per-job timeouts and engine errors are recorded as normal results; a
    /// verifier launch failure aborts the whole run.
    pub async fn drain(&self) -> HarnessResult<OutcomeCounts> {
        let assigned = self.cursor.assigned();
        info!(
            "Running {} jobs on {} concurrent slots",
            assigned, self.slots
        );

        let mut set: JoinSet<HarnessResult<OutcomeCounts>> = JoinSet::new();
        for slot in 0..self.slots {
            let jobs = Arc::clone(&self.jobs);
            let verifier = Arc::clone(&self.verifier);
            let cursor = Arc::clone(&self.cursor);
            let sink = Arc::clone(&self.sink);
            let progress = self.progress.clone();
            let timeout = self.timeout;
            set.spawn(async move {
                slot_loop(slot, jobs, verifier, cursor, sink, progress, timeout).await
            });
        }

        let mut counts = OutcomeCounts::default();
        while let Some(joined) = set.join_next().await {
            let slot_counts =
                joined.map_err(|e| HarnessError::ExecutionError(format!("slot panicked: {}", e)))??;
            counts.merge(slot_counts);
        }
        Ok(counts)
    }
}

async fn slot_loop(
    slot: usize,
    jobs: Arc<Vec<ModelCheckingJob>>,
    verifier: Arc<dyn Verifier>,
    cursor: Arc<JobCursor>,
    sink: Arc<Mutex<CsvResultSink>>,
    progress: Option<ProgressBar>,
    timeout: Duration,
) -> HarnessResult<OutcomeCounts> {
    let assigned = cursor.assigned();
    let mut counts = OutcomeCounts::default();

    while let Some(index) = cursor.claim() {
        let job = &jobs[index];
        let position = cursor.slice_position(index);
        debug!(
            "[slot {}] {}/{} # {}",
            slot,
            position,
            assigned,
            job
        );
        if let Some(pb) = &progress {
            pb.set_message(job.identity());
        }

        let metrics = verifier.run_job(job, timeout).await?;
        counts.record(metrics.result);

        // One row at a time; the mutex serializes the write boundary.
        sink.lock().await.append(job, &metrics)?;
        if let Some(pb) = &progress {
            pb.inc(1);
        }
    }

    debug!("[slot {}] slice drained", slot);
    Ok(counts)
}
