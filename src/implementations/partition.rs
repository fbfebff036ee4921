use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::{HarnessError, HarnessResult};

/// Atomically advancing cursor implementing the strided work partition.
///
/// Worker `I` of `W` claims global job positions `I, I+W, I+2W, ...` so that
/// `W` independently launched workers cover the full job list exactly once
/// with no coordination. All concurrent slots within one worker share the
/// same cursor, which keeps the two partitioning layers disjoint by
/// construction.
#[derive(Debug)]
pub struct JobCursor {
    next: AtomicUsize,
    worker_index: usize,
    stride: usize,
    limit: usize,
}

impl JobCursor {
    pub fn new(total_jobs: usize, worker_count: usize, worker_index: usize) -> HarnessResult<Self> {
        if worker_count == 0 || worker_index >= worker_count {
            return Err(HarnessError::PartitionError {
                index: worker_index,
                count: worker_count,
            });
        }
        Ok(Self {
            next: AtomicUsize::new(worker_index),
            worker_index,
            stride: worker_count,
            limit: total_jobs,
        })
    }

    /// Claim the next job position assigned to this worker, or `None` when
    /// the slice is drained. The claimed position itself is bounds-checked,
    /// so the final assigned job is never dropped.
    pub fn claim(&self) -> Option<usize> {
        let index = self.next.fetch_add(self.stride, Ordering::SeqCst);
        if index < self.limit {
            Some(index)
        } else {
            None
        }
    }

    /// Number of positions this cursor will claim over its lifetime
    pub fn assigned(&self) -> usize {
        assigned_count(self.limit, self.stride, self.worker_index)
    }

    /// Position of a claimed global index within this worker's slice
    pub fn slice_position(&self, index: usize) -> usize {
        (index - self.worker_index) / self.stride
    }
}

/// Number of positions in `[0, total_jobs)` assigned to `worker_index` under
/// a stride of `worker_count`
pub fn assigned_count(total_jobs: usize, worker_count: usize, worker_index: usize) -> usize {
    if worker_index >= total_jobs {
        0
    } else {
        (total_jobs - worker_index - 1) / worker_count + 1
    }
}
