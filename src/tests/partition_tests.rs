#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::{Arc, Mutex};
    use std::thread;

    use crate::implementations::partition::{assigned_count, JobCursor};

    fn drain(cursor: &JobCursor) -> Vec<usize> {
        let mut claims = Vec::new();
        while let Some(index) = cursor.claim() {
            claims.push(index);
        }
        claims
    }

    #[test]
    fn strided_slices_cover_all_jobs_exactly_once() {
        for total in [0usize, 1, 5, 6, 17, 100] {
            for worker_count in [1usize, 2, 3, 7] {
                let mut seen = Vec::new();
                for worker_index in 0..worker_count {
                    let cursor = JobCursor::new(total, worker_count, worker_index).unwrap();
                    let claims = drain(&cursor);
                    assert_eq!(
                        claims.len(),
                        assigned_count(total, worker_count, worker_index),
                        "assigned_count mismatch for N={} W={} I={}",
                        total,
                        worker_count,
                        worker_index
                    );
                    seen.extend(claims);
                }
                seen.sort_unstable();
                let expected: Vec<usize> = (0..total).collect();
                assert_eq!(
                    seen, expected,
                    "slices must union to the full range for N={} W={}",
                    total, worker_count
                );
            }
        }
    }

    #[test]
    fn two_workers_split_six_jobs() {
        let worker0 = JobCursor::new(6, 2, 0).unwrap();
        let worker1 = JobCursor::new(6, 2, 1).unwrap();
        assert_eq!(drain(&worker0), vec![0, 2, 4]);
        assert_eq!(drain(&worker1), vec![1, 3, 5]);
    }

    #[test]
    fn last_assigned_job_is_claimed() {
        let cursor = JobCursor::new(10, 1, 0).unwrap();
        let claims = drain(&cursor);
        assert_eq!(claims, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn claim_keeps_returning_none_once_drained() {
        let cursor = JobCursor::new(3, 1, 0).unwrap();
        drain(&cursor);
        assert_eq!(cursor.claim(), None);
        assert_eq!(cursor.claim(), None);
    }

    #[test]
    fn rejects_invalid_partitions() {
        assert!(JobCursor::new(10, 0, 0).is_err());
        assert!(JobCursor::new(10, 2, 2).is_err());
        assert!(JobCursor::new(10, 2, 5).is_err());
    }

    #[test]
    fn concurrent_slots_never_claim_the_same_index() {
        let total = 1000;
        let cursor = Arc::new(JobCursor::new(total, 3, 1).unwrap());
        let claimed: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));

        let mut handles = Vec::new();
        for _ in 0..4 {
            let cursor = Arc::clone(&cursor);
            let claimed = Arc::clone(&claimed);
            handles.push(thread::spawn(move || {
                while let Some(index) = cursor.claim() {
                    claimed.lock().unwrap().push(index);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let claimed = claimed.lock().unwrap();
        let unique: HashSet<usize> = claimed.iter().copied().collect();
        assert_eq!(unique.len(), claimed.len(), "duplicate claims across slots");
        assert_eq!(claimed.len(), assigned_count(total, 3, 1));
        assert!(claimed.iter().all(|i| i % 3 == 1));
    }

    #[test]
    fn assigned_count_handles_short_lists() {
        assert_eq!(assigned_count(0, 4, 2), 0);
        assert_eq!(assigned_count(2, 4, 2), 0);
        assert_eq!(assigned_count(3, 4, 2), 1);
        assert_eq!(assigned_count(4, 4, 3), 1);
    }
}
