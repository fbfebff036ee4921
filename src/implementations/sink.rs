use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::errors::{HarnessError, HarnessResult};
use crate::models::job::ModelCheckingJob;
use crate::models::outcome::RunMetrics;

/// Header row of the results file
pub const CSV_HEADER: &str = "model name,query name,query index,result,time";

/// Append-only CSV writer for completed job outcomes.
///
/// Rows are written in completion order, one per job, and flushed after
/// every write so partial results survive an abrupt interruption. Callers
/// must serialize access; the execution engine guards the sink with a mutex.
pub struct CsvResultSink {
    file: File,
}

impl CsvResultSink {
    /// Open (or create) the destination file and write the header row
    pub fn create(path: &Path) -> HarnessResult<Self> {
        let mut file = File::create(path).map_err(|e| {
            HarnessError::SinkError(format!("cannot create {}: {}", path.display(), e))
        })?;
        writeln!(file, "{}", CSV_HEADER)?;
        file.flush()?;
        Ok(Self { file })
    }

    /// Append one result row
    pub fn append(&mut self, job: &ModelCheckingJob, metrics: &RunMetrics) -> HarnessResult<()> {
        writeln!(
            self.file,
            "{},{},{},{},{}",
            job.model.name,
            job.query_file.name(),
            job.query_index,
            metrics.result,
            metrics.real_time
        )?;
        self.file.flush()?;
        Ok(())
    }

    pub fn flush(&mut self) -> HarnessResult<()> {
        self.file.flush()?;
        Ok(())
    }
}
