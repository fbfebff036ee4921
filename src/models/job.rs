use std::fmt;
use std::sync::Arc;

use crate::models::corpus::{Model, QueryFile};

/// One (model, query file, query index) unit of verification work.
///
/// Invariant: `query_index` is in `[1, query_file.query_count]`.
#[derive(Debug, Clone)]
pub struct ModelCheckingJob {
    pub model: Arc<Model>,
    pub query_file: Arc<QueryFile>,
    /// 1-based index of the query within the query file
    pub query_index: usize,
}

impl ModelCheckingJob {
    pub fn new(model: Arc<Model>, query_file: Arc<QueryFile>, query_index: usize) -> Self {
        Self { model, query_file, query_index }
    }

    /// Printable identity of the job.
    ///
    /// Also the global sort key: independently launched workers must agree
    /// on the job order without communicating.
    pub fn identity(&self) -> String {
        format!("{} {}:{}", self.model.name, self.query_file.name(), self.query_index)
    }
}

impl fmt::Display for ModelCheckingJob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.identity())
    }
}
