use std::fs;
use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};

use crate::errors::{HarnessError, HarnessResult};
use crate::models::corpus::{Model, QueryFile};
use crate::models::job::ModelCheckingJob;

/// Fixed relative path of the model file inside each model directory
pub const MODEL_FILE_NAME: &str = "model.pnml";

/// Query files whose name contains this marker hold generic template
/// properties and are not directly runnable
pub const GENERIC_PROPERTIES_MARKER: &str = "GenericProperties";

/// Catalog of all models discovered under a corpus root
#[derive(Debug, Clone)]
pub struct QueryCatalog {
    models: Vec<Arc<Model>>,
}

impl QueryCatalog {
    /// Scan a models root directory, producing one `Model` per immediate
    /// subdirectory.
    ///
    /// A subdirectory without a readable `model.pnml`, and a query file that
    /// cannot be read, are skipped with a diagnostic; the rest of the corpus
    /// is still usable. An unreadable root is fatal.
    pub fn scan(models_root: &Path, query_file_names: &[String]) -> HarnessResult<Self> {
        let entries = fs::read_dir(models_root).map_err(|e| {
            HarnessError::CatalogError(format!(
                "cannot read models directory {}: {}",
                models_root.display(),
                e
            ))
        })?;

        let mut models = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                HarnessError::CatalogError(format!(
                    "cannot read entry under {}: {}",
                    models_root.display(),
                    e
                ))
            })?;
            let model_root = entry.path();
            if !model_root.is_dir() {
                continue;
            }

            let name = model_root
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let pnml_path = model_root.join(MODEL_FILE_NAME);
            if !pnml_path.is_file() {
                warn!("Skipping model {}: no {} found", name, MODEL_FILE_NAME);
                continue;
            }

            let mut query_files = Vec::new();
            for file_name in query_file_names {
                if file_name.contains(GENERIC_PROPERTIES_MARKER) {
                    continue;
                }
                let query_path = model_root.join(file_name);
                if !query_path.is_file() {
                    debug!("Model {} has no query file {}", name, file_name);
                    continue;
                }
                match QueryFile::load(&query_path) {
                    Ok(query_file) => {
                        debug!(
                            "Model {}: {} with {} queries",
                            name,
                            query_file.name(),
                            query_file.query_count
                        );
                        query_files.push(Arc::new(query_file));
                    }
                    Err(e) => {
                        warn!("Skipping query file {}: {}", query_path.display(), e);
                    }
                }
            }

            models.push(Arc::new(Model::new(name, pnml_path, query_files)));
        }

        Ok(Self { models })
    }

    pub fn models(&self) -> &[Arc<Model>] {
        &self.models
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

/// Cross-product every model with every (query file, query index) pair into
/// a flat, deterministically ordered job list.
///
/// The sort by printable identity is not cosmetic: it is the sole mechanism
/// by which independently launched worker processes arrive at an identical
/// total ordering of the work.
pub fn enumerate_jobs(catalog: &QueryCatalog) -> Vec<ModelCheckingJob> {
    let mut jobs = Vec::new();
    for model in catalog.models() {
        for query_file in &model.query_files {
            for query_index in 1..=query_file.query_count {
                jobs.push(ModelCheckingJob::new(
                    Arc::clone(model),
                    Arc::clone(query_file),
                    query_index,
                ));
            }
        }
    }
    jobs.sort_by(|a, b| a.identity().cmp(&b.identity()));
    jobs
}
