use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Configuration for one worker run of the harness
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Directory containing the MCC model folders
    pub models_dir: PathBuf,

    /// Timeout for each query of a model in seconds
    pub timeout_secs: u64,

    /// Path to the verifypn binary
    pub binary: PathBuf,

    /// Destination CSV file for the results
    pub out: PathBuf,

    /// Number of concurrent verifier invocations within this worker
    pub threads: usize,

    /// Total number of cooperating worker instances
    pub worker_count: usize,

    /// 0-based index of this worker instance
    pub worker_index: usize,

    /// Reserved error directory index, accepted but unused by the core
    pub error_directory: usize,

    /// Query file names to look for in each model directory
    pub query_file_names: Vec<String>,
}

/// Partial configuration as read from a YAML file; fields present in the
/// file override the command line values
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarnessConfigFile {
    pub models_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
    pub binary: Option<PathBuf>,
    pub out: Option<PathBuf>,
    pub threads: Option<usize>,
    pub worker_count: Option<usize>,
    pub worker_index: Option<usize>,
    pub error_directory: Option<usize>,
    pub query_file_names: Option<Vec<String>>,
}

impl HarnessConfigFile {
    /// Load a partial configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: HarnessConfigFile = serde_yaml::from_str(&contents)?;
        Ok(config)
    }
}

impl HarnessConfig {
    /// Overlay file-provided fields onto this configuration
    pub fn apply_file(&mut self, file: HarnessConfigFile) {
        if let Some(models_dir) = file.models_dir {
            self.models_dir = models_dir;
        }
        if let Some(timeout_secs) = file.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        if let Some(binary) = file.binary {
            self.binary = binary;
        }
        if let Some(out) = file.out {
            self.out = out;
        }
        if let Some(threads) = file.threads {
            self.threads = threads;
        }
        if let Some(worker_count) = file.worker_count {
            self.worker_count = worker_count;
        }
        if let Some(worker_index) = file.worker_index {
            self.worker_index = worker_index;
        }
        if let Some(error_directory) = file.error_directory {
            self.error_directory = error_directory;
        }
        if let Some(query_file_names) = file.query_file_names {
            self.query_file_names = query_file_names;
        }
    }
}
