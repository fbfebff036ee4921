use thiserror::Error;

/// Custom error types for the pnbench harness
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Catalog error: {0}")]
    CatalogError(String),

    #[error("Invalid worker partition: index {index} is out of range for {count} workers")]
    PartitionError { index: usize, count: usize },

    #[error("Failed to launch verifier {binary}: {message}")]
    VerifierLaunchError { binary: String, message: String },

    #[error("Result sink error: {0}")]
    SinkError(String),

    #[error("Execution error: {0}")]
    ExecutionError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type specific to harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;
