use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocAssemblerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Table of contents not found: {path}")]
    TocMissing { path: String },

    #[error("Extraction with {strategy} failed: {reason}")]
    Extraction { strategy: String, reason: String },

    #[error("All extraction methods failed for {path}")]
    AllStrategiesFailed { path: String },

    #[error("Failed to write {path}: {reason}")]
    Write { path: String, reason: String },

    #[error("Configuration error: {reason}")]
    Config { reason: String },

    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, DocAssemblerError>;
