//! Error types for civic-ingest

use thiserror::Error;

/// Ingest error type
#[derive(Debug, Error)]
pub enum IngestError {
    /// Transport failure talking to a remote host
    #[error("Network error: {0}")]
    Network(String),

    /// Remote host answered with a non-success status
    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    /// Extraction service returned an error or no usable text
    #[error("Extraction service error: {0}")]
    Extraction(String),

    /// Response body could not be interpreted
    #[error("Parse error: {0}")]
    Parse(String),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// civic-common error (database, I/O)
    #[error(transparent)]
    Common(#[from] civic_common::Error),
}

/// Result type for ingest operations
pub type IngestResult<T> = Result<T, IngestError>;
