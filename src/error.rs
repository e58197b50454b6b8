use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, VsmError>;

/// Errors raised by the vector space model
#[derive(Debug, Error)]
pub enum VsmError {
    /// stop word source is malformed or cannot be resolved
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// stop word file cannot be read
    #[error("failed to read stop words from {}: {source}", .path.display())]
    StopWordsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("document not found: {name}")]
    DocumentNotFound { name: String },

    /// document has no surviving tokens, cosine similarity is undefined
    #[error("similarity is undefined for empty document: {name}")]
    UndefinedSimilarity { name: String },
}

impl VsmError {
    pub fn config(reason: impl Into<String>) -> Self {
        VsmError::Config { reason: reason.into() }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        VsmError::DocumentNotFound { name: name.into() }
    }

    /// construction-time failure
    #[inline]
    pub fn is_config_error(&self) -> bool {
        matches!(self, VsmError::Config { .. } | VsmError::StopWordsIo { .. })
    }

    #[inline]
    pub fn is_not_found(&self) -> bool {
        matches!(self, VsmError::DocumentNotFound { .. })
    }
}
