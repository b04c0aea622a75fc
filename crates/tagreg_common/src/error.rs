//! Error types for tagreg.

use std::path::PathBuf;

use thiserror::Error;

use crate::vocabulary::VocabularyFormat;

/// Failures while loading an allowed-tag vocabulary.
#[derive(Error, Debug)]
pub enum VocabularyError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{format} parse error: {message}")]
    Parse {
        format: VocabularyFormat,
        message: String,
    },

    #[error("{format} content must be a top-level list of strings")]
    SchemaViolation { format: VocabularyFormat },

    #[error("auto detection failed to parse as yaml/json list of strings")]
    AutoDetectFailed,

    #[error("unsupported valid_tags_format: '{0}'")]
    UnsupportedFormat(String),
}

impl VocabularyError {
    /// Short machine-readable kind, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            VocabularyError::Io { .. } => "io",
            VocabularyError::Parse { .. } => "parse",
            VocabularyError::SchemaViolation { .. } => "schema_violation",
            VocabularyError::AutoDetectFailed => "auto_detect_failed",
            VocabularyError::UnsupportedFormat(_) => "unsupported_format",
        }
    }
}
