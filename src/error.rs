//! Error type shared by generation, assembly and verification.

use std::io;

/// Errors raised while seeding a user list document.
///
/// Generation and writing only ever fail with `SourceUnavailable` or
/// `WriteError`. The remaining variants belong to verification and
/// configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The random source could not produce a value
    #[error("random source unavailable: {reason}")]
    SourceUnavailable { reason: String },

    /// The sink rejected or failed the write
    #[error("failed to write {target}: {source}")]
    WriteError {
        target: String,
        #[source]
        source: io::Error,
    },

    /// Document could not be encoded or decoded as JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A parsed document does not have the user list shape
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    /// Configuration or descriptor override was rejected
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SeedError {
    pub fn source_unavailable(reason: impl Into<String>) -> Self {
        SeedError::SourceUnavailable {
            reason: reason.into(),
        }
    }

    pub fn write_error(target: impl Into<String>, source: io::Error) -> Self {
        SeedError::WriteError {
            target: target.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SeedError>;
