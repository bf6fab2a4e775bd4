//! Errors raised while loading a POM document.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PomError {
    #[error("Failed to read '{path}': {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed POM document '{path}': {message}")]
    MalformedDocument { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, PomError>;

impl PomError {
    pub(crate) fn malformed(path: &str, message: impl Into<String>) -> Self {
        Self::MalformedDocument {
            path: path.to_string(),
            message: message.into(),
        }
    }

    /// Path of the document that failed.
    pub fn path(&self) -> &str {
        match self {
            Self::SourceUnavailable { path, .. } | Self::MalformedDocument { path, .. } => path,
        }
    }
}
