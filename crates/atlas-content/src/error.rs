//! Content error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::loader::ContentFormat;

/// Errors from loading or reading the topic registry.
#[derive(Debug, Error)]
pub enum ContentError {
    /// No topic has the requested slug.
    #[error("Topic not found: {slug}")]
    NotFound { slug: String },

    /// A content file or directory could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A content file is not valid JSON/TOML or does not hold topics.
    #[error("failed to parse {format} content in {}: {message}", path.display())]
    Parse {
        path: PathBuf,
        format: ContentFormat,
        message: String,
    },

    /// Directory traversal failed.
    #[error("failed to walk content directory {}: {message}", path.display())]
    Walk { path: PathBuf, message: String },
}

impl ContentError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
