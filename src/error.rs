//! Error types for index construction and cache persistence

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures raised while building, loading or saving an anagram index
#[derive(Debug, Error)]
pub enum IndexError {
    /// Dictionary or cache file is missing or unreadable
    #[error("failed to read {}: {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Cache artifact exists but cannot be decoded
    #[error("cache {} is unusable: {reason}", .path.display())]
    Deserialization { path: PathBuf, reason: String },

    /// Cache artifact could not be written
    #[error("failed to write cache {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl IndexError {
    /// Path of the file the error refers to
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::SourceRead { path, .. }
            | Self::Deserialization { path, .. }
            | Self::Persist { path, .. } => path.as_path(),
        }
    }

    /// Whether the underlying file simply does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SourceRead { source, .. } if source.kind() == io::ErrorKind::NotFound
        )
    }
}
