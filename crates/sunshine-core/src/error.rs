//! Error types for sunshine-core

use std::path::PathBuf;

/// Result type for sunshine-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a scanner or walking a tree
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Home directory {path} has no usable directory name")]
    InvalidHome { path: PathBuf },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wrap a walkdir failure, falling back to `root` when the error
    /// carries no path of its own.
    pub fn walk(root: &std::path::Path, source: walkdir::Error) -> Self {
        let path = source
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| root.to_path_buf());
        Self::Walk { path, source }
    }

    /// The path the failure occurred at.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::InvalidHome { path } | Self::Io { path, .. } | Self::Walk { path, .. } => path,
        }
    }
}
