//! Visited filesystem entries

use std::fs::Metadata;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{Error, Mode, Result};

/// What kind of object an entry is, as seen without following links.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    Other,
}

impl EntryKind {
    fn of(metadata: &Metadata) -> Self {
        let file_type = metadata.file_type();
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// A filesystem object as the rules see it.
///
/// Only names, position and permission bits are carried; content is never
/// read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path as reported in discrepancies
    pub path: PathBuf,
    /// Final path component
    pub name: String,
    /// Final component of the parent directory, if the path has one
    pub parent_name: Option<String>,
    /// Permission bits
    pub mode: Mode,
    /// File, directory, link or other
    pub kind: EntryKind,
}

impl FileEntry {
    /// Build an entry from a path and already known attributes.
    ///
    /// The base name falls back to the whole path for paths without a
    /// final component such as `.` or `/`.
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind, mode: Mode) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        let parent_name = path
            .parent()
            .and_then(Path::file_name)
            .map(|n| n.to_string_lossy().into_owned());

        Self {
            path,
            name,
            parent_name,
            mode,
            kind,
        }
    }

    /// Build an entry from metadata fetched by the caller.
    pub fn from_metadata(path: impl Into<PathBuf>, metadata: &Metadata) -> Self {
        Self::new(path, EntryKind::of(metadata), Mode::of(metadata))
    }

    /// Stat `path` without following a final symlink.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::symlink_metadata(path).map_err(|e| Error::io(path, e))?;
        Ok(Self::from_metadata(path, &metadata))
    }

    /// Whether the entry's parent directory is named `name`.
    pub fn parent_is(&self, name: &str) -> bool {
        self.parent_name.as_deref() == Some(name)
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
