//! Rule for the invoking user's home directory

use std::path::Path;

use super::{Role, Rule};
use crate::{Error, FileEntry, Result};

/// Any entry whose name equals the home directory's final component.
///
/// The name is captured once when the rule is built; the rule never reads
/// the environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDirectory {
    name: String,
}

impl HomeDirectory {
    /// Build the rule from the resolved home directory path.
    ///
    /// Fails for paths with no final component, such as `/` or `..`.
    pub fn new(home: impl AsRef<Path>) -> Result<Self> {
        let home = home.as_ref();
        let name = home
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| Error::InvalidHome {
                path: home.to_path_buf(),
            })?;

        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Rule for HomeDirectory {
    fn role(&self) -> Role {
        Role::HomeDirectory
    }

    fn applies_to(&self, entry: &FileEntry) -> bool {
        entry.name == self.name
    }
}
