//! [`TestTree`] builder for permission audit scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree whose entries get explicit permission bits.
///
/// Parents are created with default permissions. Restrict directories only
/// after their contents exist; [`Drop`] restores write access so cleanup
/// succeeds either way.
///
/// # Example
///
/// ```rust,no_run
/// use sunshine_test_utils::TestTree;
///
/// let tree = TestTree::new();
/// tree.file(".ssh/id_ed25519", 0o600);
/// tree.dir(".ssh", 0o700);
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the tree.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Create (or reuse) directory `rel` and set its mode.
    pub fn dir(&self, rel: &str, mode: u32) -> &Self {
        let path = self.path(rel);
        fs::create_dir_all(&path)
            .unwrap_or_else(|e| panic!("TestTree::dir: {}: {}", path.display(), e));
        self.chmod(rel, mode)
    }

    /// Write file `rel`, creating missing parents, and set its mode.
    pub fn file(&self, rel: &str, mode: u32) -> &Self {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, rel.as_bytes())
            .unwrap_or_else(|e| panic!("TestTree::file: {}: {}", path.display(), e));
        self.chmod(rel, mode)
    }

    /// A `.ssh` directory under `base` holding compliant key material.
    ///
    /// Pass `""` for `base` to place it at the root.
    pub fn compliant_ssh(&self, base: &str) -> &Self {
        let ssh = Path::new(base).join(".ssh");
        let ssh = ssh.to_string_lossy();
        self.file(&format!("{ssh}/config"), 0o400)
            .file(&format!("{ssh}/id_ed25519"), 0o600)
            .file(&format!("{ssh}/id_ed25519.pub"), 0o644)
            .file(&format!("{ssh}/authorized_keys"), 0o600)
            .file(&format!("{ssh}/known_hosts"), 0o644)
            .dir(&ssh, 0o700)
    }

    /// Set the mode of an existing entry.
    #[cfg(unix)]
    pub fn chmod(&self, rel: &str, mode: u32) -> &Self {
        use std::os::unix::fs::PermissionsExt;
        let path = self.path(rel);
        fs::set_permissions(&path, fs::Permissions::from_mode(mode))
            .unwrap_or_else(|e| panic!("TestTree::chmod: {}: {}", path.display(), e));
        self
    }

    #[cfg(not(unix))]
    pub fn chmod(&self, _rel: &str, _mode: u32) -> &Self {
        self
    }

    /// Create symlink `rel` pointing at `target`.
    #[cfg(unix)]
    pub fn symlink(&self, target: &str, rel: &str) -> &Self {
        std::os::unix::fs::symlink(target, self.path(rel)).unwrap();
        self
    }
}

impl Drop for TestTree {
    fn drop(&mut self) {
        restore_access(self.temp_dir.path());
    }
}

#[cfg(unix)]
fn restore_access(dir: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let _ = fs::set_permissions(dir, fs::Permissions::from_mode(0o755));
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            restore_access(&entry.path());
        }
    }
}

#[cfg(not(unix))]
fn restore_access(_dir: &Path) {}

/// Whether the tests run with root privileges, which bypass permission
/// checks on unreadable directories.
pub fn is_root() -> bool {
    match std::process::Command::new("id").arg("-u").output() {
        Ok(output) => String::from_utf8_lossy(&output.stdout).trim() == "0",
        Err(_) => false,
    }
}
