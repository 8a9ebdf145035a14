//! Permission mode values

use serde::{Serialize, Serializer};

/// Owner, group and other rwx bits. Setuid, setgid and sticky are not part
/// of the policy and are dropped with the file type.
const PERMISSION_MASK: u32 = 0o777;

/// The permission bits of a filesystem entry.
///
/// File type and special bits are stripped on construction, so two modes
/// compare equal exactly when their rwx bits match. Displays as
/// 4-digit zero-padded octal, e.g. `0600`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mode(u32);

impl Mode {
    pub const SSH_DIRECTORY: Mode = Mode(0o700);
    pub const SSH_CONFIG: Mode = Mode(0o400);
    pub const PRIVATE_KEY: Mode = Mode(0o600);
    pub const PUBLIC_KEY: Mode = Mode(0o644);
    pub const HOME_DIRECTORY: Mode = Mode(0o755);

    /// Build a mode from a raw `st_mode` value, keeping only the rwx bits.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw & PERMISSION_MASK)
    }

    /// The masked numeric value.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Read the mode of already fetched metadata.
    #[cfg(unix)]
    pub fn of(metadata: &std::fs::Metadata) -> Self {
        use std::os::unix::fs::PermissionsExt;
        Self::from_raw(metadata.permissions().mode())
    }

    /// Synthesize a mode on platforms without Unix permission bits.
    #[cfg(not(unix))]
    pub fn of(metadata: &std::fs::Metadata) -> Self {
        let readonly = metadata.permissions().readonly();
        match (metadata.is_dir(), readonly) {
            (true, false) => Self(0o755),
            (true, true) => Self(0o555),
            (false, false) => Self(0o644),
            (false, true) => Self(0o444),
        }
    }
}

impl From<u32> for Mode {
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
