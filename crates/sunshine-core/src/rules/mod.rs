//! Permission policy rules
//!
//! Each rule classifies an entry by name and position and, when it applies,
//! compares the entry's mode with the one expected for that role. Rules are
//! pure and independent of each other and of traversal order.

mod home;
mod set;
mod ssh;

pub use home::HomeDirectory;
pub use set::RuleSet;
pub use ssh::{
    AuthorizedKeys, KnownHosts, SshConfig, SshDirectory, SshPrivateKey, SshPublicKey,
    is_ssh_key_name, is_ssh_public_key_name,
};

use serde::Serialize;

use crate::{Discrepancy, FileEntry, Mode};

/// The role an entry was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    /// A `.ssh` directory
    SshDirectory,
    /// `config` inside `.ssh`
    SshConfig,
    /// `id_*` inside `.ssh`, excluding `.pub`
    SshPrivateKey,
    /// `id_*.pub` inside `.ssh`
    SshPublicKey,
    /// `authorized_keys` anywhere
    AuthorizedKeys,
    /// `known_hosts` anywhere
    KnownHosts,
    /// A directory named like the user's home directory
    HomeDirectory,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SshDirectory => "ssh-directory",
            Self::SshConfig => "ssh-config",
            Self::SshPrivateKey => "ssh-private-key",
            Self::SshPublicKey => "ssh-public-key",
            Self::AuthorizedKeys => "authorized-keys",
            Self::KnownHosts => "known-hosts",
            Self::HomeDirectory => "home-directory",
        }
    }

    /// Policy mode for entries in this role.
    pub fn expected_mode(&self) -> Mode {
        match self {
            Self::SshDirectory => Mode::SSH_DIRECTORY,
            Self::SshConfig => Mode::SSH_CONFIG,
            Self::SshPrivateKey | Self::AuthorizedKeys => Mode::PRIVATE_KEY,
            Self::SshPublicKey | Self::KnownHosts => Mode::PUBLIC_KEY,
            Self::HomeDirectory => Mode::HOME_DIRECTORY,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classifier paired with the mode its entries must have.
pub trait Rule: std::fmt::Debug {
    /// Role assigned to matching entries.
    fn role(&self) -> Role;

    /// Whether `entry` belongs to this rule's role.
    fn applies_to(&self, entry: &FileEntry) -> bool;

    fn expected(&self) -> Mode {
        self.role().expected_mode()
    }

    /// One discrepancy if the rule applies and the mode differs, else none.
    fn check(&self, entry: &FileEntry) -> Option<Discrepancy> {
        if !self.applies_to(entry) || entry.mode == self.expected() {
            return None;
        }

        Some(Discrepancy {
            path: entry.path.clone(),
            role: self.role(),
            expected: self.expected(),
            actual: entry.mode,
        })
    }
}
