//! Rules for SSH client and server material

use regex::Regex;
use std::sync::LazyLock;

use super::{Role, Rule};
use crate::FileEntry;

/// Directory holding per-user SSH material
pub const SSH_DIR_NAME: &str = ".ssh";

/// Pattern for key file names, private or public
pub static SSH_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^id_.+$").unwrap());

/// Pattern for public key file names
pub static SSH_PUBLIC_KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^id_.+\.pub$").unwrap());

pub fn is_ssh_key_name(name: &str) -> bool {
    SSH_KEY_PATTERN.is_match(name)
}

pub fn is_ssh_public_key_name(name: &str) -> bool {
    SSH_PUBLIC_KEY_PATTERN.is_match(name)
}

/// `.ssh` itself.
///
/// Matches on name alone, so a non-directory called `.ssh` is checked too.
#[derive(Debug, Clone, Copy, Default)]
pub struct SshDirectory;

impl Rule for SshDirectory {
    fn role(&self) -> Role {
        Role::SshDirectory
    }

    fn applies_to(&self, entry: &FileEntry) -> bool {
        entry.name == SSH_DIR_NAME
    }
}

/// `.ssh/config`
#[derive(Debug, Clone, Copy, Default)]
pub struct SshConfig;

impl Rule for SshConfig {
    fn role(&self) -> Role {
        Role::SshConfig
    }

    fn applies_to(&self, entry: &FileEntry) -> bool {
        entry.name == "config" && entry.parent_is(SSH_DIR_NAME)
    }
}

/// `.ssh/id_*` other than `.pub` files
#[derive(Debug, Clone, Copy, Default)]
pub struct SshPrivateKey;

impl Rule for SshPrivateKey {
    fn role(&self) -> Role {
        Role::SshPrivateKey
    }

    fn applies_to(&self, entry: &FileEntry) -> bool {
        is_ssh_key_name(&entry.name)
            && !is_ssh_public_key_name(&entry.name)
            && entry.parent_is(SSH_DIR_NAME)
    }
}

/// `.ssh/id_*.pub`
#[derive(Debug, Clone, Copy, Default)]
pub struct SshPublicKey;

impl Rule for SshPublicKey {
    fn role(&self) -> Role {
        Role::SshPublicKey
    }

    fn applies_to(&self, entry: &FileEntry) -> bool {
        is_ssh_public_key_name(&entry.name) && entry.parent_is(SSH_DIR_NAME)
    }
}

/// `authorized_keys` in any directory, e.g. `/etc/ssh` as well as `~/.ssh`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorizedKeys;

impl Rule for AuthorizedKeys {
    fn role(&self) -> Role {
        Role::AuthorizedKeys
    }

    fn applies_to(&self, entry: &FileEntry) -> bool {
        entry.name == "authorized_keys"
    }
}

/// `known_hosts` in any directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnownHosts;

impl Rule for KnownHosts {
    fn role(&self) -> Role {
        Role::KnownHosts
    }

    fn applies_to(&self, entry: &FileEntry) -> bool {
        entry.name == "known_hosts"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{EntryKind, Mode};

    fn file(path: &str, mode: u32) -> FileEntry {
        FileEntry::new(path, EntryKind::File, Mode::from_raw(mode))
    }

    #[test]
    fn test_key_patterns() {
        assert!(is_ssh_key_name("id_rsa"));
        assert!(is_ssh_key_name("id_ed25519.pub"));
        assert!(!is_ssh_key_name("id_"));
        assert!(!is_ssh_key_name("my_id_rsa"));

        assert!(is_ssh_public_key_name("id_rsa.pub"));
        assert!(!is_ssh_public_key_name("id_.pub"));
        assert!(!is_ssh_public_key_name("id_rsa.pub.bak"));
    }

    #[test]
    fn test_private_and_public_are_exclusive() {
        let key = file(".ssh/id_rsa.pub", 0o600);
        assert!(SshPublicKey.applies_to(&key));
        assert!(!SshPrivateKey.applies_to(&key));
    }

    #[test]
    fn test_config_requires_ssh_parent() {
        assert!(SshConfig.applies_to(&file("home/.ssh/config", 0o400)));
        assert!(!SshConfig.applies_to(&file("project/config", 0o777)));
        assert!(!SshConfig.applies_to(&file("config", 0o777)));
    }

    #[test]
    fn test_keys_outside_ssh_are_ignored() {
        assert!(!SshPrivateKey.applies_to(&file("backup/id_rsa", 0o644)));
        assert!(!SshPublicKey.applies_to(&file("backup/id_rsa.pub", 0o600)));
    }

    #[test]
    fn test_check_reports_expected_and_actual() {
        let found = SshPrivateKey.check(&file(".ssh/id_test", 0o644)).unwrap();
        assert_eq!(found.role, Role::SshPrivateKey);
        assert_eq!(found.expected, Mode::PRIVATE_KEY);
        assert_eq!(found.actual, Mode::from_raw(0o644));
    }

    #[test]
    fn test_check_compliant_is_none() {
        assert!(KnownHosts.check(&file("etc/ssh/known_hosts", 0o644)).is_none());
        assert!(AuthorizedKeys.check(&file("authorized_keys", 0o600)).is_none());
    }
}
