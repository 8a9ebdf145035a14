//! The ordered collection of rules applied to every entry

use std::path::Path;

use super::{
    AuthorizedKeys, HomeDirectory, KnownHosts, Rule, SshConfig, SshDirectory, SshPrivateKey,
    SshPublicKey,
};
use crate::{Discrepancy, FileEntry, Result};

/// Rules evaluated in declaration order.
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<Box<dyn Rule + Send + Sync>>,
}

impl RuleSet {
    /// An empty set, for composing custom policies.
    pub fn new() -> Self {
        Self::default()
    }

    /// The SSH policy plus the home directory rule for `home`.
    pub fn standard(home: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new()
            .with(SshDirectory)
            .with(SshConfig)
            .with(SshPrivateKey)
            .with(SshPublicKey)
            .with(AuthorizedKeys)
            .with(KnownHosts)
            .with(HomeDirectory::new(home)?))
    }

    /// Append a rule.
    pub fn with(mut self, rule: impl Rule + Send + Sync + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Every discrepancy `entry` produces, in rule order.
    pub fn evaluate(&self, entry: &FileEntry) -> Vec<Discrepancy> {
        self.rules.iter().filter_map(|rule| rule.check(entry)).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn Rule + Send + Sync)> {
        self.rules.iter().map(|rule| rule.as_ref())
    }
}
