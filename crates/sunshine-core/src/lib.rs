//! Permission auditing for SSH credential material
//!
//! Classifies filesystem entries by name and position, compares their
//! permission bits against a fixed policy, and collects every mismatch.
//! Nothing is ever modified.

pub mod entry;
pub mod error;
pub mod mode;
pub mod report;
pub mod rules;
pub mod walker;

pub use entry::{EntryKind, FileEntry};
pub use error::{Error, Result};
pub use mode::Mode;
pub use report::{Discrepancy, ScanReport};
pub use rules::{Role, Rule, RuleSet};
pub use walker::{ScanOptions, Scanner, scan};
