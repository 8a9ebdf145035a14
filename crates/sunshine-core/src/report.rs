//! Scan findings

use std::path::PathBuf;

use serde::{Serialize, Serializer};

use crate::{Error, Mode, Role};

/// An entry whose permission bits do not match its role's policy.
///
/// Displays as `<path>: expected chmod <NNNN>, got <NNNN>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Discrepancy {
    pub path: PathBuf,
    pub role: Role,
    pub expected: Mode,
    pub actual: Mode,
}

impl std::fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: expected chmod {}, got {}",
            self.path.display(),
            self.expected,
            self.actual
        )
    }
}

/// Outcome of one scan.
///
/// `discrepancies` holds every finding in visitation order. Entries that
/// could not be read are counted in `failed`; the first such failure is kept
/// in `error`.
#[derive(Debug, Default, Serialize)]
pub struct ScanReport {
    pub discrepancies: Vec<Discrepancy>,
    #[serde(serialize_with = "serialize_error")]
    pub error: Option<Error>,
    pub visited: usize,
    pub failed: usize,
}

impl ScanReport {
    /// Discrepancies rendered as output lines.
    pub fn warnings(&self) -> Vec<String> {
        self.discrepancies.iter().map(ToString::to_string).collect()
    }

    /// No findings and no traversal error.
    pub fn is_clean(&self) -> bool {
        self.discrepancies.is_empty() && self.error.is_none()
    }

    /// Process exit status: `0` when clean, `1` otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() { 0 } else { 1 }
    }

    /// Note a traversal failure. Only the first one is retained.
    pub fn record_error(&mut self, error: Error) {
        tracing::warn!(%error, "Skipping unreadable entry");
        self.failed += 1;
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}

fn serialize_error<S: Serializer>(error: &Option<Error>, serializer: S) -> Result<S::Ok, S::Error> {
    match error {
        Some(e) => serializer.collect_str(e),
        None => serializer.serialize_none(),
    }
}
