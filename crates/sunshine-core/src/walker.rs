//! Tree traversal and aggregation of discrepancies
//!
//! The walker visits entries depth-first, directories before their contents,
//! runs the rule set on each one and appends whatever it reports. A
//! traversal failure skips the entry (and anything beneath it) and the walk
//! carries on with its siblings. The report keeps the first failure.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::{Discrepancy, Error, FileEntry, Result, RuleSet, ScanReport};

/// Traversal settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Follow symbolic links instead of inspecting the links themselves
    pub follow_links: bool,
    /// Visit directory contents in lexical order rather than OS order
    pub sort_entries: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            follow_links: false,
            sort_entries: true,
        }
    }
}

/// Applies a [`RuleSet`] to a tree or to a list of paths.
#[derive(Debug)]
pub struct Scanner {
    rules: RuleSet,
    options: ScanOptions,
}

impl Scanner {
    /// Scanner with the standard policy for the given home directory.
    ///
    /// Fails before any filesystem access if `home` has no usable name.
    pub fn new(home: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::with_rules(RuleSet::standard(home)?))
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            rules,
            options: ScanOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Apply every rule to a single entry.
    pub fn inspect(&self, entry: &FileEntry) -> Vec<Discrepancy> {
        self.rules.evaluate(entry)
    }

    /// Recursively scan `root`, including `root` itself.
    pub fn scan_tree(&self, root: impl AsRef<Path>) -> ScanReport {
        let mut report = ScanReport::default();
        self.walk_into(root.as_ref(), &mut report);
        self.finish(report)
    }

    /// Recursively scan several roots in order. A root that fails does not
    /// prevent the following ones from being scanned.
    pub fn scan_trees<I, P>(&self, roots: I) -> ScanReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = ScanReport::default();
        for root in roots {
            self.walk_into(root.as_ref(), &mut report);
        }
        self.finish(report)
    }

    /// Inspect each path directly without descending into directories.
    pub fn scan_paths<I, P>(&self, paths: I) -> ScanReport
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut report = ScanReport::default();
        for path in paths {
            let path = path.as_ref();
            tracing::debug!(path = %path.display(), "Inspecting path");
            match self.read_path(path) {
                Ok(entry) => self.visit(&entry, &mut report),
                Err(e) => report.record_error(e),
            }
        }
        self.finish(report)
    }

    fn walk_into(&self, root: &Path, report: &mut ScanReport) {
        tracing::debug!(root = %root.display(), options = ?self.options, "Scanning tree");

        let mut walker = WalkDir::new(root).follow_links(self.options.follow_links);
        if self.options.sort_entries {
            walker = walker.sort_by_file_name();
        }

        // walkdir yields an error in place of an unreadable directory's
        // contents and moves on to the next sibling.
        for result in walker {
            match read_walk_entry(root, result) {
                Ok(entry) => self.visit(&entry, report),
                Err(e) => report.record_error(e),
            }
        }
    }

    fn read_path(&self, path: &Path) -> Result<FileEntry> {
        let metadata = if self.options.follow_links {
            std::fs::metadata(path)
        } else {
            std::fs::symlink_metadata(path)
        }
        .map_err(|e| Error::io(path, e))?;

        Ok(FileEntry::from_metadata(display_path(path), &metadata))
    }

    fn visit(&self, entry: &FileEntry, report: &mut ScanReport) {
        report.visited += 1;
        tracing::trace!(path = %entry.path.display(), mode = %entry.mode, kind = ?entry.kind, "Visiting entry");

        for found in self.inspect(entry) {
            tracing::debug!(
                path = %found.path.display(),
                role = %found.role,
                expected = %found.expected,
                actual = %found.actual,
                "Permission discrepancy"
            );
            report.discrepancies.push(found);
        }
    }

    fn finish(&self, report: ScanReport) -> ScanReport {
        tracing::debug!(
            visited = report.visited,
            found = report.discrepancies.len(),
            failed = report.failed,
            "Scan finished"
        );
        report
    }
}

/// Scan `root` recursively with the standard policy for `home`.
pub fn scan(root: impl AsRef<Path>, home: impl AsRef<Path>) -> Result<ScanReport> {
    Ok(Scanner::new(home)?.scan_tree(root))
}

fn read_walk_entry(root: &Path, result: walkdir::Result<walkdir::DirEntry>) -> Result<FileEntry> {
    let dir_entry = result.map_err(|e| Error::walk(root, e))?;
    let metadata = dir_entry.metadata().map_err(|e| Error::walk(root, e))?;
    Ok(FileEntry::from_metadata(display_path(dir_entry.path()), &metadata))
}

/// Drop leading `.` components so a walk of `.` reports `.ssh/id_rsa`
/// rather than `./.ssh/id_rsa`. A bare `.` stays as is.
fn display_path(path: &Path) -> PathBuf {
    let cleaned: PathBuf = path
        .components()
        .skip_while(|c| matches!(c, Component::CurDir))
        .collect();

    if cleaned.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        cleaned
    }
}
