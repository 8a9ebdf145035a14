//! Scan command implementation
//!
//! Chooses the traversal mode, runs the core scanner and prints the report.

use std::io::Write;
use std::path::{Path, PathBuf};

use colored::Colorize;
use sunshine_core::{ScanOptions, ScanReport, Scanner};

use crate::error::Result;

/// What to scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTarget {
    /// Recursive scan of one or more roots
    Trees(Vec<PathBuf>),
    /// Each path checked on its own
    Paths(Vec<PathBuf>),
}

impl ScanTarget {
    /// No paths scans `.` recursively; listed paths are checked directly
    /// unless `recursive` is set.
    pub fn from_args(paths: Vec<PathBuf>, recursive: bool) -> Self {
        if paths.is_empty() {
            Self::Trees(vec![PathBuf::from(".")])
        } else if recursive {
            Self::Trees(paths)
        } else {
            Self::Paths(paths)
        }
    }
}

/// Run the scan and print the report to stdout.
///
/// Returns the process exit status. The first traversal error is printed to
/// stderr after the findings, with a count of any further failures.
pub fn run_scan(target: &ScanTarget, home: &Path, options: ScanOptions, json: bool) -> Result<i32> {
    let scanner = Scanner::new(home)?.with_options(options);

    let report = match target {
        ScanTarget::Trees(roots) => scanner.scan_trees(roots),
        ScanTarget::Paths(paths) => scanner.scan_paths(paths),
    };

    render(&report, json, &mut std::io::stdout().lock())?;

    if !json {
        if let Some(error) = &report.error {
            eprintln!("{}: {}", "error".red().bold(), error);
            if report.failed > 1 {
                eprintln!(
                    "{}: {} more entries could not be read",
                    "error".red().bold(),
                    report.failed - 1
                );
            }
        }
    }

    Ok(report.exit_code())
}

/// Write the report as discrepancy lines, or as JSON.
pub fn render(report: &ScanReport, json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, report)?;
        writeln!(out)?;
        return Ok(());
    }

    for discrepancy in &report.discrepancies {
        writeln!(out, "{}", discrepancy)?;
    }
    Ok(())
}
