//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;
use sunshine_core::ScanOptions;

/// sunshine - Audit permissions of SSH keys, configs and directories
///
/// With no PATHS, scans the current directory recursively. With PATHS,
/// checks each one directly unless --recursive is given.
///
/// Exits 1 when any discrepancy or error is found.
#[derive(Parser, Debug)]
#[command(name = "sunshine")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Files or directories to check
    #[arg(value_name = "PATHS")]
    pub paths: Vec<PathBuf>,

    /// Descend into each listed directory
    #[arg(short, long)]
    pub recursive: bool,

    /// Home directory used by the home directory rule
    #[arg(long, value_name = "DIR", env = "SUNSHINE_HOME")]
    pub home: Option<PathBuf>,

    /// Follow symbolic links instead of checking the links themselves
    #[arg(long)]
    pub follow_links: bool,

    /// Visit directory entries in filesystem order instead of sorted
    #[arg(long)]
    pub unsorted: bool,

    /// Output as JSON for scripting
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            follow_links: self.follow_links,
            sort_entries: !self.unsorted,
        }
    }
}
