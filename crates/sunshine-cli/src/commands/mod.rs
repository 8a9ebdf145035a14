//! Command implementations for sunshine-cli

pub mod scan;

pub use scan::{ScanTarget, run_scan};
