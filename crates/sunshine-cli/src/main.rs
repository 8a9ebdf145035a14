//! sunshine CLI
//!
//! Reports SSH material and home directories whose permission bits do not
//! match policy.

mod cli;
mod commands;
mod context;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use cli::Cli;
use commands::ScanTarget;
use error::Result;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let home = context::resolve_home(cli.home.clone())?;
    let options = cli.scan_options();
    let target = ScanTarget::from_args(cli.paths, cli.recursive);

    commands::run_scan(&target, &home, options, cli.json)
}

/// Log to stderr: everything at debug with `--verbose`, otherwise only
/// what `RUST_LOG` asks for.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => return,
        }
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        tracing::debug!("Logging enabled");
    }
}
