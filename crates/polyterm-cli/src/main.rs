//! `polyterm`: add, multiply and evaluate polynomials stored as term lists.
//!
//! Each input file holds one `<coefficient> <degree>` pair per line, highest
//! degree first. `-` reads standard input.
//!
//! Logging goes to stderr. Set `RUST_LOG` to choose a filter, or pass
//! `--verbose` for debug output.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = commands::run(&cli.command)?;
    print!("{output}");
    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
