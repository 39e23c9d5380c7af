//! primer-sieve: write every prime up to a bound to `primes.txt`.
//!
//! Usage: primer-sieve 1_000_000

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use env_logger::Env;

use primer_sieve::cli::Cli;
use primer_sieve::run;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the flag
    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();

    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    log::debug!("{:?}", config);
    let summary = run(&config)?;
    log::debug!("{:?}", summary);
    Ok(())
}
