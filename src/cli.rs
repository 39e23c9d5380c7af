//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

use crate::bound::Bound;
use crate::error::Result;
use crate::output::{DEFAULT_ATTRIBUTION, DEFAULT_OUTPUT};
use crate::run::RunConfig;

/// Find every prime up to BOUND and write them to a text file.
///
/// The listing includes 2 and 3, never 1, and excludes every composite up to
/// and including BOUND.
#[derive(Debug, Parser)]
#[command(name = "primer-sieve", version)]
pub struct Cli {
    /// Upper bound (inclusive); `_` separators are allowed, e.g. 1_000_000
    #[arg(allow_negative_numbers = true)]
    pub bound: String,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Line appended after the last prime
    #[arg(long, default_value = DEFAULT_ATTRIBUTION)]
    pub attribution: String,

    /// Do not draw progress bars
    #[arg(long)]
    pub no_progress: bool,

    /// Cross-check the prime count against an independent sieve
    #[arg(long)]
    pub verify: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Validates the bound and builds the run configuration.
    pub fn into_config(self) -> Result<RunConfig> {
        let bound: Bound = self.bound.parse()?;
        Ok(RunConfig {
            bound,
            output: self.output,
            attribution: self.attribution,
            show_progress: !self.no_progress,
            verify: self.verify,
        })
    }
}
