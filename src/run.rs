//! The whole pipeline: initialize, sieve, write, report.

use std::io::{self, Write};
use std::path::PathBuf;

use log::info;

use crate::bound::Bound;
use crate::error::Result;
use crate::output::{write_primes_file, DEFAULT_ATTRIBUTION, DEFAULT_OUTPUT};
use crate::progress::{NoProgress, Progress, ProgressBar};
use crate::sieve::sieve_with_progress;
use crate::timing::{Elapsed, Stopwatch};
use crate::verify::cross_check;
use crate::wheel::initialize_with_progress;

/// Everything a run needs, independent of how it was parsed.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub bound: Bound,
    pub output: PathBuf,
    pub attribution: String,
    pub show_progress: bool,
    pub verify: bool,
}

impl RunConfig {
    pub fn new(bound: Bound) -> Self {
        Self {
            bound,
            output: PathBuf::from(DEFAULT_OUTPUT),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            show_progress: true,
            verify: false,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub bound: Bound,
    pub prime_count: u64,
    pub elapsed: Elapsed,
}

/// Runs with status lines and progress bars on stdout.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_output(config, &mut out)
}

/// Runs with status lines and progress bars written to `out`.
pub fn run_with_output(config: &RunConfig, out: &mut dyn Write) -> Result<RunSummary> {
    let stopwatch = Stopwatch::start();
    let length = config.bound;

    writeln!(out, "creating array...")?;
    let bitset = with_progress(out, config.show_progress, |p| initialize_with_progress(length, p));

    writeln!(out, "done. \nsieving array...")?;
    let bitset = with_progress(out, config.show_progress, |p| sieve_with_progress(bitset, length, p));

    writeln!(out, "done. \nwriting file...")?;
    let prime_count = with_progress(out, config.show_progress, |p| {
        write_primes_file(&config.output, &bitset, &config.attribution, p)
    })?;

    if config.verify {
        cross_check(&bitset, length)?;
        info!("verified {} primes up to {} against primal", prime_count, length);
    }
    drop(bitset);

    let elapsed = stopwatch.elapsed();
    writeln!(out, "{}", elapsed)?;
    writeln!(out, "{} primes found between 0 and {}", prime_count, length)?;

    Ok(RunSummary { bound: length, prime_count, elapsed })
}

fn with_progress<T>(out: &mut dyn Write, enabled: bool, phase: impl FnOnce(&mut dyn Progress) -> T) -> T {
    if enabled {
        let mut bar = ProgressBar::new(out);
        phase(&mut bar)
    } else {
        phase(&mut NoProgress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("primer-sieve-run-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_run_quiet() {
        let dir = scratch_dir("quiet");
        let mut config = RunConfig::new(Bound::new(30).unwrap());
        config.output = dir.join("primes.txt");
        config.show_progress = false;
        config.verify = true;

        let mut out = Vec::new();
        let summary = run_with_output(&config, &mut out).unwrap();
        assert_eq!(summary.prime_count, 10);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("creating array...\ndone. \nsieving array...\ndone. \nwriting file...\n"));
        assert!(text.contains("finished in 0 hours, 0 minutes and "));
        assert!(text.ends_with("10 primes found between 0 and 30\n"));
        assert!(!text.contains('█'));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_with_bars() {
        let dir = scratch_dir("bars");
        let mut config = RunConfig::new(Bound::new(10_000).unwrap());
        config.output = dir.join("primes.txt");

        let mut out = Vec::new();
        run_with_output(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        // one finished bar per phase
        assert_eq!(text.matches("] 100%\n").count(), 3);
        assert!(text.contains('\r'));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_run_reports_io_error() {
        let dir = scratch_dir("io");
        let mut config = RunConfig::new(Bound::new(10).unwrap());
        config.output = dir.join("missing").join("primes.txt");
        config.show_progress = false;

        let err = run_with_output(&config, &mut io::sink()).unwrap_err();
        assert!(matches!(err, crate::error::SieveError::Io(_)));

        fs::remove_dir_all(&dir).unwrap();
    }
}
