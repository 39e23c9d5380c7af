//! Streams the sieved primes to `primes.txt`.
//!
//! Format: one `"<value> \n"` line per prime in ascending order, followed by
//! the attribution line with no trailing newline.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::bitset::CandidateBitset;
use crate::listing::primes;
use crate::progress::{Progress, Thresholds};

pub const DEFAULT_OUTPUT: &str = "primes.txt";
pub const DEFAULT_ATTRIBUTION: &str = "by primer-sieve";

/// Writes every prime and the attribution line, returning the prime count.
pub fn write_primes<W, P>(
    bitset: &CandidateBitset,
    attribution: &str,
    mut out: W,
    progress: &mut P,
) -> io::Result<u64>
where
    W: Write,
    P: Progress + ?Sized,
{
    let total = bitset.len();
    let mut thresholds = Thresholds::new(total);
    let mut count = 0u64;

    for prime in primes(bitset) {
        write!(out, "{} \n", prime)?;
        count += 1;
        if thresholds.crossed(prime) {
            progress.update(prime, total, false);
        }
    }
    out.write_all(attribution.as_bytes())?;
    out.flush()?;
    progress.update(total, total, true);
    Ok(count)
}

/// [`write_primes`] into a freshly created (or truncated) file at `path`.
pub fn write_primes_file<P>(
    path: &Path,
    bitset: &CandidateBitset,
    attribution: &str,
    progress: &mut P,
) -> io::Result<u64>
where
    P: Progress + ?Sized,
{
    let file = File::create(path)?;
    let count = write_primes(bitset, attribution, BufWriter::new(file), progress)?;
    info!("wrote {} primes to {}", count, path.display());
    Ok(count)
}
