//! Cross-check against an independent sieve (`primal`).

use log::debug;

use crate::bitset::CandidateBitset;
use crate::bound::Bound;
use crate::error::{Result, SieveError};
use crate::listing::count_primes;

/// π(length), from `primal`.
pub fn expected_count(length: Bound) -> Result<u64> {
    let n = usize::try_from(length.get()).map_err(|_| SieveError::InvalidBound {
        value: length.to_string(),
        reason: "the bound is too large to verify on this platform",
    })?;
    Ok(primal::StreamingSieve::prime_pi(n) as u64)
}

/// Compares our count with `primal`'s and returns it when they agree.
pub fn cross_check(bitset: &CandidateBitset, length: Bound) -> Result<u64> {
    let found = count_primes(bitset);
    let expected = expected_count(length)?;
    debug!("verify {}: expected {}, found {}", length, expected, found);
    if found != expected {
        return Err(SieveError::VerificationFailed { bound: length.get(), expected, found });
    }
    Ok(found)
}
