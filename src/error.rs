//! Error types for the sieve pipeline.
//!
//! The sieving core itself never fails; everything here originates at the
//! boundary (argument parsing, file output, verification).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SieveError {
    /// The bound argument is not an integer at all.
    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    /// The bound parsed, but cannot be sieved.
    #[error("invalid bound '{value}': {reason}")]
    InvalidBound { value: String, reason: &'static str },

    /// Writing `primes.txt` (or the terminal) failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The independent sieve disagreed with ours.
    #[error("verification failed for bound {bound}: expected {expected} primes, found {found}")]
    VerificationFailed { bound: u64, expected: u64, found: u64 },
}

pub type Result<T> = std::result::Result<T, SieveError>;
