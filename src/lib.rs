//! Wheel-6 bit-packed Sieve of Eratosthenes.
//!
//! The core is two steps over one owned bit buffer:
//!
//! 1. [`initialize`] builds a bit-per-integer candidate set over `[1, length]`
//!    that already excludes every multiple of 2 and 3.
//! 2. [`sieve`] clears the remaining composites using odd strides from each
//!    factor's square, up to `round(sqrt(length))`.
//!
//! ```
//! use primer_sieve::{initialize, listing, sieve, Bound};
//!
//! let length = Bound::new(30).unwrap();
//! let bits = sieve(initialize(length), length);
//! let primes: Vec<u64> = listing::primes(&bits).collect();
//! assert_eq!(primes, [2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
//! ```
//!
//! Everything else (output file, progress bars, timing, CLI) lives in the
//! outer modules and only consumes the finished bitset.

pub mod bitset;
pub mod bound;
pub mod cli;
pub mod error;
pub mod listing;
pub mod math;
pub mod output;
pub mod progress;
pub mod run;
pub mod sieve;
pub mod timing;
pub mod verify;
pub mod wheel;

pub use bitset::CandidateBitset;
pub use bound::Bound;
pub use error::{Result, SieveError};
pub use progress::{NoProgress, Progress, ProgressBar};
pub use run::{run, run_with_output, RunConfig, RunSummary};
pub use sieve::{sieve, sieve_with_progress};
pub use wheel::{initialize, initialize_with_progress};
