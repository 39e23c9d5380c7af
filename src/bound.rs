//! The validated upper bound of a sieve run.

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use crate::error::{Result, SieveError};
use crate::math::words_for;

/// Largest bitset we are willing to allocate, in bytes (`Vec` caps at `isize::MAX`).
const MAX_BITSET_BYTES: u64 = isize::MAX as u64;

/// A strictly positive upper bound whose bitset fits in addressable memory.
///
/// Constructing one is the only validation in the pipeline; `initialize` and
/// `sieve` accept any `Bound` without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Bound(NonZeroU64);

impl Bound {
    pub fn new(value: u64) -> Result<Self> {
        let nonzero = NonZeroU64::new(value).ok_or_else(|| SieveError::InvalidBound {
            value: value.to_string(),
            reason: "the bound must be at least 1",
        })?;
        let words = words_for(value);
        if usize::try_from(words).is_err() || words.saturating_mul(8) > MAX_BITSET_BYTES {
            return Err(SieveError::InvalidBound {
                value: value.to_string(),
                reason: "the bitset would not fit in memory",
            });
        }
        Ok(Self(nonzero))
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Words backing a bitset of this length. Fits `usize` by construction.
    #[inline]
    pub(crate) fn word_count(self) -> usize {
        words_for(self.get()) as usize
    }
}

impl FromStr for Bound {
    type Err = SieveError;

    /// Accepts surrounding whitespace and `_` digit separators (`1_000_000`).
    fn from_str(s: &str) -> Result<Self> {
        let cleaned: String = s.trim().chars().filter(|&c| c != '_').collect();
        let value: i128 = cleaned
            .parse()
            .map_err(|_| SieveError::InvalidNumber(s.to_string()))?;
        if value <= 0 {
            return Err(SieveError::InvalidBound {
                value: s.trim().to_string(),
                reason: "the bound must be at least 1",
            });
        }
        let value = u64::try_from(value).map_err(|_| SieveError::InvalidBound {
            value: s.trim().to_string(),
            reason: "the bound exceeds the native integer range",
        })?;
        Self::new(value)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
