//! Bit-packed candidate set: one bit per integer in `[1, length]`.
//!
//! Bit `i` stands for the integer `i + 1`. A set bit means "still believed
//! prime". Bits past `length` in the last word are always zero, so whole-word
//! operations (popcount, trailing-zero iteration) need no end checks.

use std::fmt;

#[derive(Clone, PartialEq, Eq)]
pub struct CandidateBitset {
    words: Vec<u64>,
    len: u64,
}

impl CandidateBitset {
    /// Wraps pre-filled words, zeroing any bits past `len`.
    pub(crate) fn from_words(mut words: Vec<u64>, len: u64) -> Self {
        debug_assert_eq!(words.len() as u64, len.div_ceil(64));
        let tail = len & 63;
        if tail != 0 {
            if let Some(last) = words.last_mut() {
                *last &= (1u64 << tail) - 1;
            }
        }
        Self { words, len }
    }

    /// Number of integers covered.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    /// Is the integer `index + 1` still a candidate?
    #[inline]
    pub fn get(&self, index: u64) -> bool {
        debug_assert!(index < self.len);
        (self.words[(index >> 6) as usize] >> (index & 63)) & 1 == 1
    }

    /// Marks the integer `index + 1` composite. Clearing twice is a no-op.
    #[inline]
    pub fn clear(&mut self, index: u64) {
        debug_assert!(index < self.len);
        self.words[(index >> 6) as usize] &= !(1u64 << (index & 63));
    }

    /// Is the integer `value` still a candidate? `value` is 1-based.
    #[inline]
    pub fn contains_value(&self, value: u64) -> bool {
        value >= 1 && value <= self.len && self.get(value - 1)
    }

    pub fn count_ones(&self) -> u64 {
        self.words.iter().map(|w| w.count_ones() as u64).sum()
    }

    /// Indices of set bits, ascending.
    pub fn iter_ones(&self) -> Ones<'_> {
        Ones {
            words: &self.words,
            word_index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    pub fn as_words(&self) -> &[u64] {
        &self.words
    }

    /// Bytes held by the bit buffer.
    pub fn memory_bytes(&self) -> usize {
        self.words.len() * std::mem::size_of::<u64>()
    }
}

impl fmt::Debug for CandidateBitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateBitset")
            .field("len", &self.len)
            .field("ones", &self.count_ones())
            .finish()
    }
}

/// Brian Kernighan iteration: visits only set bits.
pub struct Ones<'a> {
    words: &'a [u64],
    word_index: usize,
    current: u64,
}

impl Iterator for Ones<'_> {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        loop {
            if self.current != 0 {
                let tz = self.current.trailing_zeros() as u64;
                self.current &= self.current - 1; // clear lowest set bit
                return Some(((self.word_index as u64) << 6) + tz);
            }
            self.word_index += 1;
            self.current = *self.words.get(self.word_index)?;
        }
    }
}
