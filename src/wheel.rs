//! Candidate set initializer: the mod-6 wheel.
//!
//! Every prime above 3 is `6k + 1` or `6k + 5`, so the initial candidate set
//! keeps exactly the integers with residue 1 or 5 modulo 6. In bit space
//! (bit `i` = integer `i + 1`) that is `i % 6 ∈ {0, 4}`.
//!
//! The residue pattern repeats every 6 bits and a word holds 64, so the word
//! pattern repeats every lcm(6, 64) = 192 bits = 3 words. The tile is built at
//! compile time and the buffer is filled by cycling it.

use log::debug;

use crate::bitset::CandidateBitset;
use crate::bound::Bound;
use crate::progress::{NoProgress, Progress, Thresholds};

const TILE_WORDS: usize = 3;

/// Three words of the residue-{1, 5} pattern, starting at integer 1.
pub const WHEEL_TILE: [u64; TILE_WORDS] = build_tile();

const fn build_tile() -> [u64; TILE_WORDS] {
    let mut tile = [0u64; TILE_WORDS];
    let mut i = 0;
    while i < TILE_WORDS * 64 {
        if i % 6 == 0 || i % 6 == 4 {
            tile[i / 64] |= 1u64 << (i % 64);
        }
        i += 1;
    }
    tile
}

/// Builds the candidate set for `[1, length]`.
pub fn initialize(length: Bound) -> CandidateBitset {
    initialize_with_progress(length, &mut NoProgress)
}

pub fn initialize_with_progress<P>(length: Bound, progress: &mut P) -> CandidateBitset
where
    P: Progress + ?Sized,
{
    let num_words = length.word_count();
    let total = num_words as u64;
    let mut thresholds = Thresholds::new(total);

    let mut words = Vec::with_capacity(num_words);
    for (w, &word) in WHEEL_TILE.iter().cycle().take(num_words).enumerate() {
        words.push(word);
        if thresholds.crossed(w as u64) {
            progress.update(w as u64, total, false);
        }
    }
    progress.update(total, total, true);

    let bitset = CandidateBitset::from_words(words, length.get());
    debug!(
        "initialized {} candidates in {} words ({} bytes)",
        bitset.count_ones(),
        num_words,
        bitset.memory_bytes()
    );
    bitset
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bound(n: u64) -> Bound {
        Bound::new(n).unwrap()
    }

    #[test]
    fn test_tile_matches_residues() {
        for i in 0..192u64 {
            let set = (WHEEL_TILE[(i / 64) as usize] >> (i % 64)) & 1 == 1;
            let value = i + 1;
            assert_eq!(set, value % 6 == 1 || value % 6 == 5, "value={}", value);
        }
    }

    #[test]
    fn test_first_values() {
        let bits = initialize(bound(30));
        let ones: Vec<u64> = bits.iter_ones().map(|i| i + 1).collect();
        assert_eq!(ones, vec![1, 5, 7, 11, 13, 17, 19, 23, 25, 29]);
    }

    #[test]
    fn test_length_is_exact() {
        for n in [1u64, 2, 5, 6, 7, 63, 64, 65, 191, 192, 193, 1_000] {
            let bits = initialize(bound(n));
            assert_eq!(bits.len(), n);
            assert!(bits.iter_ones().all(|i| i < n), "n={}", n);
        }
    }

    #[test]
    fn test_tiny_bounds() {
        let one = initialize(bound(1));
        assert_eq!(one.len(), 1);
        assert!(one.get(0));

        // 2, 3 and 4 are never candidates; 5 is
        let five = initialize(bound(5));
        assert_eq!(five.iter_ones().collect::<Vec<_>>(), vec![0, 4]);
    }

    #[test]
    fn test_every_candidate_has_wheel_residue() {
        let bits = initialize(bound(10_000));
        for i in 0..bits.len() {
            let value = i + 1;
            assert_eq!(bits.get(i), value % 6 == 1 || value % 6 == 5, "value={}", value);
        }
    }

    #[test]
    fn test_reports_progress() {
        let mut updates = Vec::new();
        initialize_with_progress(bound(64 * 500), &mut |c: u64, t: u64, f: bool| {
            updates.push((c, t, f))
        });
        assert_eq!(updates.last(), Some(&(500, 500, true)));
        let interim = updates.iter().filter(|u| !u.2).count();
        assert!(interim >= 90 && interim <= 100, "interim={}", interim);
    }
}
