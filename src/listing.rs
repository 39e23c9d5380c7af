//! Turns the raw sieve bits into the list of primes.
//!
//! The wheel leaves value 1 marked and values 2 and 3 unmarked. The bitset
//! keeps that raw state; the listing drops 1 and puts 2 and 3 in front.

use std::array;
use std::iter::Take;

use crate::bitset::{CandidateBitset, Ones};

/// Primes up to `bitset.len()`, ascending.
pub fn primes(bitset: &CandidateBitset) -> Primes<'_> {
    Primes {
        leading: [2u64, 3].into_iter().take(leading_count(bitset) as usize),
        ones: bitset.iter_ones(),
    }
}

/// Same as `primes(bitset).count()`, without walking the bits.
pub fn count_primes(bitset: &CandidateBitset) -> u64 {
    let one = u64::from(bitset.contains_value(1));
    bitset.count_ones() - one + leading_count(bitset)
}

/// How many of 2 and 3 fall inside the bitset.
fn leading_count(bitset: &CandidateBitset) -> u64 {
    bitset.len().min(3).saturating_sub(1)
}

pub struct Primes<'a> {
    leading: Take<array::IntoIter<u64, 2>>,
    ones: Ones<'a>,
}

impl Iterator for Primes<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if let Some(p) = self.leading.next() {
            return Some(p);
        }
        loop {
            let value = self.ones.next()? + 1;
            if value != 1 {
                return Some(value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bound::Bound;
    use crate::sieve::sieve;
    use crate::wheel::initialize;

    fn sieved(n: u64) -> CandidateBitset {
        let length = Bound::new(n).unwrap();
        sieve(initialize(length), length)
    }

    #[test]
    fn test_small_primes() {
        assert_eq!(primes(&sieved(10)).collect::<Vec<_>>(), vec![2, 3, 5, 7]);
        assert_eq!(
            primes(&sieved(30)).collect::<Vec<_>>(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
    }

    #[test]
    fn test_one_is_never_listed() {
        let bits = sieved(30);
        assert!(bits.get(0)); // the raw wheel bit stays set
        assert!(primes(&bits).all(|p| p != 1));
    }

    #[test]
    fn test_edge_bounds() {
        let cases: [(u64, &[u64]); 5] = [
            (1, &[]),
            (2, &[2]),
            (3, &[2, 3]),
            (4, &[2, 3]),
            (5, &[2, 3, 5]),
        ];
        for (n, expected) in cases {
            let bits = sieved(n);
            assert_eq!(primes(&bits).collect::<Vec<_>>(), expected, "n={}", n);
            assert_eq!(count_primes(&bits), expected.len() as u64, "n={}", n);
        }
    }

    #[test]
    fn test_count_matches_iteration() {
        for n in [100u64, 1_000, 12_345] {
            let bits = sieved(n);
            assert_eq!(count_primes(&bits), primes(&bits).count() as u64);
        }
        assert_eq!(count_primes(&sieved(100)), 25);
    }

    #[test]
    fn test_matches_primal() {
        let n = 100_000;
        let ours: Vec<u64> = primes(&sieved(n)).collect();
        let theirs: Vec<u64> = primal::Primes::all()
            .take_while(|&p| p <= n as usize)
            .map(|p| p as u64)
            .collect();
        assert_eq!(ours, theirs);
    }
}
