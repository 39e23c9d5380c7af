//! Elimination engine.
//!
//! Walks odd factors (`mesh`) from 5 up to `round(sqrt(length))`. For each
//! factor still marked as a candidate it clears `mesh², mesh² + 2·mesh, …`
//! through `length`:
//!
//! - Starting at `mesh²` is enough: any smaller multiple has a smaller prime
//!   factor and was cleared by an earlier mesh (or by the wheel).
//! - Stepping by `2·mesh` skips the even multiples, which the wheel already
//!   removed.
//!
//! Values 1, 2 and 3 are left exactly as the wheel set them; see
//! [`listing`](crate::listing) for how they are reported.

use log::debug;

use crate::bitset::CandidateBitset;
use crate::bound::Bound;
use crate::math::rounded_sqrt;
use crate::progress::{NoProgress, Progress, Thresholds};

/// First factor the wheel has not already handled.
pub const FIRST_MESH: u64 = 5;

/// Clears every composite `>= 5` from a freshly initialized bitset.
pub fn sieve(bitset: CandidateBitset, length: Bound) -> CandidateBitset {
    sieve_with_progress(bitset, length, &mut NoProgress)
}

pub fn sieve_with_progress<P>(mut bitset: CandidateBitset, length: Bound, progress: &mut P) -> CandidateBitset
where
    P: Progress + ?Sized,
{
    let length = length.get();
    debug_assert_eq!(bitset.len(), length);

    // Computed once; never re-derived inside the loop.
    let search_end = rounded_sqrt(length);
    let mut thresholds = Thresholds::new(search_end);
    let mut factors = 0u64;
    let mut struck = 0u64;

    let mut mesh = FIRST_MESH;
    while mesh <= search_end {
        struck += strike(&mut bitset, mesh, length);
        factors += 1;

        // Advance to the next surviving odd candidate.
        loop {
            mesh += 2;
            if mesh > search_end || bitset.get(mesh - 1) {
                break;
            }
        }

        if thresholds.crossed(mesh) {
            progress.update(mesh.min(search_end), search_end, false);
        }
    }
    progress.update(search_end, search_end, true);

    debug!(
        "sieved to {} with {} factors up to {}, {} strikes",
        length, factors, search_end, struck
    );
    bitset
}

/// Strike phase for one factor. Returns how many clears were issued.
#[inline]
fn strike(bitset: &mut CandidateBitset, mesh: u64, length: u64) -> u64 {
    let step = 2 * mesh;
    let mut value = mesh * mesh;
    let mut count = 0;
    while value <= length {
        bitset.clear(value - 1);
        count += 1;
        value = match value.checked_add(step) {
            Some(next) => next,
            None => break,
        };
    }
    count
}
