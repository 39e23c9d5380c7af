//! Progress reporting, decoupled from the algorithms.
//!
//! The sieve phases call a [`Progress`] sink with `(current, total, is_final)`
//! roughly once per percent. Counters live in the calling loop; nothing here
//! is shared or global.

use std::io::{self, Write};

/// Width of the rendered bar, in cells.
pub const BAR_WIDTH: usize = 100;

pub trait Progress {
    fn update(&mut self, current: u64, total: u64, is_final: bool);
}

/// Discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl Progress for NoProgress {
    #[inline]
    fn update(&mut self, _current: u64, _total: u64, _is_final: bool) {}
}

impl<F> Progress for F
where
    F: FnMut(u64, u64, bool),
{
    #[inline]
    fn update(&mut self, current: u64, total: u64, is_final: bool) {
        self(current, total, is_final)
    }
}

/// Renders `[████      ] 40%` and rewrites the line in place with `\r`.
/// The final update ends the line with `\n`.
pub struct ProgressBar<W: Write> {
    out: W,
    width: usize,
}

impl<W: Write> ProgressBar<W> {
    pub fn new(out: W) -> Self {
        Self { out, width: BAR_WIDTH }
    }

    pub fn with_width(out: W, width: usize) -> Self {
        Self { out, width }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, current: u64, total: u64, is_final: bool) -> io::Result<()> {
        let fraction = if total == 0 {
            1.0
        } else {
            (current as f64 / total as f64).clamp(0.0, 1.0)
        };
        let filled = ((fraction * self.width as f64) as usize).min(self.width);
        let ending = if is_final { '\n' } else { '\r' };
        write!(
            self.out,
            "[{}{}] {}%{}",
            "█".repeat(filled),
            " ".repeat(self.width - filled),
            (fraction * 100.0) as u32,
            ending
        )?;
        self.out.flush()
    }
}

impl<W: Write> Progress for ProgressBar<W> {
    fn update(&mut self, current: u64, total: u64, is_final: bool) {
        // Terminal output is best effort; a closed stdout must not abort a sieve.
        if let Err(err) = self.render(current, total, is_final) {
            log::debug!("progress bar write failed: {}", err);
        }
    }
}

/// Tells a loop when it has crossed the next 1% of `total`.
#[derive(Debug, Clone, Copy)]
pub struct Thresholds {
    step: u64,
    next: u64,
}

impl Thresholds {
    pub fn new(total: u64) -> Self {
        let step = (total / 100).max(1);
        Self { step, next: step }
    }

    /// True at most once per step, the first time `current` reaches it.
    #[inline]
    pub fn crossed(&mut self, current: u64) -> bool {
        if current < self.next {
            return false;
        }
        self.next = (current / self.step).saturating_add(1).saturating_mul(self.step);
        true
    }
}
