//! Wall-clock timing of a run.

use std::fmt;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed(&self) -> Elapsed {
        Elapsed(self.start.elapsed())
    }
}

/// A duration shown as whole hours, whole minutes and seconds to 6 decimals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Elapsed(pub Duration);

impl Elapsed {
    pub fn hours(&self) -> u64 {
        self.0.as_secs() / 3600
    }

    pub fn minutes(&self) -> u64 {
        (self.0.as_secs() % 3600) / 60
    }

    /// Seconds within the minute, rounded to the microsecond.
    pub fn seconds(&self) -> f64 {
        let within_minute = (self.0.as_secs() % 60) as f64 + self.0.subsec_nanos() as f64 / 1e9;
        (within_minute * 1e6).round() / 1e6
    }
}

impl From<Duration> for Elapsed {
    fn from(d: Duration) -> Self {
        Self(d)
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "finished in {} hours, {} minutes and {} seconds",
            self.hours(),
            self.minutes(),
            self.seconds()
        )
    }
}
