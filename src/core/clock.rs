//! Monotonic time sources.
//!
//! The game never reads wall-clock time directly. It asks a `Clock` for
//! the time since some fixed origin and keeps a `Stopwatch` over it.
//! Swapping in `ManualClock` makes every time-dependent rule testable.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A monotonic time source.
///
/// `now` must never go backwards. The origin is arbitrary; only the
/// difference between two readings is meaningful.
pub trait Clock: Clone + Send + Sync + 'static {
    /// Time elapsed since this clock's origin.
    fn now(&self) -> Duration;
}

/// `std::time::Instant`-backed clock.
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-driven clock for tests and replays.
///
/// Clones share the same reading, so a test can keep one handle and
/// advance time while the game holds another.
///
/// ```
/// use std::time::Duration;
/// use memory_match::core::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// handle.advance(Duration::from_secs(3));
/// assert_eq!(clock.now(), Duration::from_secs(3));
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    millis: Arc<AtomicU64>,
}

impl ManualClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock forward. Saturates at `u64::MAX` milliseconds.
    pub fn advance(&self, by: Duration) {
        let by = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        let _ = self
            .millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |millis| {
                Some(millis.saturating_add(by))
            });
    }

    /// Advance by whole seconds.
    pub fn advance_secs(&self, secs: u64) {
        self.advance(Duration::from_secs(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_millis(self.millis.load(Ordering::SeqCst))
    }
}

/// Read-only elapsed-time handle.
///
/// Holds an immutable start reading plus a clone of the clock, so a
/// display ticker on another thread can poll it without locking the game.
#[derive(Clone, Debug)]
pub struct Stopwatch<C: Clock> {
    clock: C,
    started: Duration,
}

impl<C: Clock> Stopwatch<C> {
    /// Start measuring from the clock's current reading.
    #[must_use]
    pub fn start(clock: C) -> Self {
        let started = clock.now();
        Self { clock, started }
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.started)
    }

    /// Whole seconds elapsed, rounded down.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed().as_secs()
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
