//! Fixed-interval tick deadline for the event loop.

use std::time::{Duration, Instant};

/// When the next scroll tick is due.
///
/// The loop checks [`TickSchedule::take_due`] after every wake-up, whether it
/// woke for an event or for the timeout, so a steady stream of input cannot
/// hold ticks back.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TickSchedule {
    next: Instant,
    interval: Duration,
}

impl TickSchedule {
    /// First tick one interval after `now`.
    pub(crate) fn new(now: Instant, interval: Duration) -> Self {
        Self {
            next: now + interval,
            interval,
        }
    }

    /// Start counting a fresh interval from `now`.
    pub(crate) fn restart(&mut self, now: Instant) {
        self.next = now + self.interval;
    }

    /// Time left until the next tick, zero when overdue.
    pub(crate) fn timeout(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Whether a tick is due at `now`. Advances the deadline when it is.
    pub(crate) fn take_due(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next += self.interval;
        if self.next < now {
            // Fell behind (suspended, slow terminal); don't burst.
            self.next = now + self.interval;
        }
        true
    }
}
