//! Tick scheduling.
//!
//! Pure deadline arithmetic over millisecond timestamps: the driver
//! (real terminal loop or a test) supplies "now", the clock decides
//! whether a tick is due. This keeps interval scheduling, speed changes,
//! and pause/resume testable without a real clock.

use serde::{Deserialize, Serialize};

/// Interval scheduler for the tour's tick source.
///
/// At most one deadline is armed at a time. Re-arming while armed is a
/// no-op, so a repeated `start` command cannot install a second timer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickClock {
    /// Tick interval in milliseconds.
    interval_ms: u64,
    /// Next due timestamp; `None` while disarmed.
    deadline_ms: Option<u64>,
}

impl TickClock {
    /// Create a disarmed clock with the given interval.
    ///
    /// # Panics
    ///
    /// Panics if `interval_ms` is zero.
    #[must_use]
    pub fn new(interval_ms: u64) -> Self {
        assert!(interval_ms > 0, "Interval must be positive");
        Self {
            interval_ms,
            deadline_ms: None,
        }
    }

    /// Current interval in milliseconds.
    #[must_use]
    pub const fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Whether a deadline is armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    /// Arm the next deadline at `now + interval`. No-op while armed.
    pub fn arm(&mut self, now_ms: u64) {
        if self.deadline_ms.is_none() {
            self.deadline_ms = Some(now_ms + self.interval_ms);
        }
    }

    /// Drop the pending deadline.
    pub fn disarm(&mut self) {
        self.deadline_ms = None;
    }

    /// Change the interval. While armed, the pending deadline is
    /// cancelled and rescheduled at `now + interval`; partially elapsed
    /// time does not carry over.
    ///
    /// # Panics
    ///
    /// Panics if `interval_ms` is zero.
    pub fn set_interval(&mut self, interval_ms: u64, now_ms: u64) {
        assert!(interval_ms > 0, "Interval must be positive");
        self.interval_ms = interval_ms;
        if self.deadline_ms.is_some() {
            self.deadline_ms = Some(now_ms + interval_ms);
        }
    }

    /// Check whether the deadline has passed. When due, the next
    /// deadline is re-armed at `now + interval` (a tick runs to
    /// completion before its successor is scheduled), so a stalled
    /// driver fires at most one tick per poll rather than a burst.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = Some(now_ms + self.interval_ms);
                true
            }
            _ => false,
        }
    }
}
