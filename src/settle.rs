//! Cancellable settle timer.
//!
//! Wheel input arrives as a burst of small events. The picker only resolves
//! a value once the burst has gone quiet for a fixed window: every new event
//! replaces the pending deadline, and the event loop polls the timer with
//! the current time.
//!
//! # Example
//!
//! ```rust
//! use std::time::{Duration, Instant};
//! use scroll_picker::settle::SettleTimer;
//!
//! let mut timer = SettleTimer::new(Duration::from_millis(100));
//! let start = Instant::now();
//! timer.schedule(start);
//! assert!(!timer.fire(start + Duration::from_millis(50)));
//! assert!(timer.fire(start + Duration::from_millis(100)));
//! ```

use std::time::{Duration, Instant};

/// A single pending deadline with cancel-and-replace semantics.
#[derive(Debug, Clone)]
pub struct SettleTimer {
    /// Quiet period between the last event and the settle
    delay: Duration,
    /// When the pending settle is due
    deadline: Option<Instant>,
}

impl SettleTimer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arm the timer relative to `now`, replacing any pending deadline.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending deadline, if any.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Consume the deadline if it has passed.
    ///
    /// Returns `true` exactly once per scheduled deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}
