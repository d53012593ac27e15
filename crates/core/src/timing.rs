//! Timing module - clocks and the scroll deadline
//!
//! Time is expressed as a [`Duration`] since an arbitrary origin chosen by the
//! clock. The real game uses [`MonotonicClock`]; tests drive a [`ManualClock`].

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A monotonic time source
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall time from `std::time::Instant`
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
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

/// Hand-driven clock
///
/// Clones share the same time, so a test can hold one handle while the
/// session owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, now: Duration) {
        self.now.set(now);
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }
}

/// Deadline for the next scroll step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollTimer {
    deadline: Duration,
}

impl ScrollTimer {
    /// Start a timer that fires `delay_secs` after `now`.
    pub fn start(now: Duration, delay_secs: f64) -> Self {
        Self {
            deadline: now + Duration::from_secs_f64(delay_secs),
        }
    }

    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// How long to wait for input before the next step is due.
    ///
    /// Zero once the deadline has passed: the caller still polls input, but
    /// without blocking.
    pub fn wait_time(&self, now: Duration) -> Duration {
        self.deadline.saturating_sub(now)
    }

    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.deadline
    }

    /// Re-arm the timer `delay_secs` after `now`.
    pub fn reset(&mut self, now: Duration, delay_secs: f64) {
        self.deadline = now + Duration::from_secs_f64(delay_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_wait_time_counts_down() {
        let t = ScrollTimer::start(ms(0), 0.8);
        assert_eq!(t.deadline(), ms(800));
        assert_eq!(t.wait_time(ms(0)), ms(800));
        assert_eq!(t.wait_time(ms(300)), ms(500));
        assert!(!t.is_due(ms(799)));
    }

    #[test]
    fn test_wait_time_zero_when_overdue() {
        let t = ScrollTimer::start(ms(100), 0.1);
        assert_eq!(t.wait_time(ms(200)), Duration::ZERO);
        assert_eq!(t.wait_time(ms(5000)), Duration::ZERO);
        assert!(t.is_due(ms(200)));
        assert!(t.is_due(ms(5000)));
    }

    #[test]
    fn test_reset_uses_new_delay() {
        let mut t = ScrollTimer::start(ms(0), 0.8);
        t.reset(ms(900), 0.5);
        assert_eq!(t.deadline(), ms(1400));
        assert!(!t.is_due(ms(1000)));
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(ms(250));
        assert_eq!(clock.now(), ms(250));
        clock.set(ms(10));
        assert_eq!(handle.now(), ms(10));
    }

    #[test]
    fn test_monotonic_clock_does_not_go_backwards() {
        let clock = MonotonicClock::new();
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
