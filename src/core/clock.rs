use std::cell::Cell;
use std::rc::Rc;

use chrono::Utc;

/// Wall-clock source for point timestamps, in Unix milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Reads the host's wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Manually driven clock for tests and replay tooling.
///
/// Clones share the same instant, so a test can keep one handle while the
/// adapter owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    #[must_use]
    pub fn at(now_millis: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(now_millis)),
        }
    }

    pub fn advance(&self, millis: i64) {
        self.now.set(self.now.get().saturating_add(millis));
    }

    pub fn set(&self, now_millis: i64) {
        self.now.set(now_millis);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, ManualClock, SystemClock};

    #[test]
    fn manual_clock_handles_share_time() {
        let clock = ManualClock::at(1_000);
        let handle = clock.clone();
        handle.advance(250);
        assert_eq!(clock.now_millis(), 1_250);
        clock.set(10);
        assert_eq!(handle.now_millis(), 10);
    }

    #[test]
    fn manual_clock_saturates_instead_of_overflowing() {
        let clock = ManualClock::at(1);
        clock.advance(i64::MAX);
        assert_eq!(clock.now_millis(), i64::MAX);
        clock.set(i64::MIN + 1);
        clock.advance(-10);
        assert_eq!(clock.now_millis(), i64::MIN);
    }

    #[test]
    fn system_clock_is_after_2020() {
        assert!(SystemClock.now_millis() > 1_577_836_800_000);
    }
}
