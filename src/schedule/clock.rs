//! Wall-clock sources

use chrono::{Local, NaiveDateTime};
use parking_lot::Mutex;

/// Source of the current local time
pub trait Clock: Send + Sync {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;
}

/// Clock reading the system's local time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock that returns a settable instant
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<NaiveDateTime>,
}

impl FixedClock {
    /// Create a clock frozen at `now`
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    /// Move the clock to `now`
    pub fn set(&self, now: NaiveDateTime) {
        *self.now.lock() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        *self.now.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::local_time;

    #[test]
    fn test_fixed_clock_can_be_moved() {
        let clock = FixedClock::new(local_time(10, 0));
        assert_eq!(clock.now(), local_time(10, 0));

        clock.set(local_time(20, 15));
        assert_eq!(clock.now(), local_time(20, 15));
    }
}
