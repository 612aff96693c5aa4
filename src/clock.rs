//! Clock providers

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Local};

use crate::traits::Clock;

/// The clock every non-test caller wants: `chrono::Local::now()`
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock pinned to a chosen instant, for deterministic tests.
///
/// Clones share the same pinned instant, so a test can keep a handle and
/// move time forward while the engine owns its own copy.
#[derive(Clone, Debug)]
pub struct FixedClock {
    instant: Arc<Mutex<DateTime<Local>>>,
}

impl FixedClock {
    pub fn new(instant: DateTime<Local>) -> Self {
        Self { instant: Arc::new(Mutex::new(instant)) }
    }

    /// Re-pin the clock to another instant
    pub fn set(&self, instant: DateTime<Local>) {
        if let Ok(mut pinned) = self.instant.lock() {
            *pinned = instant;
        }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        match self.instant.lock() {
            Ok(pinned) => *pinned,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn fixed_clock_clones_share_their_instant() {
        let start = Local.with_ymd_and_hms(2020, 11, 9, 9, 0, 0).unwrap();
        let later = Local.with_ymd_and_hms(2020, 11, 9, 15, 30, 0).unwrap();

        let clock = FixedClock::new(start);
        let handle = clock.clone();
        assert_eq!(clock.now(), start);

        handle.set(later);
        assert_eq!(clock.now(), later);
    }
}
