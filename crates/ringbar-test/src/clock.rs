//! Simulated monotonic clock.

use ringbar_core::Clock;
use std::cell::Cell;

/// A clock that only moves when told to.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    /// Create a clock reading `start` milliseconds.
    #[must_use]
    pub fn new(start: f64) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward by `millis`.
    ///
    /// # Panics
    ///
    /// Panics if `millis` is negative; the clock is monotonic.
    pub fn advance(&self, millis: f64) {
        assert!(millis >= 0.0, "clock cannot move backwards ({millis}ms)");
        self.now.set(self.now.get() + millis);
    }

    /// Jump to an absolute time.
    ///
    /// # Panics
    ///
    /// Panics if `millis` is earlier than the current reading.
    pub fn set(&self, millis: f64) {
        assert!(
            millis >= self.now.get(),
            "clock cannot move backwards ({} -> {millis})",
            self.now.get()
        );
        self.now.set(millis);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_moves_forward() {
        let clock = ManualClock::new(10.0);
        assert_eq!(clock.now(), 10.0);
        clock.advance(5.5);
        assert_eq!(clock.now(), 15.5);
        clock.set(100.0);
        assert_eq!(clock.now(), 100.0);
    }

    #[test]
    #[should_panic(expected = "clock cannot move backwards")]
    fn test_manual_clock_rejects_rewind() {
        let clock = ManualClock::new(10.0);
        clock.set(5.0);
    }
}
