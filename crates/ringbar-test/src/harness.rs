//! Clock and scheduler bundled for frame-by-frame tests.

use crate::{ManualClock, ManualScheduler};
use ringbar_core::{Animator, Clock};
use std::rc::Rc;

/// A simulated host: one [`ManualClock`] and one [`ManualScheduler`].
#[derive(Debug, Default)]
pub struct FrameHarness {
    clock: Rc<ManualClock>,
    scheduler: Rc<ManualScheduler>,
}

impl FrameHarness {
    /// Create a harness with the clock at 0ms and no pending frames.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a harness with the clock at `start` milliseconds.
    #[must_use]
    pub fn starting_at(start: f64) -> Self {
        Self {
            clock: Rc::new(ManualClock::new(start)),
            scheduler: Rc::new(ManualScheduler::new()),
        }
    }

    /// An animator bound to this harness's clock and scheduler.
    #[must_use]
    pub fn animator(&self) -> Animator {
        Animator::new(self.clock.clone(), self.scheduler.clone())
    }

    /// The simulated clock.
    #[must_use]
    pub fn clock(&self) -> &ManualClock {
        &self.clock
    }

    /// The simulated scheduler.
    #[must_use]
    pub fn scheduler(&self) -> &ManualScheduler {
        &self.scheduler
    }

    /// Current simulated time.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Whether no frame is pending.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.scheduler.is_idle()
    }

    /// Present a frame at the current time.
    pub fn frame(&self) -> usize {
        self.scheduler.present_frame()
    }

    /// Jump the clock to `millis` and present a frame.
    pub fn frame_at(&self, millis: f64) -> usize {
        self.clock.set(millis);
        self.frame()
    }

    /// Advance the clock by `millis` and present a frame.
    pub fn advance(&self, millis: f64) -> usize {
        self.clock.advance(millis);
        self.frame()
    }

    /// Present frames every `interval` milliseconds until nothing is
    /// pending or `max_frames` frames have run.
    ///
    /// The first frame runs at the current time. Returns the number of
    /// frames presented.
    pub fn run_until_idle(&self, interval: f64, max_frames: usize) -> usize {
        let mut presented = 0;
        while !self.is_idle() && presented < max_frames {
            if presented > 0 {
                self.clock.advance(interval);
            }
            self.frame();
            presented += 1;
        }
        presented
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_harness_starting_at() {
        let harness = FrameHarness::starting_at(250.0);
        assert_eq!(harness.now(), 250.0);
        assert!(harness.is_idle());
    }

    #[test]
    fn test_run_until_idle_drives_run() {
        let harness = FrameHarness::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        harness
            .animator()
            .run(100.0, move |f| sink.borrow_mut().push(f), None)
            .expect("run");

        let frames = harness.run_until_idle(25.0, 100);
        assert_eq!(frames, 5);
        assert_eq!(*seen.borrow(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(harness.now(), 100.0);
    }

    #[test]
    fn test_run_until_idle_respects_limit() {
        let harness = FrameHarness::new();
        harness.animator().run(1000.0, |_| {}, None).expect("run");
        assert_eq!(harness.run_until_idle(1.0, 3), 3);
        assert!(!harness.is_idle());
    }

    #[test]
    fn test_advance_presents_frame() {
        let harness = FrameHarness::new();
        harness.animator().run(10.0, |_| {}, None).expect("run");
        assert_eq!(harness.advance(5.0), 1);
        assert_eq!(harness.now(), 5.0);
        assert_eq!(harness.scheduler().frames_presented(), 1);
    }
}
