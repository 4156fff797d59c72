//! Simulated frame-presentation cycle.

use ringbar_core::{AnimationError, FrameCallback, FrameScheduler};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;

/// Queues frame callbacks until the test presents a frame.
///
/// Like `requestAnimationFrame`, a callback scheduled while a frame is
/// running lands in the next frame, not the current one.
///
/// Can be switched into a refusing mode to simulate a host that cannot
/// queue frames.
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<VecDeque<FrameCallback>>,
    frames: Cell<usize>,
    refusing: Cell<bool>,
}

impl ManualScheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next frame.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Whether nothing is waiting.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Make every later `schedule_frame` fail (or succeed again).
    pub fn set_refusing(&self, refusing: bool) {
        self.refusing.set(refusing);
    }

    /// Number of frames presented so far.
    #[must_use]
    pub fn frames_presented(&self) -> usize {
        self.frames.get()
    }

    /// Present one frame: run every callback queued before it started.
    ///
    /// Returns how many callbacks ran.
    pub fn present_frame(&self) -> usize {
        let batch: Vec<FrameCallback> = self.queue.borrow_mut().drain(..).collect();
        self.frames.set(self.frames.get() + 1);
        let count = batch.len();
        for frame in batch {
            frame();
        }
        count
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule_frame(&self, frame: FrameCallback) -> Result<(), AnimationError> {
        if self.refusing.get() {
            return Err(AnimationError::scheduler("manual scheduler is refusing frames"));
        }
        self.queue.borrow_mut().push_back(frame);
        Ok(())
    }
}

impl fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("pending", &self.pending())
            .field("frames", &self.frames.get())
            .field("refusing", &self.refusing.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_present_runs_queued_callbacks() {
        let scheduler = ManualScheduler::new();
        let hits = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let h = Rc::clone(&hits);
            scheduler
                .schedule_frame(Box::new(move || h.set(h.get() + 1)))
                .expect("schedule");
        }
        assert_eq!(scheduler.pending(), 3);
        assert_eq!(scheduler.present_frame(), 3);
        assert_eq!(hits.get(), 3);
        assert!(scheduler.is_idle());
        assert_eq!(scheduler.frames_presented(), 1);
    }

    #[test]
    fn test_rescheduled_callback_waits_for_next_frame() {
        let scheduler = Rc::new(ManualScheduler::new());
        let inner = Rc::clone(&scheduler);
        scheduler
            .schedule_frame(Box::new(move || {
                inner.schedule_frame(Box::new(|| {})).expect("reschedule");
            }))
            .expect("schedule");

        assert_eq!(scheduler.present_frame(), 1);
        assert_eq!(scheduler.pending(), 1);
        assert_eq!(scheduler.present_frame(), 1);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_refusing_drops_frame() {
        let scheduler = ManualScheduler::new();
        scheduler.set_refusing(true);
        let result = scheduler.schedule_frame(Box::new(|| {}));
        assert!(matches!(result, Err(AnimationError::SchedulerUnavailable(_))));
        assert!(scheduler.is_idle());

        scheduler.set_refusing(false);
        scheduler.schedule_frame(Box::new(|| {})).expect("schedule");
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_empty_frame() {
        let scheduler = ManualScheduler::new();
        assert_eq!(scheduler.present_frame(), 0);
        assert_eq!(scheduler.frames_presented(), 1);
    }
}
