//! Time-driven animation runs.
//!
//! An [`Animator`] converts time read from a [`Clock`] into a progress
//! fraction in `[0, 1]` and keeps re-queueing itself on a
//! [`FrameScheduler`] until that fraction reaches 1. Both host capabilities
//! are injected, so a run can be driven by `requestAnimationFrame` in a
//! browser or by a simulated clock in tests.

use crate::error::AnimationError;
use log::{debug, error, trace};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

// =============================================================================
// Host capabilities
// =============================================================================

/// Monotonic time source, in milliseconds.
pub trait Clock {
    /// Current time in milliseconds. Must never decrease.
    fn now(&self) -> f64;
}

/// A callback to run on the next presented frame.
pub type FrameCallback = Box<dyn FnOnce()>;

/// Invoked once when a run finishes.
pub type CompletionCallback = Box<dyn FnOnce()>;

/// Host primitive that runs a callback once per display refresh.
///
/// Callbacks execute one at a time on the calling thread. An implementation
/// must never run two frame callbacks concurrently.
pub trait FrameScheduler {
    /// Queue `frame` for the next display refresh.
    ///
    /// On error the frame is dropped and will never run.
    fn schedule_frame(&self, frame: FrameCallback) -> Result<(), AnimationError>;
}

// =============================================================================
// AnimationDuration
// =============================================================================

/// A validated run length: positive and finite, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AnimationDuration(f64);

impl AnimationDuration {
    /// Validate a duration given in milliseconds.
    pub fn from_millis(millis: f64) -> Result<Self, AnimationError> {
        if millis.is_finite() && millis > 0.0 {
            Ok(Self(millis))
        } else {
            Err(AnimationError::invalid(format!(
                "duration must be a positive number of milliseconds, got {millis}"
            )))
        }
    }

    /// Length in milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> f64 {
        self.0
    }
}

impl FromStr for AnimationDuration {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let millis: f64 = s
            .trim()
            .parse()
            .map_err(|_| AnimationError::invalid(format!("duration {s:?} is not a number")))?;
        Self::from_millis(millis)
    }
}

impl fmt::Display for AnimationDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}

// =============================================================================
// Fraction math
// =============================================================================

const FRACTION_SCALE: f64 = 10_000.0;

/// Round a fraction to 4 decimal places.
///
/// Keeps float jitter from flipping the completion check between frames.
#[must_use]
pub fn round_fraction(value: f64) -> f64 {
    (value * FRACTION_SCALE).round() / FRACTION_SCALE
}

/// Progress fraction after `elapsed` milliseconds of a run lasting `duration`.
///
/// Not clamped: values above 1 mean the run is overdue.
#[must_use]
pub fn fraction_at(elapsed: f64, duration: AnimationDuration) -> f64 {
    round_fraction(elapsed.max(0.0) / duration.as_millis())
}

// =============================================================================
// AnimationRun
// =============================================================================

/// Outcome of advancing a run by one frame.
pub enum FrameOutcome {
    /// Another frame is needed.
    Continue,
    /// The run delivered 1. Carries the completion callback the first time.
    Finished(Option<CompletionCallback>),
}

impl FrameOutcome {
    /// Whether the run is done.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Self::Finished(_))
    }
}

impl fmt::Debug for FrameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Continue => f.write_str("Continue"),
            Self::Finished(cb) => f
                .debug_tuple("Finished")
                .field(&cb.as_ref().map(|_| "on_complete"))
                .finish(),
        }
    }
}

/// One in-flight animation.
///
/// The first frame always reports exactly 0, whatever time passed between
/// scheduling and the first paint.
pub struct AnimationRun {
    start_time: f64,
    duration: AnimationDuration,
    first_frame: bool,
    finished: bool,
    on_progress: Box<dyn FnMut(f64)>,
    on_complete: Option<CompletionCallback>,
}

impl AnimationRun {
    /// Create a run that started at `start_time` (clock milliseconds).
    pub fn new<P>(
        start_time: f64,
        duration: AnimationDuration,
        on_progress: P,
        on_complete: Option<CompletionCallback>,
    ) -> Self
    where
        P: FnMut(f64) + 'static,
    {
        Self {
            start_time,
            duration,
            first_frame: true,
            finished: false,
            on_progress: Box::new(on_progress),
            on_complete,
        }
    }

    /// Clock time the run started at.
    #[must_use]
    pub const fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Length of the run.
    #[must_use]
    pub const fn duration(&self) -> AnimationDuration {
        self.duration
    }

    /// True until the first frame has executed.
    #[must_use]
    pub const fn is_first_frame(&self) -> bool {
        self.first_frame
    }

    /// Whether the run has already delivered 1.
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Execute one frame at clock time `now`.
    ///
    /// A fraction of 1 or more completes the run: `on_progress(1.0)` is
    /// delivered and the completion callback is handed back to the caller
    /// so it can be invoked outside any borrow of the run. Advancing a
    /// finished run is a no-op.
    pub fn advance(&mut self, now: f64) -> FrameOutcome {
        if self.finished {
            return FrameOutcome::Finished(None);
        }

        let fraction = if self.first_frame {
            self.first_frame = false;
            0.0
        } else {
            fraction_at(now - self.start_time, self.duration)
        };
        trace!("animation frame at {now}: fraction {fraction}");

        if fraction >= 1.0 {
            self.finished = true;
            (self.on_progress)(1.0);
            FrameOutcome::Finished(self.on_complete.take())
        } else {
            (self.on_progress)(fraction);
            FrameOutcome::Continue
        }
    }

    /// Jump to the end: deliver `on_progress(1.0)` and hand back the
    /// completion callback. Used when no further frame can be queued.
    ///
    /// Returns `None` for a run that already finished.
    pub fn finish(&mut self) -> Option<CompletionCallback> {
        if self.finished {
            return None;
        }
        self.finished = true;
        self.first_frame = false;
        (self.on_progress)(1.0);
        self.on_complete.take()
    }
}

impl fmt::Debug for AnimationRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationRun")
            .field("start_time", &self.start_time)
            .field("duration", &self.duration)
            .field("first_frame", &self.first_frame)
            .field("finished", &self.finished)
            .field("has_on_complete", &self.on_complete.is_some())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Animator
// =============================================================================

/// Starts runs against an injected clock and frame scheduler.
///
/// There is no cancellation: once started, a run proceeds until it delivers
/// 1 and fires its completion callback.
#[derive(Clone)]
pub struct Animator {
    clock: Rc<dyn Clock>,
    scheduler: Rc<dyn FrameScheduler>,
}

impl Animator {
    /// Create an animator over the given host capabilities.
    pub fn new(clock: Rc<dyn Clock>, scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self { clock, scheduler }
    }

    /// Current clock time in milliseconds.
    #[must_use]
    pub fn now(&self) -> f64 {
        self.clock.now()
    }

    /// Validate `duration_ms` and start a run.
    ///
    /// Returns [`AnimationError::InvalidArgument`] without scheduling
    /// anything if the duration is not a positive finite number, and
    /// [`AnimationError::SchedulerUnavailable`] if the first frame could not
    /// be queued.
    pub fn run<P>(
        &self,
        duration_ms: f64,
        on_progress: P,
        on_complete: Option<CompletionCallback>,
    ) -> Result<(), AnimationError>
    where
        P: FnMut(f64) + 'static,
    {
        let duration = AnimationDuration::from_millis(duration_ms)?;
        self.start(duration, on_progress, on_complete)
    }

    /// Start a run with an already validated duration.
    ///
    /// Captures the start time and queues the first frame; returns
    /// immediately. If the first frame cannot be queued the run is dropped
    /// and none of its callbacks ever fire.
    pub fn start<P>(
        &self,
        duration: AnimationDuration,
        on_progress: P,
        on_complete: Option<CompletionCallback>,
    ) -> Result<(), AnimationError>
    where
        P: FnMut(f64) + 'static,
    {
        let run = AnimationRun::new(self.clock.now(), duration, on_progress, on_complete);
        let start_time = run.start_time();
        schedule_next(
            Rc::new(RefCell::new(run)),
            Rc::clone(&self.clock),
            Rc::clone(&self.scheduler),
        )?;
        debug!("animation run started: {duration} from t={start_time}");
        Ok(())
    }
}

impl fmt::Debug for Animator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator").finish_non_exhaustive()
    }
}

fn schedule_next(
    run: Rc<RefCell<AnimationRun>>,
    clock: Rc<dyn Clock>,
    scheduler: Rc<dyn FrameScheduler>,
) -> Result<(), AnimationError> {
    let next = Rc::clone(&scheduler);
    scheduler.schedule_frame(Box::new(move || {
        let outcome = run.borrow_mut().advance(clock.now());
        let on_complete = match outcome {
            FrameOutcome::Continue => {
                let Err(e) = schedule_next(Rc::clone(&run), Rc::clone(&clock), next) else {
                    return;
                };
                error!("animation run cut short: {e}");
                run.borrow_mut().finish()
            }
            FrameOutcome::Finished(on_complete) => {
                debug!("animation run finished at t={}", clock.now());
                on_complete
            }
        };
        if let Some(on_complete) = on_complete {
            on_complete();
        }
    }))
}
