//! Circular progress widget.

use crate::error::RingError;
use crate::view::RingView;
use log::{debug, warn};
use ringbar_core::{AnimationDuration, AnimationError, Animator, CompletionCallback};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Observable state of a ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RingState {
    percent: u8,
    animating: bool,
    hidden: bool,
}

impl RingState {
    /// Displayed percent (0..=100).
    #[must_use]
    pub const fn percent(&self) -> u8 {
        self.percent
    }

    /// Whether a run is scheduled and has not completed.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.animating
    }

    /// Whether the hidden state is applied.
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Arguments to [`ProgressRing::animate`].
pub struct AnimateOptions {
    percent: f64,
    duration_ms: f64,
    on_end: Option<CompletionCallback>,
}

impl AnimateOptions {
    /// Animate toward `percent` (0..=100) over `duration_ms` milliseconds.
    #[must_use]
    pub fn new(percent: f64, duration_ms: f64) -> Self {
        Self {
            percent,
            duration_ms,
            on_end: None,
        }
    }

    /// Callback invoked once the run completes.
    #[must_use]
    pub fn on_end(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_end = Some(Box::new(callback));
        self
    }

    /// Target percent.
    #[must_use]
    pub const fn percent(&self) -> f64 {
        self.percent
    }

    /// Requested duration in milliseconds.
    #[must_use]
    pub const fn duration_ms(&self) -> f64 {
        self.duration_ms
    }
}

impl fmt::Debug for AnimateOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimateOptions")
            .field("percent", &self.percent)
            .field("duration_ms", &self.duration_ms)
            .field("on_end", &self.on_end.is_some())
            .finish()
    }
}

/// Percent shown for a target at a given fraction of the run.
///
/// Runs always start from 0, not from the previously displayed value.
#[must_use]
pub fn display_percent(target: f64, fraction: f64) -> u8 {
    (target * fraction).round().clamp(0.0, 100.0) as u8
}

fn validate_percent(percent: f64) -> Result<f64, AnimationError> {
    if percent.is_finite() && (0.0..=100.0).contains(&percent) {
        Ok(percent)
    } else {
        Err(AnimationError::invalid(format!(
            "percent must be between 0 and 100, got {percent}"
        )))
    }
}

/// A circular progress indicator.
///
/// Owns its state; the only mutators are its own methods and the
/// per-frame callback of the run it started. At most one run is active at
/// a time.
pub struct ProgressRing<V: RingView> {
    state: Rc<RefCell<RingState>>,
    view: Rc<V>,
    animator: Animator,
}

impl<V: RingView + 'static> ProgressRing<V> {
    /// Create a ring showing 0, visible, not animating.
    pub fn new(animator: Animator, view: V) -> Self {
        Self {
            state: Rc::new(RefCell::new(RingState::default())),
            view: Rc::new(view),
            animator,
        }
    }

    /// Mount the ring's view into `container`, replacing what was there.
    pub fn create(&self, container: &V::Container) -> Result<(), RingError> {
        self.view.mount(container)
    }

    /// Animate from 0 toward `options.percent`.
    ///
    /// Fails with [`AnimationError::AnimationInProgress`] while a run is
    /// active, and with [`AnimationError::InvalidArgument`] for a duration
    /// that is not positive or a percent outside 0..=100. Fails with
    /// [`AnimationError::SchedulerUnavailable`] when the host cannot queue
    /// the first frame. A failed call changes nothing and schedules nothing.
    /// Returns as soon as the first frame is queued.
    pub fn animate(&self, options: AnimateOptions) -> Result<(), AnimationError> {
        if self.state.borrow().animating {
            debug!("ring animate rejected: run in progress");
            return Err(AnimationError::AnimationInProgress);
        }
        let duration = AnimationDuration::from_millis(options.duration_ms)?;
        let target = validate_percent(options.percent)?;

        self.state.borrow_mut().animating = true;

        let state = Rc::clone(&self.state);
        let view = Rc::clone(&self.view);
        let on_progress = move |fraction: f64| {
            let shown = display_percent(target, fraction);
            state.borrow_mut().percent = shown;
            view.show_percent(shown);
        };

        let state = Rc::clone(&self.state);
        let on_end = options.on_end;
        let on_complete: CompletionCallback = Box::new(move || {
            state.borrow_mut().animating = false;
            debug!("ring animation to {target}% complete");
            if let Some(on_end) = on_end {
                on_end();
            }
        });

        if let Err(e) = self.animator.start(duration, on_progress, Some(on_complete)) {
            self.state.borrow_mut().animating = false;
            warn!("ring animation to {target}% not started: {e}");
            return Err(e);
        }
        debug!("ring animating to {target}% over {duration}");
        Ok(())
    }

    /// Apply the hidden state. Calling it again changes nothing.
    pub fn hide(&self) {
        self.state.borrow_mut().hidden = true;
        self.view.set_hidden(true);
    }

    /// Remove the hidden state. Calling it again changes nothing.
    pub fn unhide(&self) {
        self.state.borrow_mut().hidden = false;
        self.view.set_hidden(false);
    }

    /// Whether a run is in flight.
    #[must_use]
    pub fn status_animate(&self) -> bool {
        self.state.borrow().animating
    }

    /// Whether the ring is hidden.
    #[must_use]
    pub fn status_hidden(&self) -> bool {
        self.state.borrow().hidden
    }

    /// Displayed percent.
    #[must_use]
    pub fn percent(&self) -> u8 {
        self.state.borrow().percent
    }

    /// Snapshot of the whole state.
    #[must_use]
    pub fn state(&self) -> RingState {
        *self.state.borrow()
    }

    /// The view this ring renders through.
    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }
}

impl<V: RingView> fmt::Debug for ProgressRing<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressRing")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}
