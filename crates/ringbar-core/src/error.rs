//! Error types for animation requests.

use thiserror::Error;

/// Errors raised synchronously when an animation is requested.
///
/// Nothing is reported from inside a scheduled frame. A frame that cannot
/// be re-queued mid-run ends the run instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationError {
    /// An argument was missing, non-numeric, or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The target already has a run in flight.
    #[error("animation already in progress")]
    AnimationInProgress,

    /// The host refused to queue a frame.
    #[error("frame could not be scheduled: {0}")]
    SchedulerUnavailable(String),
}

impl AnimationError {
    /// Shorthand for [`AnimationError::InvalidArgument`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Shorthand for [`AnimationError::SchedulerUnavailable`].
    pub fn scheduler(message: impl Into<String>) -> Self {
        Self::SchedulerUnavailable(message.into())
    }
}
