//! Core types for the ringbar progress indicator.
//!
//! This crate provides:
//! - The animation driver: [`Animator`], [`AnimationRun`], and the host
//!   capabilities it runs on, [`Clock`] and [`FrameScheduler`]
//! - Error kinds raised when an animation is requested: [`AnimationError`]
//! - Rendering primitives: [`Color`], [`Point`], [`Canvas`], [`DrawCommand`]

mod animation;
mod canvas;
mod color;
pub mod draw;
mod error;
mod geometry;

pub use animation::{
    fraction_at, round_fraction, AnimationDuration, AnimationRun, Animator, Clock,
    CompletionCallback, FrameCallback, FrameOutcome, FrameScheduler,
};
pub use canvas::{Canvas, FontWeight, RecordingCanvas, TextStyle};
pub use color::{Color, ColorParseError};
pub use draw::{DrawCommand, LineCap, StrokeStyle};
pub use error::AnimationError;
pub use geometry::Point;
