//! Draw commands.
//!
//! Everything a ring paints reduces to these primitives.

use crate::canvas::TextStyle;
use crate::{Color, Point};
use serde::{Deserialize, Serialize};

/// Line cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineCap {
    /// Flat cap at endpoint
    #[default]
    Butt,
    /// Rounded cap
    Round,
}

/// Stroke style for outlines and arcs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// Stroke color
    pub color: Color,
    /// Stroke width in user units
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            cap: LineCap::Butt,
        }
    }
}

impl StrokeStyle {
    /// Solid stroke with butt caps.
    #[must_use]
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            cap: LineCap::Butt,
        }
    }

    /// Set the line cap.
    #[must_use]
    pub const fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

/// Draw command for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Stroke a full circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Outline
        stroke: StrokeStyle,
    },

    /// Stroke an arc, angles in degrees clockwise from 12 o'clock
    Arc {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Start angle
        start_angle: f32,
        /// End angle
        end_angle: f32,
        /// Stroke style
        stroke: StrokeStyle,
    },

    /// Draw text
    Text {
        /// Text content
        content: String,
        /// Anchor position
        position: Point,
        /// Text style
        style: TextStyle,
    },
}

impl DrawCommand {
    /// Create an outlined circle command.
    #[must_use]
    pub fn stroked_circle(center: Point, radius: f32, stroke: StrokeStyle) -> Self {
        Self::Circle {
            center,
            radius,
            stroke,
        }
    }

    /// Sweep of an arc command in degrees, 0 for other commands.
    #[must_use]
    pub fn sweep(&self) -> f32 {
        match self {
            Self::Arc {
                start_angle,
                end_angle,
                ..
            } => end_angle - start_angle,
            _ => 0.0,
        }
    }
}
