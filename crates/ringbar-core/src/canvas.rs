//! Canvas trait and a recording implementation.

use crate::draw::{DrawCommand, StrokeStyle};
use crate::{Color, Point};
use serde::{Deserialize, Serialize};

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend. Angles are
/// degrees, clockwise from 12 o'clock.
pub trait Canvas {
    /// Draw a stroked circle.
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: StrokeStyle);

    /// Draw a stroked arc.
    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        stroke: StrokeStyle,
    );

    /// Draw text centered on `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    /// Normal (400)
    #[default]
    Normal,
    /// Bold (700)
    Bold,
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font size in user units
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Font weight
    pub weight: FontWeight,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            weight: FontWeight::Normal,
        }
    }
}

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Used for testing (verify what was painted) and for serializing a frame.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn stroke_circle(&mut self, center: Point, radius: f32, stroke: StrokeStyle) {
        self.commands
            .push(DrawCommand::stroked_circle(center, radius, stroke));
    }

    fn stroke_arc(
        &mut self,
        center: Point,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        stroke: StrokeStyle,
    ) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
            stroke,
        });
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_canvas_new() {
        let canvas = RecordingCanvas::new();
        assert!(canvas.is_empty());
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_recording_canvas_records_in_order() {
        let mut canvas = RecordingCanvas::new();
        let center = Point::new(31.0, 31.0);
        canvas.stroke_circle(center, 27.0, StrokeStyle::new(Color::WHITE, 6.0));
        canvas.stroke_arc(center, 27.0, 0.0, 180.0, StrokeStyle::new(Color::BLACK, 6.0));
        canvas.draw_text("50%", center, &TextStyle::default());

        let commands = canvas.commands();
        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], DrawCommand::Circle { .. }));
        assert_eq!(commands[1].sweep(), 180.0);
        assert!(matches!(&commands[2], DrawCommand::Text { content, .. } if content == "50%"));
    }

    #[test]
    fn test_clear() {
        let mut canvas = RecordingCanvas::new();
        canvas.stroke_circle(Point::ORIGIN, 1.0, StrokeStyle::default());
        assert!(!canvas.is_empty());
        canvas.clear();
        assert!(canvas.is_empty());
    }

    #[test]
    fn test_text_style_default() {
        let style = TextStyle::default();
        assert_eq!(style.size, 16.0);
        assert_eq!(style.weight, FontWeight::Normal);
    }
}
