//! Ring style configuration.
//!
//! A style can be loaded from TOML. Every key is optional; missing keys
//! take the built-in values, unknown keys are rejected.
//!
//! ```toml
//! radius = 27.0
//! stroke_width = 6.0
//! thumb_color = "#005bff"
//! default_duration_ms = 2000.0
//! ```

use crate::error::RingError;
use ringbar_core::{AnimationDuration, Color, Point};
use serde::{Deserialize, Serialize};

/// Resolved ring geometry, colors, and label settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RingStyle {
    /// Side of the square view box in user units
    pub view_box: f32,
    /// Ring center (middle of the view box)
    pub center: Point,
    /// Radius of the track and thumb circles
    pub radius: f32,
    /// Stroke width of the track and thumb
    pub stroke_width: f32,
    /// Track (background ring) color
    pub track_color: Color,
    /// Thumb (progress arc) color
    pub thumb_color: Color,
    /// Label color
    pub text_color: Color,
    /// Label font size
    pub font_size: f32,
    /// Text shown after the number
    pub suffix: String,
    /// Duration used when a caller does not choose one
    pub default_duration: AnimationDuration,
}

/// On-disk form of [`RingStyle`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RingStyleFile {
    /// Side of the square view box
    pub view_box: f32,
    /// Circle radius
    pub radius: f32,
    /// Stroke width
    pub stroke_width: f32,
    /// Track color, hex
    pub track_color: String,
    /// Thumb color, hex
    pub thumb_color: String,
    /// Label color, hex
    pub text_color: String,
    /// Label font size
    pub font_size: f32,
    /// Label suffix
    pub suffix: String,
    /// Default animation duration in milliseconds
    pub default_duration_ms: f64,
}

impl Default for RingStyleFile {
    fn default() -> Self {
        Self {
            view_box: 62.0,
            radius: 27.0,
            stroke_width: 6.0,
            track_color: "#e6e6e6".to_string(),
            thumb_color: "#005bff".to_string(),
            text_color: "#1f1f1f".to_string(),
            font_size: 14.0,
            suffix: "%".to_string(),
            default_duration_ms: 2000.0,
        }
    }
}

impl TryFrom<RingStyleFile> for RingStyle {
    type Error = RingError;

    fn try_from(file: RingStyleFile) -> Result<Self, Self::Error> {
        if !(file.view_box.is_finite() && file.view_box > 0.0) {
            return Err(RingError::InvalidStyle(format!(
                "view_box must be positive, got {}",
                file.view_box
            )));
        }
        if !(file.stroke_width.is_finite() && file.stroke_width > 0.0) {
            return Err(RingError::InvalidStyle(format!(
                "stroke_width must be positive, got {}",
                file.stroke_width
            )));
        }
        let half = file.view_box / 2.0;
        if !(file.radius > 0.0 && file.radius + file.stroke_width / 2.0 <= half) {
            return Err(RingError::InvalidStyle(format!(
                "radius {} with stroke {} does not fit a view box of {}",
                file.radius, file.stroke_width, file.view_box
            )));
        }
        if !(file.font_size.is_finite() && file.font_size > 0.0) {
            return Err(RingError::InvalidStyle(format!(
                "font_size must be positive, got {}",
                file.font_size
            )));
        }
        let default_duration = AnimationDuration::from_millis(file.default_duration_ms)
            .map_err(|e| RingError::InvalidStyle(format!("default_duration_ms: {e}")))?;

        Ok(Self {
            view_box: file.view_box,
            center: Point::new(half, half),
            radius: file.radius,
            stroke_width: file.stroke_width,
            track_color: Color::from_hex(&file.track_color)?,
            thumb_color: Color::from_hex(&file.thumb_color)?,
            text_color: Color::from_hex(&file.text_color)?,
            font_size: file.font_size,
            suffix: file.suffix,
            default_duration,
        })
    }
}

impl Default for RingStyle {
    fn default() -> Self {
        Self::try_from(RingStyleFile::default()).expect("built-in ring style is valid")
    }
}

impl RingStyle {
    /// Parse a style from TOML.
    pub fn from_toml(source: &str) -> Result<Self, RingError> {
        let file: RingStyleFile = toml::from_str(source)?;
        Self::try_from(file)
    }

    /// Arc sweep in degrees for a displayed percent.
    #[must_use]
    pub fn sweep(&self, percent: u8) -> f32 {
        f32::from(percent.min(100)) / 100.0 * 360.0
    }

    /// Label text for a displayed percent, e.g. `42%`.
    #[must_use]
    pub fn label(&self, percent: u8) -> String {
        format!("{percent}{}", self.suffix)
    }

    /// Circumference of the ring circle.
    #[must_use]
    pub fn circumference(&self) -> f32 {
        2.0 * std::f32::consts::PI * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_style() {
        let style = RingStyle::default();
        assert_eq!(style.view_box, 62.0);
        assert_eq!(style.center, Point::new(31.0, 31.0));
        assert_eq!(style.suffix, "%");
        assert_eq!(style.default_duration.as_millis(), 2000.0);
        assert_eq!(style.thumb_color.to_hex(), "#005bff");
    }

    #[test]
    fn test_from_toml_partial() {
        let style = RingStyle::from_toml(
            r##"
            radius = 20.0
            thumb_color = "#ff0000"
            default_duration_ms = 500.0
            "##,
        )
        .expect("valid style");
        assert_eq!(style.radius, 20.0);
        assert_eq!(style.thumb_color, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(style.default_duration.as_millis(), 500.0);
        assert_eq!(style.stroke_width, 6.0);
    }

    #[test]
    fn test_from_toml_empty_is_default() {
        assert_eq!(RingStyle::from_toml("").expect("empty"), RingStyle::default());
    }

    #[test]
    fn test_from_toml_rejects_unknown_key() {
        let err = RingStyle::from_toml("easing = \"cubic\"").expect_err("unknown key");
        assert!(matches!(err, RingError::Style(_)));
    }

    #[test]
    fn test_from_toml_rejects_bad_color() {
        let err = RingStyle::from_toml("track_color = \"#zzzzzz\"").expect_err("bad color");
        assert!(matches!(err, RingError::Color(_)));
    }

    #[test]
    fn test_rejects_ring_outside_view_box() {
        let err = RingStyle::from_toml("radius = 30.0").expect_err("too big");
        assert!(matches!(err, RingError::InvalidStyle(_)));
    }

    #[test]
    fn test_rejects_zero_duration() {
        let err = RingStyle::from_toml("default_duration_ms = 0.0").expect_err("zero");
        assert!(matches!(err, RingError::InvalidStyle(msg) if msg.contains("default_duration_ms")));
    }

    #[test]
    fn test_sweep_and_label() {
        let style = RingStyle::default();
        assert_eq!(style.sweep(0), 0.0);
        assert_eq!(style.sweep(50), 180.0);
        assert_eq!(style.sweep(100), 360.0);
        assert_eq!(style.sweep(200), 360.0);
        assert_eq!(style.label(42), "42%");
    }

    #[test]
    fn test_file_roundtrip_through_toml() {
        let file = RingStyleFile::default();
        let text = toml::to_string(&file).expect("serialize");
        let parsed: RingStyleFile = toml::from_str(&text).expect("parse");
        assert_eq!(parsed, file);
    }
}
