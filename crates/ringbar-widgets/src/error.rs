//! Error types for ring construction and styling.

use ringbar_core::ColorParseError;
use thiserror::Error;

/// Errors that can occur while styling or mounting a ring.
#[derive(Debug, Error)]
pub enum RingError {
    /// The view could not be attached to its container.
    #[error("failed to mount ring: {0}")]
    Mount(String),

    /// The style file is not valid TOML for a ring style.
    #[error("invalid ring style file: {0}")]
    Style(#[from] toml::de::Error),

    /// A color in the style is not a hex color.
    #[error("invalid ring color: {0}")]
    Color(#[from] ColorParseError),

    /// A style value is out of range.
    #[error("invalid ring style: {0}")]
    InvalidStyle(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_error_display() {
        let err = RingError::Mount("no container".into());
        assert_eq!(err.to_string(), "failed to mount ring: no container");
    }

    #[test]
    fn test_color_error_from() {
        let err: RingError = ColorParseError::InvalidLength.into();
        assert!(matches!(err, RingError::Color(ColorParseError::InvalidLength)));
        assert!(err.to_string().contains("expected 6 or 8"));
    }
}
