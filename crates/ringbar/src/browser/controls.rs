//! Button state and input parsing for the demo page.
//!
//! Kept free of DOM types so the page logic can be tested natively.

use ringbar_core::AnimationError;

/// Parse the percent typed into the page's input.
///
/// Accepts a number in 0..=100 surrounded by optional whitespace. An empty
/// input is rejected rather than read as 0.
pub fn parse_percent(input: &str) -> Result<f64, AnimationError> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| AnimationError::invalid(format!("percent {input:?} is not a number")))?;
    if (0.0..=100.0).contains(&value) {
        Ok(value)
    } else {
        Err(AnimationError::invalid(format!(
            "percent must be between 0 and 100, got {trimmed}"
        )))
    }
}

/// Which demo buttons are enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    /// Start-animation button
    pub start_enabled: bool,
    /// Hide button
    pub hide_enabled: bool,
    /// Unhide button
    pub unhide_enabled: bool,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            start_enabled: true,
            hide_enabled: true,
            unhide_enabled: false,
        }
    }
}

impl Controls {
    /// A run was accepted: block further starts until it ends.
    pub fn animation_started(&mut self) {
        self.start_enabled = false;
    }

    /// The run completed.
    pub fn animation_ended(&mut self) {
        self.start_enabled = true;
    }

    /// The ring was hidden.
    pub fn hidden(&mut self) {
        self.hide_enabled = false;
        self.unhide_enabled = true;
    }

    /// The ring was shown again.
    pub fn shown(&mut self) {
        self.hide_enabled = true;
        self.unhide_enabled = false;
    }
}
