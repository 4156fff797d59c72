//! Widgets for ringbar.
//!
//! - [`ProgressRing`]: a circular progress indicator that animates toward a
//!   target percent and can be hidden and shown
//! - [`RingView`]: the rendering surface a ring drives, with
//!   [`RecordingView`] as a native implementation
//! - [`RingStyle`]: geometry, colors, and defaults, loadable from TOML

mod error;
mod progress_ring;
mod style;
mod view;

pub use error::RingError;
pub use progress_ring::{display_percent, AnimateOptions, ProgressRing, RingState};
pub use style::{RingStyle, RingStyleFile};
pub use view::{paint_ring, RecordingView, RingView};
