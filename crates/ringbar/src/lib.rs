//! Ringbar: an animated circular progress indicator.
//!
//! # Browser Usage (WASM)
//!
//! ```javascript
//! import init, { DemoApp } from './ringbar.js';
//!
//! async function main() {
//!     await init();
//!     const app = new DemoApp();
//! }
//! ```
//!
//! The page provides `.wrapper`, `.input-percent`, `.btn-animate-start`,
//! `.btn-hidden` and `.btn-unhidden`; [`DemoApp`](browser::DemoApp) mounts
//! the ring into the wrapper and wires the buttons.

#![allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::needless_pass_by_value
)]

pub use ringbar_core::*;
pub use ringbar_widgets as widgets;
pub use ringbar_widgets::{AnimateOptions, ProgressRing, RecordingView, RingStyle, RingView};

pub mod browser;

#[cfg(target_arch = "wasm32")]
pub use browser::{ConsoleLogger, DemoApp, PerformanceClock, RafScheduler, SvgRingView};

pub use browser::{parse_percent, Controls};
