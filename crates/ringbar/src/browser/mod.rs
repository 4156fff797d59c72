//! Browser runtime for ringbar.
//!
//! Bridges the animation driver and the ring widget to the browser: the
//! clock is `performance.now()`, frames come from `requestAnimationFrame`,
//! and the ring renders as inline SVG.

// WASM-only modules
#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod clock;
#[cfg(target_arch = "wasm32")]
pub mod frame;
#[cfg(target_arch = "wasm32")]
pub mod logger;
#[cfg(target_arch = "wasm32")]
pub mod svg;

// Cross-platform modules
pub mod controls;

#[cfg(target_arch = "wasm32")]
pub use app::DemoApp;
#[cfg(target_arch = "wasm32")]
pub use clock::PerformanceClock;
#[cfg(target_arch = "wasm32")]
pub use frame::RafScheduler;
#[cfg(target_arch = "wasm32")]
pub use logger::ConsoleLogger;
#[cfg(target_arch = "wasm32")]
pub use svg::SvgRingView;
pub use controls::{parse_percent, Controls};
