//! `performance.now()` as the animation clock.

use ringbar_core::Clock;
use wasm_bindgen::prelude::*;
use web_sys::{window, Performance};

/// Monotonic clock backed by the page's `Performance` object.
#[derive(Debug, Clone)]
pub struct PerformanceClock {
    performance: Performance,
}

impl PerformanceClock {
    /// Bind to the current window's `performance`.
    pub fn new() -> Result<Self, JsValue> {
        let performance = window()
            .ok_or("No window")?
            .performance()
            .ok_or("No performance")?;
        Ok(Self { performance })
    }
}

impl Clock for PerformanceClock {
    fn now(&self) -> f64 {
        self.performance.now()
    }
}
