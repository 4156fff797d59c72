//! `requestAnimationFrame` as the frame scheduler.

use ringbar_core::{AnimationError, FrameCallback, FrameScheduler};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Window};

/// Schedules frames on the browser's presentation cycle.
#[derive(Debug, Clone)]
pub struct RafScheduler {
    window: Window,
}

impl RafScheduler {
    /// Bind to the current window.
    pub fn new() -> Result<Self, JsValue> {
        let window = window().ok_or("No window")?;
        Ok(Self { window })
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule_frame(&self, frame: FrameCallback) -> Result<(), AnimationError> {
        let callback = Closure::once_into_js(move || frame());
        self.window
            .request_animation_frame(callback.unchecked_ref::<js_sys::Function>())
            .map(|_| ())
            .map_err(|e| AnimationError::scheduler(format!("requestAnimationFrame failed: {e:?}")))
    }
}
