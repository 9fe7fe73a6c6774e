//! Frame scheduling in the browser

use stretchtext::{Config, DeferredToggle, FrameScheduler, SchedulerMode};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};

/// Per-frame callback names, most preferred first
pub const FRAME_CALLBACK_NAMES: [&str; 5] = [
    "requestAnimationFrame",
    "webkitRequestAnimationFrame",
    "mozRequestAnimationFrame",
    "oRequestAnimationFrame",
    "msRequestAnimationFrame",
];

/// First per-frame callback the window provides
pub fn probe_frame_callback(window: &Window) -> Option<js_sys::Function> {
    FRAME_CALLBACK_NAMES.iter().find_map(|name| {
        js_sys::Reflect::get(window, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
    })
}

/// Runs deferred toggles on the next animation frame, or after a timer
pub struct WebScheduler {
    window: Window,
    mode: SchedulerMode,
    frame_callback: Option<js_sys::Function>,
}

impl WebScheduler {
    pub fn new(window: Window, config: &Config) -> Self {
        let frame_callback = probe_frame_callback(&window);
        let mode = SchedulerMode::select(config.scheduler, frame_callback.is_some(), config.frame_fallback());
        tracing::debug!(?mode, "Selected frame scheduler");
        Self {
            window,
            mode,
            frame_callback,
        }
    }

    pub fn mode(&self) -> SchedulerMode {
        self.mode
    }

    fn request(&self, callback: &JsValue) -> Result<(), JsValue> {
        match (self.mode, &self.frame_callback) {
            (SchedulerMode::AnimationFrame, Some(frame)) => frame.call1(&self.window, callback).map(drop),
            (SchedulerMode::AnimationFrame, None) => Err(JsValue::from_str("no frame callback")),
            (SchedulerMode::Timer { interval }, _) => self
                .window
                .set_timeout_with_callback_and_timeout_and_arguments_0(
                    callback.unchecked_ref(),
                    i32::try_from(interval.as_millis()).unwrap_or(i32::MAX),
                )
                .map(drop),
        }
    }
}

impl FrameScheduler<DeferredToggle<Element>> for WebScheduler {
    fn schedule(&mut self, task: DeferredToggle<Element>) {
        let callback = Closure::once_into_js(move || crate::complete(&task));
        if let Err(err) = self.request(&callback) {
            web_sys::console::error_2(&JsValue::from_str("Cannot schedule StretchText frame"), &err);
        }
    }
}
