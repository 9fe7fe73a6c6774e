//! WebAssembly bindings for StretchText.
//!
//! Runs the StretchText controller directly against the browser DOM. With the
//! default `autostart` feature the module installs itself with the default
//! configuration when instantiated. Without it, call `initStretchText`:
//!
//! ```javascript
//! import init, { initStretchText } from 'stretchtext-web';
//!
//! await init();
//! initStretchText({ labelClosed: 'Show more', scheduler: 'timer' });
//! ```
//!
//! Initialization waits for `DOMContentLoaded` (or `load`), or runs at once if
//! the document has finished parsing. Either way it only happens once per page.

mod host;
mod scheduler;

pub use host::WebHost;
pub use scheduler::{FRAME_CALLBACK_NAMES, WebScheduler, probe_frame_callback};

use serde::Serialize;
use std::cell::RefCell;
use stretchtext::{Config, DeferredToggle, Lifecycle, SchedulerMode, ToggleController};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

struct Runtime {
    controller: ToggleController<WebHost>,
    scheduler: WebScheduler,
}

thread_local! {
    static RUNTIME: RefCell<Option<Runtime>> = const { RefCell::new(None) };
}

/// Set up panic reporting and, with `autostart`, install with defaults.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    #[cfg(feature = "autostart")]
    install(Config::default())?;

    Ok(())
}

/// Install StretchText with a configuration object.
///
/// `config` may be `undefined` or a partial object; missing keys take their
/// defaults. Only the first install on a page takes effect.
#[wasm_bindgen(js_name = initStretchText)]
pub fn init_stretch_text(config: JsValue) -> Result<(), JsValue> {
    let config: Config = if config.is_undefined() || config.is_null() {
        Config::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    install(config)
}

/// Install the runtime and hook document readiness
pub fn install(config: Config) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("StretchText needs a window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("StretchText needs a document"))?;

    let created = RUNTIME.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return false;
        }
        let scheduler = WebScheduler::new(window.clone(), &config);
        *slot = Some(Runtime {
            controller: ToggleController::new(config),
            scheduler,
        });
        true
    });
    if !created {
        tracing::debug!("StretchText already installed");
        return Ok(());
    }

    let on_ready = Closure::<dyn FnMut()>::new(initialize);
    for event in ["DOMContentLoaded", "load"] {
        window.add_event_listener_with_callback(event, on_ready.as_ref().unchecked_ref())?;
    }
    on_ready.forget();

    // Module instantiation is async, so DOMContentLoaded may already be past
    if document.ready_state() != "loading" {
        initialize();
    }
    Ok(())
}

/// Discover summaries and attach handlers. Later calls do nothing.
pub fn initialize() {
    let Some(mut host) = WebHost::current() else {
        return;
    };
    RUNTIME.with(|slot| {
        if let Some(runtime) = slot.borrow_mut().as_mut() {
            runtime.controller.initialize(&mut host);
        }
    });
}

pub(crate) fn activate(summary: &Element) {
    let Some(mut host) = WebHost::current() else {
        return;
    };
    RUNTIME.with(|slot| {
        if let Some(runtime) = slot.borrow_mut().as_mut() {
            // Failures were already reported to the console
            let _ = runtime.controller.activate(&mut host, &mut runtime.scheduler, summary);
        }
    });
}

pub(crate) fn complete(task: &DeferredToggle<Element>) {
    let Some(mut host) = WebHost::current() else {
        return;
    };
    RUNTIME.with(|slot| {
        if let Some(runtime) = slot.borrow().as_ref() {
            runtime.controller.complete(&mut host, task);
        }
    });
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Status {
    installed: bool,
    initialized: bool,
    summaries: usize,
    scheduler: &'static str,
}

/// Snapshot of the runtime for debugging from the console
#[wasm_bindgen(js_name = stretchTextStatus)]
pub fn status() -> Result<JsValue, JsValue> {
    let status = RUNTIME.with(|slot| match slot.borrow().as_ref() {
        Some(runtime) => Status {
            installed: true,
            initialized: runtime.controller.lifecycle() == Lifecycle::Completed,
            summaries: runtime.controller.summaries().len(),
            scheduler: match runtime.scheduler.mode() {
                SchedulerMode::AnimationFrame => "animationFrame",
                SchedulerMode::Timer { .. } => "timer",
            },
        },
        None => Status {
            installed: false,
            initialized: false,
            summaries: 0,
            scheduler: "none",
        },
    });
    Ok(serde_wasm_bindgen::to_value(&status)?)
}

/// Get the version of the stretchtext-web library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
