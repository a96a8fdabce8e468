//! Host page seam: marker lookup, one-shot reload scheduling, console
//! diagnostics.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::Document;

/// Surface the trigger needs from the host page.
///
/// The document is only ever read: the marker is existence-checked, never
/// inspected or mutated. Scheduling is fire-once and hands back no handle,
/// so a scheduled reload cannot be cancelled.
pub trait Page {
    /// True when the document contains an element with `element_id`.
    fn marker_present(&self, element_id: &str) -> bool;

    /// Arm one fire-once timer that forces a full, cache-bypassing reload
    /// of the current page after `delay_ms`.
    fn schedule_reload(&self, delay_ms: u32);

    /// Emit one diagnostic line to the developer console.
    fn notify(&self, message: &str);
}

/// The live browser document.
pub struct BrowserPage {
    document: Document,
}

impl BrowserPage {
    /// Capture the current browsing context. `None` outside a browser,
    /// where there is nothing to refresh and nothing to log to.
    pub fn current() -> Option<Self> {
        let document = web_sys::window()?.document()?;
        Some(Self { document })
    }
}

impl Page for BrowserPage {
    fn marker_present(&self, element_id: &str) -> bool {
        self.document.get_element_by_id(element_id).is_some()
    }

    fn schedule_reload(&self, delay_ms: u32) {
        // The handle is deliberately leaked: the timer must outlive this call
        // and stay non-cancellable. The reload discards the page's execution
        // context, so the callback runs at most once.
        Timeout::new(delay_ms, force_reload).forget();
    }

    fn notify(&self, message: &str) {
        web_sys::console::log_1(&JsValue::from_str(message));
    }
}

/// Re-fetch the current URL from the origin, bypassing local cache.
fn force_reload() {
    if let Some(window) = web_sys::window() {
        window.location().reload_with_forceget(true).ok();
    }
}
