//! Read-only observability surface for end-to-end harnesses.
//!
//! The trigger's single decision is stored once and exposed on
//! `window.__autorefresh_test_api`; nothing here re-runs the decision and
//! nothing is persisted.

use shared::RefreshStatus;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

thread_local! {
    static REFRESH_STATUS: RefCell<Option<RefreshStatus>> = const { RefCell::new(None) };
}

/// Record the trigger's decision. Called once from the entry wiring.
pub fn store_refresh_status(status: RefreshStatus) {
    REFRESH_STATUS.with(|cell| {
        *cell.borrow_mut() = Some(status);
    });
}

/// JSON snapshot of the stored decision; `"null"` before the trigger has run.
#[wasm_bindgen]
pub fn refresh_status_json() -> String {
    REFRESH_STATUS.with(|cell| {
        serde_json::to_string(&*cell.borrow()).unwrap_or_else(|_| "null".to_string())
    })
}

#[wasm_bindgen]
pub fn expose_autorefresh_test_api() {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return,
    };

    let api = js_sys::Object::new();

    let get_refresh_status_closure =
        Closure::wrap(Box::new(get_refresh_status_impl) as Box<dyn Fn() -> JsValue>);
    js_sys::Reflect::set(
        &api,
        &"getRefreshStatus".into(),
        get_refresh_status_closure.as_ref().unchecked_ref(),
    )
    .ok();
    get_refresh_status_closure.forget();

    js_sys::Reflect::set(&window, &"__autorefresh_test_api".into(), &api).ok();

    web_sys::console::log_1(&JsValue::from_str(
        "[AutoRefresh] Test API exposed on window.__autorefresh_test_api",
    ));
}

fn get_refresh_status_impl() -> JsValue {
    REFRESH_STATUS.with(|cell| match cell.borrow().as_ref() {
        Some(status) => {
            serde_json::to_string(status).map_or(JsValue::NULL, |json| JsValue::from_str(&json))
        }
        None => JsValue::NULL,
    })
}
