//! Load-completion hook: run a callback exactly once, at the point the host
//! document finishes loading.

use wasm_bindgen::prelude::*;

/// True when a document in `ready_state` has already finished loading, so
/// the hook must dispatch now instead of waiting for a load event that will
/// never fire again.
pub fn runs_immediately(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Invoke `callback` once the document has finished loading.
///
/// Wasm modules instantiate asynchronously and may come up after the load
/// event has already fired; in that case the callback runs right away.
/// Otherwise it becomes the window's fire-once `onload` handler. Either path
/// invokes it at most once per page load. Outside a browsing context the
/// callback is dropped without running.
pub fn once_document_complete(callback: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    if runs_immediately(&document.ready_state()) {
        callback();
        return;
    }

    let handler = Closure::once_into_js(callback);
    window.set_onload(Some(handler.unchecked_ref()));
}
