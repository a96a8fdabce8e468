//! AutoRefresh browser client.
//!
//! Pages opt in by rendering `<div id="reload"></div>`; ten seconds after
//! load the current URL is re-fetched from the origin, bypassing local
//! cache. Pages without the marker are untouched.

pub mod lifecycle;
pub mod page;
pub mod test_api;
pub mod trigger;

#[cfg(test)]
mod testing;

use page::BrowserPage;
use shared::RefreshOptions;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    lifecycle::once_document_complete(|| {
        let Some(page) = BrowserPage::current() else {
            return;
        };
        let status = trigger::run(&page, &RefreshOptions::default());
        test_api::store_refresh_status(status);
    });

    test_api::expose_autorefresh_test_api();
}
