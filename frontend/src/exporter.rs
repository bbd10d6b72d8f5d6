//! Browser-side exporter: turns serialized JSON into a one-shot download via
//! a Blob object URL and a synthesized anchor click, and opens the companion
//! static page for the secondary export actions.
//!
//! The export hand-off to the companion page happens purely by convention
//! (the user drops the downloaded file where that page expects it); there is
//! no programmatic data channel, so opening the tab after a short delay is
//! all this module does.

use gloo_console::error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Delay before the companion page opens, leaving the download prompt time
/// to appear first.
const COMPANION_PAGE_DELAY_MS: u32 = 500;

/// Downloads `json` as `file_name`. DOM failures are logged, not surfaced;
/// the document itself is unaffected either way.
pub fn trigger_download(file_name: &str, json: &str) {
    if let Err(err) = try_download(file_name, json) {
        error!("下載失敗", err);
    }
}

fn try_download(file_name: &str, json: &str) -> Result<(), JsValue> {
    let parts = js_sys::Array::of1(&JsValue::from_str(json));
    let options = BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;

    let url = Url::create_object_url_with_blob(&blob)?;
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    Url::revoke_object_url(&url)
}

/// Opens `page` in a new tab after [`COMPANION_PAGE_DELAY_MS`].
pub fn open_companion_page(page: &'static str) {
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(COMPANION_PAGE_DELAY_MS).await;
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.open_with_url_and_target(page, "_blank") {
                error!("開啟頁面失敗", err);
            }
        }
    });
}
