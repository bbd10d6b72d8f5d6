//! Editor components, one per document variant, plus the dirty-tracking
//! helpers both share.

pub mod regulation;
pub mod staff;

use js_sys::Reflect;
use wasm_bindgen::JsValue;

/// Placeholder shown in list labels while a record has no name or title yet.
pub const UNNAMED_LABEL: &str = "(未命名)";

/// MD5 hex digest used to compare the current document against the snapshot
/// captured at load.
pub fn compute_md5(input: &str) -> String {
    format!("{:x}", md5::compute(input))
}

/// Mirrors the dirty state onto `window.app_dirty` so the host page can warn
/// before the tab closes with undownloaded changes.
pub fn set_window_dirty_flag(dirty: bool) {
    if let Some(window) = web_sys::window() {
        let _ = Reflect::set(
            &window,
            &JsValue::from_str("app_dirty"),
            &JsValue::from_bool(dirty),
        );
    }
}
