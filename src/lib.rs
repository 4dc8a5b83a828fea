//! Kana Trace core crate.
//!
//! Interactive tracing drill for hiragana and katakana: one canvas per
//! character in the active gojūon row, a faint guide glyph to trace over, and
//! speech feedback (tap a canvas to hear its character, navigate to hear the
//! row name). Navigation, sizing, the tap-vs-drag state machine and the
//! speech policy are pure Rust so they run under native `cargo test`; only
//! the `app` glue touches the DOM.

use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod drill;
pub mod layout;
pub mod speech;
pub mod trace;

mod app;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Wire up the drill against the host page and render the first row.
#[wasm_bindgen]
pub fn start_drill() -> Result<(), JsValue> {
    app::start_drill()
}
