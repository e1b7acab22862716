//! Portfolio FX core crate.
//!
//! Presentation layer for the static portfolio page: scroll reveal, the
//! project preview modal, the ambient track with its enable button, and the
//! device-aware hover chimes. Each component is wired independently by
//! `init_page()`; a component whose markup is missing stays inert and the page
//! remains fully usable.

use wasm_bindgen::prelude::*;

pub mod ambient;
pub mod config;
mod dom;
pub mod error;
pub mod feedback;
pub mod gate;
pub mod media;
pub mod preview;
pub mod reveal;
pub mod style;

pub use config::FxConfig;
pub use error::SetupError;
pub use gate::OnceGate;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

thread_local! {
    static INITIALIZED: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
}

// -----------------------------------------------------------------------------
// Entrypoints
// -----------------------------------------------------------------------------

/// Wire every component with the default page contract once the document
/// structure is ready. Later calls are no-ops.
#[wasm_bindgen]
pub fn init_page() -> Result<(), JsValue> {
    init_with(FxConfig::default())
}

/// Same as `init_page`, with a (partial) JSON override of the page contract.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn init_page_with_config(json: &str) -> Result<(), JsValue> {
    let cfg = FxConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    init_with(cfg)
}

#[wasm_bindgen]
pub fn open_preview(addr: &str, title: Option<String>) {
    preview::open_preview(addr, title.as_deref());
}

#[wasm_bindgen]
pub fn close_preview() {
    preview::close_preview();
}

fn init_with(cfg: FxConfig) -> Result<(), JsValue> {
    if INITIALIZED.with(|flag| flag.replace(true)) {
        return Ok(());
    }
    let (_win, doc) = dom::window_and_document()?;
    if still_loading(&doc.ready_state()) {
        let ready = OnceGate::new();
        ready.subscribe(move || init_components(&cfg));
        dom::fire_once_on_any(&doc, &["DOMContentLoaded"], ready)?;
    } else {
        init_components(&cfg);
    }
    Ok(())
}

/// `document.readyState` before `DOMContentLoaded` has fired.
fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn init_components(cfg: &FxConfig) {
    let Ok((win, doc)) = dom::window_and_document() else {
        return;
    };
    let consent = OnceGate::new();

    report("reveal", reveal::install(&doc, cfg).map(|n| format!("{n} elements")));
    report("preview", preview::install(&win, &doc, cfg).map(|n| format!("{n} thumbnails")));
    report("ambient", ambient::install(&win, &doc, cfg, consent.clone()).map(|_| "ready".to_string()));
    report("feedback", feedback::install(&win, &doc, cfg, consent).map(|m| format!("{m:?}")));
}

fn report(component: &str, result: Result<String, SetupError>) {
    match result {
        Ok(detail) => gloo::console::debug!(format!("{component}: {detail}")),
        Err(err) if err.is_missing() => gloo::console::debug!(format!("{component}: inert, {err}")),
        Err(err) => gloo::console::warn!(format!("{component}: setup failed, {err}")),
    }
}
