//! # client
//!
//! Leptos + WASM frontend for the ESET quote-request site.
//!
//! The crate renders the landing page (hero, solution catalog, inquiry form)
//! on the server and hydrates it in the browser. Inquiry rules live in the
//! `inquiry` crate; this crate only binds them to signals and the DOM.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("console logger init failed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}
