//! # folio-client
//!
//! Leptos + WASM frontend for the portfolio page.
//!
//! The page is static markup except for two widgets driven by the `motion`
//! engine: stat cards that count up on first visibility and the rotating
//! profile badge. `util` adapts the engine's timer and viewport traits to the
//! browser; everything else renders identically on the server.

pub mod app;
pub mod components;
pub mod content;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger unavailable: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
