//! CopyTrade web front end
//!
//! Leptos application shell around the logged-out prompt: a session expiry
//! notifier that reacts to logout broadcasts and auth-state changes.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
