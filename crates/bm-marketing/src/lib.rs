//! BrowserMind marketing site library
//!
//! Shared between the SSR server binary and the wasm hydration bundle.

pub mod app;
pub mod components;
pub mod pages;
pub mod provider;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    leptos::mount_to_body(App);
}
