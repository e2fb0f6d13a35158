//! Ward Dashboard - Leptos frontend
//!
//! Browser UI for looking at a room's readings, patients and sensor logs.

pub mod api;
pub mod app;
pub mod components;
pub mod layouts;

pub use app::App;

/// Client-side entry point for the WASM build
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    leptos::mount::mount_to_body(App);
}
