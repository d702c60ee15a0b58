//! Leptos frontend for the browser build.

pub mod api;
pub mod app;

use wasm_bindgen::prelude::*;

/// Runs once when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn main() {
    // Panics show up in the devtools console instead of as `unreachable`.
    console_error_panic_hook::set_once();

    leptos::mount_to_body(app::App);
}
