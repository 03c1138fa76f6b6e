//! Sentiment Dashboard Web App (Leptos + WASM)

pub mod app;
mod components;
mod api;
mod plotly;
mod render;
pub mod theme_store;
pub mod timer;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&JsValue::from_str(&format!("logger init failed: {}", e)));
    }
    leptos::mount::mount_to_body(app::App);
}
