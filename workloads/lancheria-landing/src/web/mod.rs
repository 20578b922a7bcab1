//! Leptos page for the browser bundle.

mod app;
mod browser;
mod cart;
mod sections;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use app::App;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
