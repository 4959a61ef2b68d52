//! Documentation archive viewer.
//!
//! A ZIP of a documentation project is opened entirely in the browser and
//! browsed as a file tree next to its rendered content.

mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&format!("{} v{}", config::APP_NAME, config::APP_VERSION).into());

    match document().get_element_by_id("app") {
        Some(root) => mount_to(root.unchecked_into::<web_sys::HtmlElement>(), App).forget(),
        None => mount_to_body(App),
    }
}
