//! Release-notes chat widget
//!
//! Leptos front-end over the platform-independent `lib-core` controller.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

mod app;
mod components;
mod services;
mod state;
mod utils;

use app::App;
use utils::constants::LOADING_ELEMENT_ID;

#[wasm_bindgen(start)]
pub fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("chat widget starting");

    hide_loading_screen();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the static loading placeholder shipped in index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("no document available");
        return;
    };

    match document.get_element_by_id(LOADING_ELEMENT_ID) {
        Some(loading) => {
            if let Err(err) = loading.class_list().add_1("hidden") {
                log::warn!("could not hide loading screen: {:?}", err);
            }
        }
        None => log::debug!("no loading screen to hide"),
    }
}
