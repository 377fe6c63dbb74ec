//! Polymedia Profile web front-end
//!
//! Client-side rendered Leptos app, built with trunk.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

mod app;
mod components;
mod pages;
mod services;
mod state;
mod utils;

use app::App;

const LOADING_ELEMENT_ID: &str = "leptos-loading";

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Polymedia Profile starting...");

    hide_loading_screen();

    leptos::mount::mount_to_body(|| view! { <App/> });
}

/// Hide the loading screen element, if the page has one.
pub(crate) fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available, loading screen left as is");
        return;
    };

    let Some(loading_element) = document.get_element_by_id(LOADING_ELEMENT_ID) else {
        log::debug!("No #{} element to hide", LOADING_ELEMENT_ID);
        return;
    };

    if let Some(html_element) = loading_element.dyn_ref::<HtmlElement>() {
        if let Err(e) = html_element.class_list().add_1("hidden") {
            log::warn!("Failed to add 'hidden' class: {:?}", e);
        }
    }

    // Also set display:none in case the stylesheet has no .hidden rule
    if let Err(e) = loading_element.set_attribute("style", "display: none !important;") {
        log::warn!("Failed to set loading screen style: {:?}", e);
    }

    log::info!("Loading screen hidden");
}
