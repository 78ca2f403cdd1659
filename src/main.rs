//! Navigation Menu Admin UI Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod logging;
mod menu;
mod models;
mod notify;
mod store;

use app::App;
use config::AdminConfig;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

const MOUNT_POINT: &str = "admin-app";

fn main() {
    console_error_panic_hook::set_once();

    let config = AdminConfig::load();
    logging::init(config.level_filter());
    log::info!("[APP] Starting admin UI, api_base={}", config.api_base);

    let mount = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_POINT))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match mount {
        Some(el) => leptos::mount::mount_to(el, move || view! { <App config=config /> }).forget(),
        None => {
            log::warn!("[APP] #{} not found, mounting to body", MOUNT_POINT);
            mount_to_body(move || view! { <App config=config /> });
        }
    }
}
