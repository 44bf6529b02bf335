//! Entry point for the WASM application

use lexicare::App;
use leptos::*;

pub fn main() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 LexiCare - Starting Leptos App");
    log::debug!("Backend API: {}", lexicare::API_BASE_URL);

    mount_to_body(|| view! { <App/> })
}
