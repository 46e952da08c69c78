//! Bookmark Toggle Frontend Entry Point

mod api;
mod app;
mod config;
mod controller;
mod dom;
mod error;
mod models;
mod store;
mod toggle;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());

    if let Err(e) = dom::on_ready(|| mount_to_body(App)) {
        log::error!("[APP] Failed to start: {}", e);
    }
}
