//! Form & Board Frontend Entry Point

mod app;
mod board;
mod components;
mod config;
mod form;
mod models;
mod pages;
mod store;
mod transfer;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger not installed: {}", err).into());
    }
    log::info!("[APP] starting");
    mount_to_body(App);
}
