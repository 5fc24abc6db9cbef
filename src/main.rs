#![allow(warnings)]
//! ChompSmart Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod grocery;
mod meal_log;
mod models;
mod session;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("ChompSmart", 500, log::LevelFilter::Info) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }
    mount_to_body(App);
}
