//! Reeldiary Frontend Entry Point

mod models;
mod api;
mod context;
mod store;
mod rating;
mod menu;
mod search;
mod layout;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
