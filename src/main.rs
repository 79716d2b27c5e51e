#![allow(warnings)]
//! OpenFire Frontend Entry Point

mod models;
mod commands;
mod events;
mod store;
mod update;
mod agreement;
mod format;
mod search;
mod markdown;
mod components;
mod pages;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
