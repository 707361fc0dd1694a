#![allow(warnings)]
//! Movie List Manager Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod models;
mod movie_list;
mod paging;
mod storage;
mod store;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
