mod api;
mod app;
mod checkin;
mod components;
mod config;
mod error;
mod pages;
mod routes;
mod session;
mod storage;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
