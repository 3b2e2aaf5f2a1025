pub mod api;
pub mod app;
pub mod clipboard;
pub mod components;
pub mod pages;

pub use app::App;

pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
