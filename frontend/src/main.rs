use crate::elements::app_root::app_root;

mod elements;
mod utils;
mod constants;
mod state;
mod notes;
mod actions;
mod types;
mod api;
mod connect_fetch;
pub mod loader;

pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    dominator::append_dom(&dominator::body(), app_root());
    loader::notes_reload();
    loader::actions_reload();
}
