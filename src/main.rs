mod components;
mod config;
mod models;
mod state;
mod utils;

use components::App;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🏠 InmoLeads Portal Cliente starting...");

    yew::Renderer::<App>::new().render();
}
