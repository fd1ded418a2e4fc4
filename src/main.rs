//! Food Catalog Frontend Entry Point

mod logger;
mod store;
mod components;
mod app;

use app::{load_config, App};
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(LevelFilter::Info);
    let config = load_config();
    log::set_max_level(config.level_filter());
    log::info!("[APP] starting with {:?} ids", config.id_strategy);
    mount_to_body(move || view! { <App config=config /> });
}
