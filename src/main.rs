#![allow(warnings)]
//! Device Admin Frontend Entry Point

mod config;
mod store;
mod feedback;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use tracing_wasm::WASMLayerConfigBuilder;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::read_config();
    let config = loaded.clone().unwrap_or_default();
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new()
            .set_max_level(config.max_level())
            .build(),
    );
    if let Err(err) = loaded {
        tracing::warn!("using default config: {}", err);
    }

    tracing::info!("mounting add-device page");
    mount_to_body(move || view! { <App config=config /> });
}
