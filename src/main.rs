use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod shared;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        dotenvy::dotenv().ok();
        backend::init_tracing();

        // Build the upstream client once at boot; server fns retry lazily on failure
        match backend::EquranConfig::from_env().and_then(|cfg| backend::EquranClient::new(&cfg)) {
            Ok(client) => {
                dioxus::logger::tracing::info!("[equran] using {}", client.base_url());
                let _ = backend::GLOBAL_EQURAN.set(client);
            }
            Err(e) => {
                dioxus::logger::tracing::error!("[equran] failed to init client: {e:#}");
            }
        }
    }
    dioxus::launch(app::App);
}
