#![cfg(feature = "server")]

pub mod config;
pub mod equran;

pub use config::EquranConfig;
pub use equran::{client, EquranClient, GLOBAL_EQURAN};

pub use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt, EnvFilter};

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn"));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
