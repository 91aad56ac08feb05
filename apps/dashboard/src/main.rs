mod analysis;
mod config;
mod console;
mod errors;
mod gateway;
mod insights;
mod interview;
mod listings;
mod models;
mod notify;
mod progress;
mod state;

#[cfg(test)]
mod testing;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::console::Console;
use crate::gateway::HttpGateway;
use crate::notify::ConsoleNotifier;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so the console output on stdout stays readable
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting career dashboard v{}", env!("CARGO_PKG_VERSION"));

    let gateway = HttpGateway::new(&config.backend_url);
    info!("Backend gateway initialized ({})", gateway.base_url());

    let state = AppState {
        gateway: Arc::new(gateway),
        notifier: Arc::new(ConsoleNotifier),
        config: config.clone(),
    };

    Console::new(state).run().await
}
