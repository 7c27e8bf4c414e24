use std::sync::Arc;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

use flydaddy::api::AppState;
use flydaddy::catalog::Catalog;
use flydaddy::config::FlydaddyConfig;
use flydaddy::web;

fn init_tracing(config: &FlydaddyConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    if config.logging.format == "json" {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = FlydaddyConfig::load()?;
    init_tracing(&config);

    tracing::info!(version = flydaddy::VERSION, "starting flydaddy");

    let catalog = Catalog::load_builtin()?;
    let state = AppState::new(Arc::new(catalog), config.contact.clone());

    web::run(&config, state).await
}
