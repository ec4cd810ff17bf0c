//! # Pet Auction Marketplace
//!
//! Main entry point for the pet-auction service.

use pet_auction::api::rest::{create_router, AppState};
use pet_auction::config::{AppConfig, LogFormat};
use pet_auction::infrastructure::persistence::InMemoryStore;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    info!("starting pet-auction v{}", env!("CARGO_PKG_VERSION"));

    let store = InMemoryStore::new();
    let state = Arc::new(AppState::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        Arc::new(store),
        config.auction.starting_balance,
    ));
    let router = create_router(state);

    let addr = config.rest_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "REST API listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log.level));
    match config.log.format {
        LogFormat::Json => tracing_subscriber::fmt().with_env_filter(filter).json().init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
    }
}
