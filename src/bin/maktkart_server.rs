//! Maktkart server
//!
//! Serves the power-network map API and the Brreg lookup pass-through.
//! Configuration is read from the environment (see `maktkart::config`).

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use maktkart::api::{build_router, AppState};
use maktkart::brreg::BrregClient;
use maktkart::{PowerDataset, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,maktkart=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    let dataset = match &config.dataset_path {
        Some(path) => PowerDataset::load(path)?,
        None => {
            tracing::info!("MAKTKART_DATASET not set, using bundled dataset");
            PowerDataset::bundled().context("Bundled dataset is invalid")?
        }
    };

    let registry = BrregClient::from_config(&config.brreg)?;
    tracing::info!(base_url = %registry.base_url(), "Brreg client ready");

    let state = AppState::new(dataset, Arc::new(registry));
    let app = build_router(state, config.static_dir.as_deref());

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Maktkart server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
