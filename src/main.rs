use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nba_prop_signal::api::{create_router, AppState};
use nba_prop_signal::config::Config;
use nba_prop_signal::data::DataContext;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nba_prop_signal=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting nba-prop-signal");

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded");

    // Load data; serving without it is not an option
    let data = DataContext::load(&config).context("Failed to load player and schedule data")?;
    let data = Arc::new(data);

    if config.odds_seed.is_some() {
        info!("Odds sampling seeded, output is reproducible");
    }
    let state = AppState::with_seed(data, config.odds_seed);
    let app = create_router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await
        .context("HTTP server error")?;

    info!("Shutting down nba-prop-signal");
    Ok(())
}
