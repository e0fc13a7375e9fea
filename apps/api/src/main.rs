mod config;
mod errors;
mod frontend;
mod jobs;
mod routes;
mod state;

use anyhow::{Context, Result};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::frontend::ensure_index;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_CRATE_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting JobHunter API v{}", env!("CARGO_PKG_VERSION"));

    if config.static_bootstrap {
        match ensure_index(&config.static_dir).await {
            Ok(true) => info!(dir = %config.static_dir.display(), "Static directory bootstrapped"),
            Ok(false) => {}
            Err(e) => warn!("Static bootstrap skipped: {e:#}"),
        }
    }
    info!("Serving front-end from {}", config.static_dir.display());

    let addr = config.bind_addr();
    let state = AppState::new(config);

    let app = build_router(state).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
