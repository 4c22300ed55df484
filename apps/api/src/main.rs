mod analysis;
mod config;
mod errors;
mod extraction;
mod models;
mod profile;
mod routes;
mod scoring;
mod state;
mod store;

#[cfg(test)]
mod test_fixtures;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::profile::source::{ProfileFactSource, SimulatedProfileSource};
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::json_file::JsonFileStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first; malformed numeric vars abort startup
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Analyzer API v{}", env!("CARGO_PKG_VERSION"));

    // Load persisted analyses
    let store = JsonFileStore::open(&config.analyses_path).await?;

    // Profile facts are simulated until an authorized data source exists
    let profile_source = Arc::new(SimulatedProfileSource);
    info!("Profile fact source: {}", profile_source.name());

    let state = AppState {
        store: Arc::new(store),
        profile_source,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
