mod api_client;
mod config;
mod errors;
mod models;
mod pages;
mod render;
mod results;
mod routes;
mod search;
mod state;
mod upload;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::api_client::ResumeApiClient;
use crate::config::Config;
use crate::results::ResultStore;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Portal v{}", env!("CARGO_PKG_VERSION"));

    let api = ResumeApiClient::new(config.api_base_url.clone(), config.api_timeout)?;
    info!("Resume API client initialized (base: {})", api.base_url());

    let results = ResultStore::new(
        chrono::Duration::seconds(i64::from(config.result_ttl_secs)),
        config.result_capacity,
    );
    info!(
        "Result store: ttl {}s, capacity {}",
        config.result_ttl_secs, config.result_capacity
    );

    let state = AppState {
        api: Arc::new(api),
        results,
        config: config.clone(),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
