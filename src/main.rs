//! Guardpost Server - staff management console backend

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use guardpost_server::{
    api,
    config::{AppConfig, LogFormat},
    fixtures::Fixtures,
    projection,
    services::auth::hash_password,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        format!("guardpost_server={},tower_http=debug", config.logging.level).into()
    });

    let registry = tracing_subscriber::registry().with(filter);
    match config.logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting Guardpost Server v{}", env!("CARGO_PKG_VERSION"));

    let fixtures = if config.fixtures.enabled {
        let password_hash = hash_password(&config.fixtures.seed_password)?;
        Fixtures::seed(projection::today(), &password_hash)
    } else {
        Fixtures::empty()
    };
    tracing::info!(
        requests = fixtures.requests.len(),
        reports = fixtures.reports.len(),
        sites = fixtures.sites.len(),
        staff = fixtures.staff.len(),
        "In-memory store seeded"
    );

    let addr = SocketAddr::new(
        config.server.host.parse().context("Invalid host address")?,
        config.server.port,
    );

    let state = AppState::new(config, fixtures);
    let app = api::router(state);

    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
