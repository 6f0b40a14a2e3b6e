use anyhow::{Context, Result};
use chrono::Utc;
use persistence::FixtureStore;
use tracing::info;

use fixture_api::{app, config, middleware};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = config::Config::load()?;

    middleware::logging::init_logging(&config.logging);
    middleware::init_metrics().context("Failed to install Prometheus recorder")?;

    info!("Starting Surveillance Fixture API v{}", env!("CARGO_PKG_VERSION"));

    let fixtures = &config.fixtures;
    let store = FixtureStore::from_dataset(
        fixtures.dataset.load(),
        &fixtures.seed_options(),
        Utc::now(),
    );
    info!(
        dataset = %fixtures.dataset,
        apply_date_range = fixtures.apply_date_range,
        "Fixtures loaded"
    );

    let addr = config
        .socket_addr()
        .context("Invalid server host or port")?;
    let app = app::create_app(config, store.into_shared());

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
