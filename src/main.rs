use anyhow::Context;
use tracing_subscriber::EnvFilter;

use roulette_api::api::{create_router, AppState};
use roulette_api::catalog::Catalog;
use roulette_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // The catalog is loaded exactly once; a load failure means the process
    // must not start serving.
    let catalog = Catalog::load_path(&config.catalog_path)
        .with_context(|| format!("failed to load catalog from {}", config.catalog_path))?;
    tracing::info!(rows = catalog.len(), path = %config.catalog_path, "catalog loaded");

    let state = AppState::new(catalog);
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("server running on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
