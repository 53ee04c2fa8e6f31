mod config;
mod error;
mod routes;

use std::process::ExitCode;

use site::Catalog;
use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "spinsite stopped");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ServerError> {
    let config = SiteConfig::from_env()?;

    let catalog = Catalog::builtin()?;
    for dup in catalog.duplicate_ids() {
        tracing::warn!(category = %dup.category, id = %dup.id, "duplicate video id in catalog");
    }
    tracing::info!(
        categories = catalog.categories().len(),
        videos = catalog.len(),
        "catalog loaded"
    );

    let app = routes::app(&config, catalog)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, public_dir = %config.public_dir.display(), "spinsite listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
