//! navi-server: Main binary for the family venue directory service.
//!
//! This binary wires together all crates and starts the HTTP server.

use navi_api::{create_router, AppState};
use navi_directory::Directory;
use navi_sheet::{HttpSheetSource, SheetConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default port for the server.
const DEFAULT_PORT: u16 = 3000;

/// Default host for the server.
const DEFAULT_HOST: &str = "0.0.0.0";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "navi_server=info,navi_api=info,navi_directory=info,navi_sheet=info,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SheetConfig::from_env()?;
    let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    tracing::info!(
        "Starting navi-server on {}:{} (sheet: {}, revalidate: {}s)",
        host,
        port,
        config.source_url,
        config.revalidate.as_secs()
    );

    let source = HttpSheetSource::new(config.source_url);
    let directory = Directory::new(source, config.revalidate);
    let state = Arc::new(AppState::new(directory));

    let app = create_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET /health            - Health check");
    tracing::info!("  GET /v1/venues         - List venues (n=yes, p=free|paid, a=<area>)");
    tracing::info!("  GET /v1/venues/:slug   - Venue detail");
    tracing::info!("  GET /v1/areas          - Areas with venue counts");

    axum::serve(listener, app).await?;

    Ok(())
}
