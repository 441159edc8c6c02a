// Bare static variant: serves the embedded assets and the page document
// with none of the API routes or cross-cutting policies. Useful for
// previewing the page without the full server.

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use site_core::server::static_files::{serve_asset, serve_contact_page};
use site_core::Config;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let app = Router::new()
        .route("/", get(serve_contact_page))
        .route("/contact", get(serve_contact_page))
        .fallback(serve_asset);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Static site running on http://localhost:{}", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
