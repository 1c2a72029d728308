use anyhow::Context;
use tracing::info;

use shopbot::config::AppConfig;
use shopbot::shopify::ShopifyClient;
use shopbot::webhook::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shopbot::setup_logging();

    let config = AppConfig::from_env().map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    let state = AppState {
        shopify: ShopifyClient::new(&config).context("Failed to build Shopify client")?,
    };
    let app = webhook::router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    info!(port = config.port, "Webhook server listening");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
