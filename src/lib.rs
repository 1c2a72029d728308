//! Shopbot - a Dialogflow fulfillment webhook backed by the Shopify Admin API.
//!
//! The service accepts Dialogflow fulfillment POSTs, dispatches on the
//! recognized intent name and answers with a plain-text reply:
//! - `GetProducts` lists the store's products
//! - `GetOrders` lists the store's orders
//! - anything else gets a fallback sentence
//!
//! # Example
//!
//! ```no_run
//! use shopbot::config::AppConfig;
//! use shopbot::shopify::ShopifyClient;
//! use shopbot::webhook::{self, AppState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     shopbot::setup_logging();
//!
//!     let config = AppConfig {
//!         shopify_access_token: "shpat_dummy".to_string(),
//!         shopify_store_url: "https://example.myshopify.com".to_string(),
//!         port: 8080,
//!     };
//!
//!     let state = AppState {
//!         shopify: ShopifyClient::new(&config)?,
//!     };
//!     let app = webhook::router(state);
//!
//!     let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod errors;
pub mod fulfillment;
pub mod shopify;
pub mod webhook;

/// Configure structured logging with JSON format.
///
/// Sets up tracing-subscriber with a JSON formatter and an env-filter so
/// verbosity can be tuned with `RUST_LOG`. Call once at process start.
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
