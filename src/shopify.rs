//! Shopify Admin API client.
//!
//! Wraps the outbound GET calls to the versioned Admin REST API. Any
//! network-level failure or non-2xx status is logged here and surfaced
//! as an error; callers map it to a user-facing sentence.

use crate::config::AppConfig;
use crate::errors::WebhookError;
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

const ADMIN_API_VERSION: &str = "2023-01";

/// Product attributes consumed from `products.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
}

/// Order attributes consumed from `orders.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub id: u64,
    pub email: String,
    pub total_price: String,
    pub currency: String,
}

#[derive(Debug, Deserialize)]
struct ProductsResponse {
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
struct OrdersResponse {
    orders: Vec<Order>,
}

#[derive(Debug, Clone)]
pub struct ShopifyClient {
    http: Client,
    access_token: String,
    store_url: String,
}

impl ShopifyClient {
    pub fn new(config: &AppConfig) -> Result<Self, WebhookError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http,
            access_token: config.shopify_access_token.clone(),
            store_url: config.shopify_store_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the product list from `products.json`.
    pub async fn get_products(&self, params: &[(&str, &str)]) -> Result<Vec<Product>, WebhookError> {
        let response: ProductsResponse = self.get("products.json", params).await?;
        Ok(response.products)
    }

    /// Fetch the order list from `orders.json`.
    pub async fn get_orders(&self, params: &[(&str, &str)]) -> Result<Vec<Order>, WebhookError> {
        let response: OrdersResponse = self.get("orders.json", params).await?;
        Ok(response.orders)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, WebhookError> {
        let url = format!(
            "{}/admin/api/{}/{}",
            self.store_url, ADMIN_API_VERSION, endpoint
        );
        debug!(url = %url, "Fetching data from Shopify");

        let mut request = self
            .http
            .get(&url)
            .header("X-Shopify-Access-Token", &self.access_token)
            .header("Content-Type", "application/json");

        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await.map_err(|e| {
            error!("Shopify fetch failed: {}", e);
            WebhookError::from(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), endpoint = %endpoint, "Shopify returned an error status");
            return Err(WebhookError::StatusError(status.as_u16()));
        }

        response.json::<T>().await.map_err(|e| {
            error!("Failed to decode Shopify response: {}", e);
            WebhookError::from(e)
        })
    }
}
