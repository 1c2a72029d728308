use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub shopify_access_token: String,
    pub shopify_store_url: String,
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            shopify_access_token: env::var("SHOPIFY_ACCESS_TOKEN")
                .map_err(|e| format!("SHOPIFY_ACCESS_TOKEN: {}", e))?,
            shopify_store_url: env::var("SHOPIFY_STORE_URL")
                .map_err(|e| format!("SHOPIFY_STORE_URL: {}", e))?,
            port: match env::var("PORT") {
                Ok(raw) => raw.parse().map_err(|e| format!("PORT: {}", e))?,
                Err(_) => 8080,
            },
        })
    }
}
