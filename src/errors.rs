use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("Failed to parse webhook request: {0}")]
    ParseError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Shopify API returned status {0}")]
    StatusError(u16),
}

impl From<reqwest::Error> for WebhookError {
    fn from(error: reqwest::Error) -> Self {
        WebhookError::HttpError(error.to_string())
    }
}
