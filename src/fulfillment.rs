//! Formatting of Shopify data into fulfillment text for Dialogflow.
//!
//! All user-facing sentences are hardcoded in Polish; there is no
//! localization layer.

use crate::shopify::{Order, Product};
use serde::Serialize;

/// Body returned to Dialogflow on every handled intent.
#[derive(Debug, Serialize)]
pub struct WebhookResponse {
    #[serde(rename = "fulfillmentText")]
    pub fulfillment_text: String,
}

impl WebhookResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            fulfillment_text: text.into(),
        }
    }
}

/// Format a product list as one line per product.
///
/// An empty list gets its own sentence, distinct from the fetch-failure
/// message the handler uses.
pub fn format_products(products: &[Product]) -> String {
    if products.is_empty() {
        return "Nie znaleziono żadnych produktów.".to_string();
    }

    let lines: Vec<String> = products
        .iter()
        .map(|p| format!("- {} (ID: {})", p.title, p.id))
        .collect();

    format!("Oto lista produktów:\n{}", lines.join("\n"))
}

/// Format an order list as one line per order.
pub fn format_orders(orders: &[Order]) -> String {
    if orders.is_empty() {
        return "Nie znaleziono żadnych zamówień.".to_string();
    }

    let lines: Vec<String> = orders
        .iter()
        .map(|o| {
            format!(
                "- Zamówienie ID: {}, Email: {}, Cena: {} {}",
                o.id, o.email, o.total_price, o.currency
            )
        })
        .collect();

    format!("Oto lista zamówień:\n{}", lines.join("\n"))
}
