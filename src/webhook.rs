//! Dialogflow webhook handler - parses the recognized intent and routes it
//! to the matching Shopify fetch.
//!
//! Every handled intent returns `200 OK` with a `fulfillmentText` body,
//! including fetch failures. Only a request body missing the intent path
//! gets a `400`.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde_json::{Value, json};
use tracing::{error, info};

use crate::errors::WebhookError;
use crate::fulfillment::{WebhookResponse, format_orders, format_products};
use crate::shopify::ShopifyClient;

/// Shared state handed to the handler; built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub shopify: ShopifyClient,
}

/// Build the webhook router.
pub fn router(state: AppState) -> Router {
    Router::new().route("/", post(handle_webhook)).with_state(state)
}

/// Extract the intent name from a Dialogflow fulfillment request.
///
/// Reads `queryResult.intent.displayName`; a missing or non-string value
/// at any step of the path is a parse error rather than a panic.
pub fn intent_name(body: &Value) -> Result<&str, WebhookError> {
    body.get("queryResult")
        .and_then(|q| q.get("intent"))
        .and_then(|i| i.get("displayName"))
        .and_then(|n| n.as_str())
        .ok_or_else(|| {
            WebhookError::ParseError("missing queryResult.intent.displayName".to_string())
        })
}

/// Route a recognized intent to its action and produce the fulfillment text.
pub async fn dispatch(state: &AppState, intent: &str) -> String {
    match intent {
        "GetProducts" => match state.shopify.get_products(&[]).await {
            Ok(products) => format_products(&products),
            Err(_) => "Wystąpił problem z pobraniem listy produktów.".to_string(),
        },
        "GetOrders" => match state.shopify.get_orders(&[]).await {
            Ok(orders) => format_orders(&orders),
            Err(_) => "Wystąpił problem z pobraniem listy zamówień.".to_string(),
        },
        _ => "Przepraszam, nie rozumiem. Spróbuj ponownie.".to_string(),
    }
}

/// `POST /` entry point.
pub async fn handle_webhook(State(state): State<AppState>, Json(body): Json<Value>) -> Response {
    let intent = match intent_name(&body) {
        Ok(intent) => intent,
        Err(e) => {
            error!("Rejecting webhook request: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": e.to_string() })),
            )
                .into_response();
        }
    };

    info!(intent = %intent, "Handling intent");
    let text = dispatch(&state, intent).await;

    (StatusCode::OK, Json(WebhookResponse::new(text))).into_response()
}
