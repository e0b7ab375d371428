//! # HTTP API
//!
//! axum router under `/api/v1`. Customers are written with multipart forms
//! (the profile picture is a file part); items and orders use JSON.
//! Every failure is answered with `{"status":"error","message":...}`.

pub mod customer_routes;
pub mod error;
pub mod item_routes;
pub mod order_routes;

pub use error::ApiError;

use crate::lifecycle::PosClients;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;
use serde::Serialize;
use tower_http::trace::TraceLayer;

/// `{status, message}` acknowledgement, plus the generated id on creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusBody {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl StatusBody {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: "success",
            message: message.into(),
            id: None,
            code: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
            id: None,
            code: None,
        }
    }
}

async fn health() -> StatusCode {
    StatusCode::OK
}

/// Builds the application router.
///
/// `max_upload_bytes` caps every request body, which bounds profile picture uploads.
pub fn router(clients: PosClients, max_upload_bytes: usize) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route("/customers", post(customer_routes::create_customer))
        .route("/customers/allcustomers", get(customer_routes::list_customers))
        .route(
            "/customers/:id",
            get(customer_routes::get_customer)
                .patch(customer_routes::update_customer)
                .delete(customer_routes::delete_customer),
        )
        .route("/items", post(item_routes::create_item))
        .route("/items/allitems", get(item_routes::list_items))
        .route(
            "/items/:code",
            get(item_routes::get_item)
                .patch(item_routes::update_item)
                .delete(item_routes::delete_item),
        )
        .route("/orders", post(order_routes::place_order))
        .route("/orders/allorders", get(order_routes::list_orders))
        .route("/orders/:id", get(order_routes::get_order));

    Router::new()
        .nest("/api/v1", api)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(clients)
}
