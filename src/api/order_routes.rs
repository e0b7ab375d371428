//! `/orders` handlers (JSON).

use super::ApiError;
use crate::lifecycle::PosClients;
use crate::model::{Order, OrderCreate};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

pub async fn place_order(
    State(clients): State<PosClients>,
    payload: Result<Json<OrderCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let Json(request) = payload?;
    info!(customer_id = %request.customer_id, lines = request.order_details.len(), "Received order placement request");

    let order = clients.orders.place_order(request).await?;

    info!(order_id = %order.order_id, total = order.total, "Order placed successfully");
    Ok((StatusCode::CREATED, Json(order)))
}

pub async fn get_order(
    State(clients): State<PosClients>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    Ok(Json(clients.orders.get_order(id).await?))
}

pub async fn list_orders(State(clients): State<PosClients>) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(clients.orders.list_orders().await?))
}
