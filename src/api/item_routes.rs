//! `/items` handlers (JSON).

use super::{ApiError, StatusBody};
use crate::lifecycle::PosClients;
use crate::model::{Item, ItemCreate, ItemUpdate};
use crate::validation;
use actor_framework::ActorClient;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use tracing::info;

/// Body of `POST /items` and `PATCH /items/:code`.
///
/// `qty` is signed on the wire so a negative quantity gets its own message.
#[derive(Debug, Deserialize)]
pub struct ItemRequest {
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub qty: i64,
}

impl ItemRequest {
    fn check(self) -> Result<(String, f64, u32), ApiError> {
        validation::validate_description(&self.description)?;
        validation::validate_price(self.price)?;
        let qty = validation::validate_qty(self.qty)?;
        Ok((self.description, self.price, qty))
    }
}

pub async fn create_item(
    State(clients): State<PosClients>,
    payload: Result<Json<ItemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StatusBody>), ApiError> {
    let Json(request) = payload?;
    let (description, price, qty) = request.check()?;

    let code = clients
        .items
        .create_item(ItemCreate {
            description,
            price,
            qty,
        })
        .await?;

    info!(item_code = %code, "Item created");
    let mut body = StatusBody::success("Item saved successfully");
    body.code = Some(code);
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn update_item(
    State(clients): State<PosClients>,
    Path(code): Path<String>,
    payload: Result<Json<ItemRequest>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Json(request) = payload?;
    let (description, price, qty) = request.check()?;

    clients
        .items
        .update_item(
            code.clone(),
            ItemUpdate {
                description,
                price,
                qty,
            },
        )
        .await?;

    info!(item_code = %code, "Item updated");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_item(
    State(clients): State<PosClients>,
    Path(code): Path<String>,
) -> Result<StatusCode, ApiError> {
    clients.items.delete(code.clone()).await?;
    info!(item_code = %code, "Item deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn get_item(
    State(clients): State<PosClients>,
    Path(code): Path<String>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(clients.items.get_item(code).await?))
}

pub async fn list_items(State(clients): State<PosClients>) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(clients.items.list().await?))
}
