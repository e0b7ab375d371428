use serde::{Deserialize, Serialize};

/// A placed order.
///
/// Money is `f64` and carried unrounded:
/// - `subtotal` is the sum of `quantity × unit_price` over all lines
/// - `discount_amount = subtotal × discount / 100`
/// - `total = subtotal − discount_amount`
/// - `balance = cash − total`, never negative for a stored order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub customer_id: String,
    pub order_details: Vec<OrderDetail>,
    pub subtotal: f64,
    /// Discount percent as requested (0 to 100).
    pub discount: f64,
    pub discount_amount: f64,
    pub total: f64,
    pub cash: f64,
    pub balance: f64,
}

/// One line of an order.
///
/// `description` and `unit_price` are snapshots taken when the order was
/// placed. `total_price` is the line's share of the order total after the
/// discount has been spread across lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub item_code: String,
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub total_price: f64,
}

/// Payload for placing an order; also the `POST /orders` body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreate {
    pub customer_id: String,
    pub order_details: Vec<OrderLine>,
    #[serde(default)]
    pub discount: f64,
    pub cash: f64,
}

/// A requested (item, quantity) pair.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub item_code: String,
    pub quantity: u32,
}
