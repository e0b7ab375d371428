use serde::Serialize;

/// A sellable item and its stock on hand.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub code: String,
    pub description: String,
    pub price: f64,
    pub qty: u32,
}

/// Payload for adding an item to the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemCreate {
    pub description: String,
    pub price: f64,
    pub qty: u32,
}

/// Replaces description, price and stock of an item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemUpdate {
    pub description: String,
    pub price: f64,
    pub qty: u32,
}

impl Item {
    pub fn new(code: impl Into<String>, params: ItemCreate) -> Self {
        Self {
            code: code.into(),
            description: params.description,
            price: params.price,
            qty: params.qty,
        }
    }
}
