//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur while placing or reading orders.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order names a customer that does not exist.
    #[error("Customer not found with ID: {0}")]
    CustomerNotFound(String),

    /// The order names an item that does not exist.
    #[error("Item not found with code: {0}")]
    ItemNotFound(String),

    /// The items on hand don't cover the requested quantity.
    #[error("Insufficient quantity for item {code}: requested {requested}, available {available}")]
    InsufficientStock {
        code: String,
        requested: u32,
        available: u32,
    },

    /// Cash tendered is below the order total.
    #[error("Insufficient cash for the order: total {total:.2}, cash {cash:.2}")]
    InsufficientCash { total: f64, cash: f64 },

    /// The request itself is malformed (no lines, zero quantity, bad discount or cash).
    #[error("Invalid order: {0}")]
    InvalidOrder(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
