//! Error types for the Item actor.

use thiserror::Error;

/// Errors that can occur during item operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ItemError {
    /// The requested item was not found.
    #[error("Item not found: {0}")]
    NotFound(String),

    /// The requested quantity exceeds the stock on hand.
    #[error("Insufficient stock for item {code}: requested {requested}, available {available}")]
    InsufficientStock {
        code: String,
        requested: u32,
        available: u32,
    },

    /// A field failed one of the rules in [`crate::validation`].
    #[error("{0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
