//! Error types for the Customer actor.

use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CustomerError {
    /// The requested customer was not found.
    #[error("Customer not found: {0}")]
    NotFound(String),

    /// A field failed one of the rules in [`crate::validation`].
    #[error("{0}")]
    Validation(String),

    /// The customer has placed orders and cannot be removed.
    #[error("Customer {id} has {count} order(s) and cannot be deleted")]
    HasOrders { id: String, count: usize },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
