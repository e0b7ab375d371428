//! # Customer Actor
//!
//! Customer records with field validation, plus the `AttachOrder` action the
//! order workflow uses to link a placed order to its customer.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Customer`]
//! - [`error`] - [`CustomerError`]
//! - [`actions`] - [`CustomerAction`] / [`CustomerActionResult`]
//!
//! A customer with attached orders can't be deleted (`HasOrders`).

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CustomerClient;
use crate::model::Customer;
use actor_framework::ResourceActor;
use uuid::Uuid;

/// Creates a new Customer actor and its client. Ids are `CUSTOMER-<uuid v4>`.
pub fn new(buffer_size: usize) -> (ResourceActor<Customer>, CustomerClient) {
    let (actor, generic_client) =
        ResourceActor::new(buffer_size, || format!("CUSTOMER-{}", Uuid::new_v4()));
    (actor, CustomerClient::new(generic_client))
}
