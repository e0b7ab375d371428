//! # Order Actor
//!
//! Stores placed orders and runs the placement workflow.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`];
//!   the workflow lives in its `on_create` hook
//! - [`pricing`] - subtotal, discount, total, balance and per-line discount allocation
//! - [`error`] - [`OrderError`]
//!
//! Orders are immutable once placed: `Update` and `Action` are uninhabited.

pub mod entity;
pub mod error;
pub mod pricing;

pub use entity::OrderContext;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;
use uuid::Uuid;

/// Creates a new Order actor and its client. Ids are `ORDER-<uuid v4>`.
///
/// Start it with `actor.run((customer_client, item_client))`.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) =
        ResourceActor::new(buffer_size, || format!("ORDER-{}", Uuid::new_v4()));
    (actor, OrderClient::new(generic_client))
}
