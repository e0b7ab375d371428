//! # Item Actor
//!
//! Owns the item catalogue and the stock on hand of every item.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Item`]
//! - [`error`] - [`ItemError`]
//! - [`actions`] - [`ItemAction`] / [`ItemActionResult`] for stock management
//!
//! Stock changes go through actions so that the check and the deduction of
//! `ReserveStock` happen inside one message:
//!
//! ```rust
//! use web_pos::item_actor;
//! use web_pos::model::ItemCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = item_actor::new(16);
//!     tokio::spawn(actor.run(()));
//!
//!     let code = client
//!         .create_item(ItemCreate { description: "Milk 1L".into(), price: 420.0, qty: 12 })
//!         .await?;
//!     assert_eq!(client.reserve_stock(code.clone(), 5).await?, 7);
//!     assert_eq!(client.check_stock(code).await?, 7);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ItemClient;
use crate::model::Item;
use actor_framework::ResourceActor;
use uuid::Uuid;

/// Creates a new Item actor and its client. Codes are `ITEM-<uuid v4>`.
pub fn new(buffer_size: usize) -> (ResourceActor<Item>, ItemClient) {
    let (actor, generic_client) =
        ResourceActor::new(buffer_size, || format!("ITEM-{}", Uuid::new_v4()));
    (actor, ItemClient::new(generic_client))
}
