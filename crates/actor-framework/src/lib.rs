//! # Actor Framework
//!
//! Building blocks for the point-of-sale backend's in-memory stores. Every
//! resource (customers, items, orders) is owned by one [`ResourceActor`] running
//! in its own Tokio task; everything else talks to it through a cloneable
//! [`ResourceClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the record, its payloads, its hooks and its error type.
//! 2. **Runtime** ([`ResourceActor`]) - the store and the sequential message loop.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - typed request/response calls.
//!
//! Requests to one actor are handled one at a time, so a hook that checks and
//! then mutates (e.g. "is there enough stock? then deduct it") cannot
//! interleave with another request to the same actor. Different actors run
//! in parallel.
//!
//! ## Context Injection
//!
//! Dependencies are handed to `run()` rather than to `new()`. Create every
//! actor first, then start each one with the clients it needs:
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Item { id: String, qty: u32 }
//! #[derive(Debug)] struct ItemCreate { qty: u32 }
//! #[derive(Debug)] struct ItemUpdate;
//! #[derive(Debug)] enum ItemAction { Reserve(u32) }
//! #[derive(Debug, thiserror::Error)] #[error("not enough stock")] struct ItemError;
//!
//! #[async_trait]
//! impl ActorEntity for Item {
//!     type Id = String; type Create = ItemCreate; type Update = ItemUpdate;
//!     type Action = ItemAction; type ActionResult = u32; type Context = (); type Error = ItemError;
//!     fn from_create_params(id: String, p: ItemCreate) -> Result<Self, ItemError> { Ok(Self { id, qty: p.qty }) }
//!     async fn on_update(&mut self, _: ItemUpdate, _: &()) -> Result<(), ItemError> { Ok(()) }
//!     async fn handle_action(&mut self, a: ItemAction, _: &()) -> Result<u32, ItemError> {
//!         let ItemAction::Reserve(n) = a;
//!         self.qty = self.qty.checked_sub(n).ok_or(ItemError)?;
//!         Ok(self.qty)
//!     }
//! }
//!
//! #[derive(Clone, Debug)] struct Sale { id: String }
//! #[derive(Debug)] struct SaleCreate { item: String, qty: u32 }
//! #[derive(Debug)] struct SaleUpdate;
//! #[derive(Debug)] enum SaleAction {}
//! #[derive(Debug, thiserror::Error)] #[error("sale failed")] struct SaleError;
//!
//! #[async_trait]
//! impl ActorEntity for Sale {
//!     type Id = String; type Create = SaleCreate; type Update = SaleUpdate;
//!     type Action = SaleAction; type ActionResult = ();
//!     type Context = ResourceClient<Item>;
//!     type Error = SaleError;
//!
//!     fn from_create_params(id: String, _: SaleCreate) -> Result<Self, SaleError> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: SaleUpdate, _: &Self::Context) -> Result<(), SaleError> { Ok(()) }
//!     async fn handle_action(&mut self, a: SaleAction, _: &Self::Context) -> Result<(), SaleError> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (item_actor, items) = ResourceActor::<Item>::new(8, || "ITEM-1".to_string());
//!     let (sale_actor, sales) = ResourceActor::<Sale>::new(8, || "SALE-1".to_string());
//!
//!     tokio::spawn(item_actor.run(()));
//!     tokio::spawn(sale_actor.run(items.clone()));
//!
//!     let item = items.create(ItemCreate { qty: 5 }).await.unwrap();
//!     assert_eq!(items.perform_action(item, ItemAction::Reserve(2)).await.unwrap(), 3);
//!     let _ = sales.create(SaleCreate { item: "ITEM-1".into(), qty: 1 }).await;
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a client's requests from scripted expectations,
//! so an actor's hooks can be tested without running the actors in its context.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::{IdGenerator, ResourceActor};
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
