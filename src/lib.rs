//! # web-pos
//!
//! Point-of-sale backend: customer and item records, and order placement that
//! checks stock, prices the order, spreads the discount over its lines,
//! checks the cash tendered and deducts inventory.
//!
//! ## Module Tour
//!
//! - [`customer_actor`], [`item_actor`], [`order_actor`]: one
//!   [`ResourceActor`](actor_framework::ResourceActor) per record type; the
//!   order workflow runs in the order entity's `on_create` hook
//! - [`clients`]: typed clients over the actors' channels
//! - [`lifecycle`]: [`PosSystem`](lifecycle::PosSystem) startup and shutdown, tracing setup
//! - [`api`]: axum router under `/api/v1`
//! - [`model`], [`validation`], [`config`]
//!
//! ## Concurrency Model
//!
//! Each actor runs in its own Tokio task and handles one request at a time,
//! so an item's stock check and deduction can't interleave with another
//! reservation of the same item. Orders are placed one after another by the
//! order actor.

pub mod api;
pub mod clients;
pub mod config;
pub mod customer_actor;
pub mod item_actor;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod validation;
