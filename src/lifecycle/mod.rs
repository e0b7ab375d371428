//! # System Lifecycle
//!
//! Creates the actors, wires the order actor's dependencies through context
//! injection, and shuts everything down.
//!
//! ## Startup
//!
//! Actors are created first without dependencies, then started with their
//! context: `order_actor.run((customer_client, item_client))`. The customer
//! and item actors need nothing (`Context = ()`).
//!
//! ## Graceful Shutdown
//!
//! 1. every client is dropped (the router's clones go when the server stops)
//! 2. the order actor sees its channel close, finishes and drops its context clients
//! 3. the customer and item actors see their channels close and finish
//! 4. [`PosSystem::shutdown`] has awaited each task
//!
//! The dependency graph is acyclic, so channel closure alone is enough.

pub mod pos_system;
pub mod tracing;

pub use self::pos_system::*;
pub use self::tracing::setup_tracing;
