//! Records stored by the actors, plus their create and update payloads.
//!
//! Each record implements [`ActorEntity`](actor_framework::ActorEntity) in its
//! actor module. JSON shapes are camelCase.

pub mod customer;
pub mod item;
pub mod order;

pub use customer::*;
pub use item::*;
pub use order::*;
