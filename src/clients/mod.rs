//! Typed wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client maps [`FrameworkError`](actor_framework::FrameworkError) into its
//! actor's error enum: `NotFound` becomes the actor's own `NotFound`, a boxed
//! entity error is downcast back to its type, anything else is an
//! `ActorCommunicationError`.

pub mod customer_client;
pub mod item_client;
pub mod order_client;

pub use customer_client::*;
pub use item_client::*;
pub use order_client::*;
