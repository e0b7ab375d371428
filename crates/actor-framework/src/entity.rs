//! # ActorEntity Trait
//!
//! The contract a record type (customer, item, order, ...) implements to be
//! stored and served by a [`ResourceActor`](crate::ResourceActor).
//!
//! Associated types pin every payload to its entity: an `Item` actor only
//! accepts `ItemCreate` payloads, and a customer id can't be sent to it.
//! Lifecycle hooks receive the actor's injected `Context`, which is how an
//! entity reaches other actors (an order reads customers and reserves item
//! stock from its `on_create` hook).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored record must implement to be managed by a `ResourceActor`.
///
/// # Provided Methods
/// [`ActorEntity::on_create`] and [`ActorEntity::on_delete`] default to `Ok(())`.
/// Override them to validate against other actors or to veto a deletion.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity. Ids are produced by the
    /// generator handed to [`ResourceActor::new`](crate::ResourceActor::new).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Entity-specific operations beyond CRUD (e.g. `ReserveStock`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor at `run()` time.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// One error enum per entity. Clients recover it from
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError)
    /// with [`FrameworkError::into_entity_error`](crate::FrameworkError::into_entity_error).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the entity from its freshly generated id and the create payload.
    /// Called synchronously before `on_create`; reject malformed payloads here.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction and before the entity is stored.
    /// An error aborts the create and nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply an update to the stored entity.
    ///
    /// The actor hands the hook a working copy; the stored record is only
    /// replaced when the hook returns `Ok`.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called before the entity is removed. An error keeps it in the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a custom entity-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
