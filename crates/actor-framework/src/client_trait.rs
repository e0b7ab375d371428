//! # ActorClient Trait
//!
//! Shared `get` / `list` / `delete` for the typed clients wrapping a `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the read and delete calls.
///
/// Implementors only say where the inner client lives and how a
/// [`FrameworkError`] becomes their own error type.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Register { id: String }
/// #[derive(Debug)] struct RegisterCreate;
/// #[derive(Debug)] struct RegisterUpdate;
/// #[derive(Debug)] enum RegisterAction {}
///
/// #[derive(Debug, thiserror::Error)]
/// enum RegisterError {
///     #[error("register {0} not found")]
///     NotFound(String),
///     #[error("actor communication error: {0}")]
///     ActorCommunicationError(String),
/// }
///
/// #[async_trait]
/// impl ActorEntity for Register {
///     type Id = String;
///     type Create = RegisterCreate;
///     type Update = RegisterUpdate;
///     type Action = RegisterAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = RegisterError;
///
///     fn from_create_params(id: String, _: RegisterCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: RegisterUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, a: RegisterAction, _: &()) -> Result<(), Self::Error> { match a {} }
/// }
///
/// struct RegisterClient {
///     inner: ResourceClient<Register>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Register> for RegisterClient {
///     type Error = RegisterError;
///
///     fn inner(&self) -> &ResourceClient<Register> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         match e {
///             FrameworkError::NotFound(id) => RegisterError::NotFound(id),
///             other => RegisterError::ActorCommunicationError(other.to_string()),
///         }
///     }
/// }
///
/// async fn usage(client: RegisterClient) {
///     let _ = client.list().await;
///     let _ = client.delete("REG-1".to_string()).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Every stored entity, oldest first.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
