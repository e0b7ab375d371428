//! # Generic Actor Server
//!
//! `ResourceActor<T>` owns the in-memory store for one entity type and
//! processes requests one at a time, so no locks guard the store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Boxed id generator handed to [`ResourceActor::new`].
pub type IdGenerator<Id> = Box<dyn Fn() -> Id + Send + Sync>;

/// The server half of an actor: the store, the receiver and the id generator.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor and a cloneable client.
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Till { id: String, float: f64 }
/// #[derive(Debug)] struct TillCreate { float: f64 }
/// #[derive(Debug)] struct TillUpdate { float: f64 }
/// #[derive(Debug)] enum TillAction {}
/// #[derive(Debug, thiserror::Error)] #[error("till error")] struct TillError;
///
/// #[async_trait]
/// impl ActorEntity for Till {
///     type Id = String;
///     type Create = TillCreate;
///     type Update = TillUpdate;
///     type Action = TillAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TillError;
///
///     fn from_create_params(id: String, p: TillCreate) -> Result<Self, TillError> {
///         Ok(Self { id, float: p.float })
///     }
///     async fn on_update(&mut self, u: TillUpdate, _: &()) -> Result<(), TillError> {
///         self.float = u.float;
///         Ok(())
///     }
///     async fn handle_action(&mut self, a: TillAction, _: &()) -> Result<(), TillError> {
///         match a {}
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Till>::new(8, || "TILL-1".to_string());
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(TillCreate { float: 50.0 }).await.unwrap();
///     assert_eq!(client.get(id).await.unwrap().unwrap().float, 50.0);
/// }
/// ```
///
/// # Operation semantics
///
/// * **Create**: generate an id, `from_create_params`, `on_create`, then store.
///   A hook failure stores nothing.
/// * **Get** / **List**: return clones; `List` keeps insertion order.
/// * **Update** / **Action**: run the hook on a working copy and store it only on success,
///   so a failed hook never leaves a half-applied change behind.
/// * **Delete**: `on_delete` may veto; otherwise the entity is removed.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    insertion_order: Vec<T::Id>,
    next_id: IdGenerator<T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - capacity of the request channel; callers wait when it is full.
    /// * `next_id` - produces the id of each created entity.
    pub fn new(
        buffer_size: usize,
        next_id: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            insertion_order: Vec::new(),
            next_id: Box::new(next_id),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id)();

                    let created = match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => match item.on_create(&context).await {
                            Ok(()) => Ok(item),
                            Err(e) => {
                                warn!(entity_type, %id, error = %e, "on_create failed");
                                Err(e)
                            }
                        },
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create rejected");
                            Err(e)
                        }
                    };

                    match created {
                        Ok(item) => {
                            self.store.insert(id.clone(), item);
                            self.insertion_order.push(id.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .insertion_order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut working = current.clone();
                    match working.on_update(update, &context).await {
                        Ok(()) => {
                            self.store.insert(id.clone(), working.clone());
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(working));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    self.insertion_order.retain(|existing| existing != &id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut working = current.clone();
                    match working.handle_action(action, &context).await {
                        Ok(result) => {
                            self.store.insert(id.clone(), working);
                            info!(entity_type, %id, "Action ok");
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Shelf {
        id: String,
        label: String,
        slots: u32,
    }

    #[derive(Debug)]
    struct ShelfCreate {
        label: String,
        slots: u32,
    }

    #[derive(Debug)]
    struct ShelfUpdate {
        label: String,
    }

    #[derive(Debug)]
    enum ShelfAction {
        Fill(u32),
    }

    #[derive(Debug, thiserror::Error)]
    enum ShelfError {
        #[error("label must not be empty")]
        EmptyLabel,
        #[error("only {0} slots free")]
        Full(u32),
        #[error("shelf still holds stock")]
        NotEmpty,
    }

    #[async_trait]
    impl ActorEntity for Shelf {
        type Id = String;
        type Create = ShelfCreate;
        type Update = ShelfUpdate;
        type Action = ShelfAction;
        type ActionResult = u32;
        type Context = ();
        type Error = ShelfError;

        fn from_create_params(id: String, params: ShelfCreate) -> Result<Self, ShelfError> {
            if params.label.is_empty() {
                return Err(ShelfError::EmptyLabel);
            }
            Ok(Self {
                id,
                label: params.label,
                slots: params.slots,
            })
        }

        async fn on_update(&mut self, update: ShelfUpdate, _: &()) -> Result<(), ShelfError> {
            // Mutate first, then fail: the stored copy must stay untouched.
            let empty = update.label.is_empty();
            self.label = update.label;
            if empty {
                return Err(ShelfError::EmptyLabel);
            }
            Ok(())
        }

        async fn on_delete(&self, _: &()) -> Result<(), ShelfError> {
            if self.slots == 0 {
                return Err(ShelfError::NotEmpty);
            }
            Ok(())
        }

        async fn handle_action(&mut self, action: ShelfAction, _: &()) -> Result<u32, ShelfError> {
            match action {
                ShelfAction::Fill(n) if n > self.slots => Err(ShelfError::Full(self.slots)),
                ShelfAction::Fill(n) => {
                    self.slots -= n;
                    Ok(self.slots)
                }
            }
        }
    }

    fn spawn_shelves() -> ResourceClient<Shelf> {
        let counter = Arc::new(AtomicU32::new(1));
        let (actor, client) = ResourceActor::<Shelf>::new(8, move || {
            format!("SHELF-{}", counter.fetch_add(1, Ordering::SeqCst))
        });
        tokio::spawn(actor.run(()));
        client
    }

    fn shelf(label: &str, slots: u32) -> ShelfCreate {
        ShelfCreate {
            label: label.to_string(),
            slots,
        }
    }

    #[tokio::test]
    async fn test_create_uses_generated_ids_and_list_keeps_order() {
        let client = spawn_shelves();
        let a = client.create(shelf("dairy", 4)).await.unwrap();
        let b = client.create(shelf("bakery", 2)).await.unwrap();
        assert_eq!(a, "SHELF-1");
        assert_eq!(b, "SHELF-2");

        let labels: Vec<String> = client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.label)
            .collect();
        assert_eq!(labels, vec!["dairy", "bakery"]);
    }

    #[tokio::test]
    async fn test_rejected_create_stores_nothing() {
        let client = spawn_shelves();
        let err = client.create(shelf("", 1)).await.unwrap_err();
        assert!(matches!(
            err.into_entity_error::<ShelfError>(),
            Ok(ShelfError::EmptyLabel)
        ));
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failed_update_keeps_stored_entity() {
        let client = spawn_shelves();
        let id = client.create(shelf("dairy", 4)).await.unwrap();

        let result = client
            .update(id.clone(), ShelfUpdate { label: String::new() })
            .await;
        assert!(result.is_err());
        assert_eq!(client.get(id.clone()).await.unwrap().unwrap().label, "dairy");

        let updated = client
            .update(id, ShelfUpdate { label: "frozen".into() })
            .await
            .unwrap();
        assert_eq!(updated.label, "frozen");
    }

    #[tokio::test]
    async fn test_action_and_delete_veto() {
        let client = spawn_shelves();
        let id = client.create(shelf("dairy", 3)).await.unwrap();

        assert_eq!(client.perform_action(id.clone(), ShelfAction::Fill(2)).await.unwrap(), 1);
        assert!(client.perform_action(id.clone(), ShelfAction::Fill(5)).await.is_err());
        assert_eq!(client.perform_action(id.clone(), ShelfAction::Fill(1)).await.unwrap(), 0);

        // Full shelves refuse deletion.
        assert!(client.delete(id.clone()).await.is_err());
        assert!(client.get(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_missing_ids_report_not_found() {
        let client = spawn_shelves();
        let missing = "SHELF-404".to_string();

        assert!(client.get(missing.clone()).await.unwrap().is_none());
        assert!(matches!(
            client.delete(missing.clone()).await,
            Err(FrameworkError::NotFound(id)) if id == "SHELF-404"
        ));
        assert!(matches!(
            client.perform_action(missing, ShelfAction::Fill(1)).await,
            Err(FrameworkError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_from_list() {
        let client = spawn_shelves();
        let a = client.create(shelf("dairy", 1)).await.unwrap();
        let b = client.create(shelf("bakery", 1)).await.unwrap();

        client.delete(a).await.unwrap();
        let remaining = client.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, b);
    }
}
