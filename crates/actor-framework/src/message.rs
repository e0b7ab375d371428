//! # Generic Messages
//!
//! Request envelopes exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A request to a [`ResourceActor`](crate::ResourceActor).
///
/// The variants are the CRUD verbs every store supports (`Create`, `Get`,
/// `List`, `Update`, `Delete`) plus `Action` for entity-specific operations.
/// Payload types come from the entity's associated types, so a request is
/// always well-typed for the actor that receives it.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// All stored entities, in insertion order.
    List { respond_to: Response<Vec<T>> },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
