//! # Generic Messages
//!
//! The request enum exchanged between [`ResourceClient`](crate::framework::ResourceClient)
//! and [`ResourceActor`](crate::framework::ResourceActor).

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot reply channel carried by every request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to a resource actor.
///
/// The variants map onto the store operations of a single collection:
///
/// - **Create**: assigns an id, builds the entity from [`ActorEntity::Create`], appends it.
/// - **List**: insertion-ordered snapshot of the whole collection.
/// - **Get**: lookup by id; absence is `None`, not an error.
/// - **Update**: applies [`ActorEntity::Update`] in place; absence is `None`.
/// - **Delete**: removes by id and reports whether anything was removed.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<Option<T>>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<bool>,
    },
}
