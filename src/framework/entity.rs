//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract a resource must satisfy to be
//! held by the generic [`ResourceActor`](crate::framework::ResourceActor). It names the
//! associated types for ids, creation and update DTOs, and the per-entity error, and
//! provides lifecycle hooks (`on_create`, `on_update`, `on_delete`) the actor calls
//! around every mutation.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The defaults do nothing (`Ok(())`). `on_update` has no default: every entity
//! must say how a patch lands on it.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// Hooks run inside the actor task, so they see the entity with exclusive access.
/// Returning an error from a hook vetoes the operation and leaves the store untouched.
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Validated data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Validated data describing a partial update.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// One error enum per entity rather than one per operation; clients only
    /// ever match on a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The id assigned at creation time.
    fn id(&self) -> &Self::Id;

    /// Construct the full entity from a freshly generated id and its payload.
    /// Called before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks ---

    /// Called after the entity is built and before it is inserted.
    fn on_create(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request targets this entity.
    ///
    /// Implementations must leave `self` unchanged when they return an error.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    fn on_delete(&self) -> Result<(), Self::Error> {
        Ok(())
    }
}
