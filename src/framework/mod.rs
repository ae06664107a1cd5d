//! Generic actor framework for resource management.
//!
//! One [`ResourceActor`] owns one ordered collection and serializes every
//! operation on it; any number of cloned [`ResourceClient`]s talk to it over a
//! bounded channel.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - trait resource types implement to be managed by an actor
//! - [`ResourceActor`] - the task that owns the collection and the id generator
//! - [`ResourceClient`] - cloneable async handle for create/list/get/update/delete
//! - [`FrameworkError`] - channel and entity-hook failures
//!
//! # Testing
//!
//! See [`mock`] for clients that run without a real actor.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
