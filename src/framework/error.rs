//! # Framework Errors
//!
//! Errors raised by the actor plumbing itself, as opposed to errors an entity
//! returns from its hooks (those travel boxed inside [`FrameworkError::EntityError`]).

/// Errors that can occur within the actor framework.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
