//! Error types for the Instrument actor.

use thiserror::Error;

/// Errors that can occur during instrument operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InstrumentError {
    /// A record would break a catalog invariant (e.g. a non-positive price).
    #[error("Instrument invariant violated: {0}")]
    InvariantViolated(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
