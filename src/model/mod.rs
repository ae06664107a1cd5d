//! Pure data structures (DTOs) implementing the [`ActorEntity`](crate::framework::ActorEntity) trait.

pub mod id;
pub mod instrument;

pub use id::*;
pub use instrument::*;
