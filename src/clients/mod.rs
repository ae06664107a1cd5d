//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod instrument_client;

pub use actor_client::*;
pub use instrument_client::*;
