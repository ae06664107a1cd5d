//! Startup and shutdown of the store actor, and the tracing subscriber.

pub mod catalog_system;
pub mod tracing;

pub use catalog_system::CatalogSystem;
pub use tracing::setup_tracing;
