//! Route definitions for the HTTP API.

pub mod index;
pub mod instruments;
