//! # Instrument Actor
//!
//! The Resource Store of the catalog: a [`ResourceActor`] holding [`Instrument`]
//! records, with the id generator moved into the actor task so ids are drawn
//! exactly once per create, under the same serialization as every mutation.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Instrument`]
//! - [`error`] - [`InstrumentError`]
//! - [`new()`] - factory that wires the generator, seed records, actor and client

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::InstrumentClient;
use crate::framework::ResourceActor;
use crate::model::{IdGenerator, Instrument};

/// Creates a new Instrument actor and its client.
///
/// Seed ids are reserved in the generator before the actor starts, so they are
/// never issued again.
pub fn new(
    buffer_size: usize,
    mut generator: IdGenerator,
    seed: Vec<Instrument>,
) -> (ResourceActor<Instrument>, InstrumentClient) {
    for item in &seed {
        generator.reserve(&item.id);
    }

    let (actor, generic_client) = ResourceActor::new(buffer_size, move || generator.next_id());
    let client = InstrumentClient::new(generic_client);

    (actor.seed(seed), client)
}
