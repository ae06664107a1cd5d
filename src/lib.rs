//! # Catalog Service
//!
//! An in-memory catalog served over HTTP: one collection of records
//! (musical instruments, or products in the minimal variant) with create,
//! list, get, partial update and delete.
//!
//! ## Core Concepts
//!
//! ### One actor owns the collection
//! The records live in a single [`ResourceActor`](framework::ResourceActor) task.
//! Handlers never touch the collection; they send requests through a cloned
//! [`InstrumentClient`](clients::InstrumentClient) and receive snapshots back.
//! Every mutation is therefore serialized, and id generation happens inside
//! the actor, once per create.
//!
//! ### Profiles instead of variants
//! A [`CatalogProfile`](profile::CatalogProfile) picks the record schema,
//! the collection path, the id policy, the error texts and the sample data.
//! `instruments` serves the full schema under `/api/instruments` with short
//! random ids; `products` serves `{id, name, price}` under `/products` with
//! timestamp ids and Russian error texts.
//!
//! ### Validate before the store
//! Request bodies pass through [`validation`] and become typed DTOs
//! ([`InstrumentCreate`](model::InstrumentCreate),
//! [`InstrumentPatch`](model::InstrumentPatch)) before any message is sent.
//! The entity hooks in [`instrument_actor`] re-check the invariants on the
//! final record.
//!
//! ## Module Tour
//!
//! - [`framework`] - generic actor, client, entity trait and mocks
//! - [`model`] - the record type, its DTOs, ids and the id generator
//! - [`instrument_actor`] - the record's entity hooks and errors
//! - [`clients`] - typed client over the generic one
//! - [`validation`] - body parsing and field coercion
//! - [`profile`] - per-variant schema, texts and seed data
//! - [`config`] - environment configuration
//! - [`lifecycle`] - actor startup/shutdown and tracing setup
//! - [`http`] - axum router, handlers, errors and middleware
//!
//! ## Running
//!
//! ```bash
//! # Instruments catalog on :3000
//! cargo run
//!
//! # Products catalog with debug logs
//! CATALOG_PROFILE=products RUST_LOG=debug cargo run
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod http;
pub mod instrument_actor;
pub mod lifecycle;
pub mod model;
pub mod profile;
pub mod validation;
