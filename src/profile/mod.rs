//! # Catalog Profiles
//!
//! A profile bundles everything that differs between the two catalog variants
//! this service can run as: the record [`Schema`], the collection path, the
//! default id policy, the error texts and the sample data.
//!
//! | | `instruments` | `products` |
//! |---|---|---|
//! | schema | full | minimal |
//! | path | `/api/instruments` | `/products` |
//! | ids | random, 6 chars | timestamp |
//! | texts | English | Russian |

pub mod messages;
pub mod seed;

pub use messages::*;

use std::str::FromStr;

use crate::model::{IdGenerator, IdPolicy, Instrument, DEFAULT_TOKEN_LENGTH};
use crate::validation::Schema;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    Instruments,
    Products,
}

impl FromStr for ProfileKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "instruments" => Ok(Self::Instruments),
            "products" => Ok(Self::Products),
            other => Err(format!("unknown profile '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProfile {
    pub kind: ProfileKind,
    pub schema: Schema,
    pub collection_path: String,
    pub id_policy: IdPolicy,
    pub messages: Messages,
    /// Plain-text body of `GET /`.
    pub banner: &'static str,
}

impl CatalogProfile {
    pub fn instruments() -> Self {
        Self {
            kind: ProfileKind::Instruments,
            schema: Schema::Full,
            collection_path: "/api/instruments".to_string(),
            id_policy: IdPolicy::Random {
                length: DEFAULT_TOKEN_LENGTH,
            },
            messages: Messages::ENGLISH,
            banner: "Catalog API is running",
        }
    }

    pub fn products() -> Self {
        Self {
            kind: ProfileKind::Products,
            schema: Schema::Minimal,
            collection_path: "/products".to_string(),
            id_policy: IdPolicy::Timestamp,
            messages: Messages::RUSSIAN,
            banner: "API работает",
        }
    }

    pub fn for_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Instruments => Self::instruments(),
            ProfileKind::Products => Self::products(),
        }
    }

    /// Sample records for this profile, drawing ids from `generator`.
    pub fn seed_records(&self, generator: &mut IdGenerator, public_url: &str) -> Vec<Instrument> {
        match self.kind {
            ProfileKind::Instruments => seed::instruments(generator, public_url),
            ProfileKind::Products => seed::products(generator),
        }
    }
}
