//! Represents one catalog record (an instrument, or a product in the minimal schema).
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](crate::framework::ResourceActor).
//!
//! See `instrument_actor::entity` for details on:
//! - Creation parameters ([`InstrumentCreate`])
//! - Update parameters ([`InstrumentPatch`])

use serde::{Serialize, Serializer};

use super::id::InstrumentId;

/// Image used when a record is created without one.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/300x200?text=Music+Instrument";

/// Detail fields are `None` for records of the minimal schema and are then
/// left out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instrument {
    pub id: InstrumentId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(serialize_with = "js_number")]
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<u64>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "optional_js_number"
    )]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Instrument {
    /// Builds a record from an id and already-validated creation data.
    pub fn from_create(id: InstrumentId, params: InstrumentCreate) -> Self {
        Self {
            id,
            name: params.name,
            category: params.category,
            description: params.description,
            price: params.price,
            stock: params.stock,
            rating: params.rating,
            image: params.image,
        }
    }
}

/// DTO for creation, produced by the validation layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstrumentCreate {
    pub name: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: f64,
    pub stock: Option<u64>,
    pub rating: Option<f64>,
    pub image: Option<String>,
}

/// DTO for partial updates. Every `Some` field overwrites; `None` keeps the
/// current value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstrumentPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u64>,
    pub rating: Option<f64>,
    pub image: Option<String>,
}

impl InstrumentPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns `current` with the supplied fields replaced. The id never changes.
    pub fn apply(&self, current: &Instrument) -> Instrument {
        Instrument {
            id: current.id.clone(),
            name: self.name.clone().unwrap_or_else(|| current.name.clone()),
            category: self.category.clone().or_else(|| current.category.clone()),
            description: self
                .description
                .clone()
                .or_else(|| current.description.clone()),
            price: self.price.unwrap_or(current.price),
            stock: self.stock.or(current.stock),
            rating: self.rating.or(current.rating),
            image: self.image.clone().or_else(|| current.image.clone()),
        }
    }
}

/// Writes integral values without a fractional part (`300`, not `300.0`),
/// matching what JavaScript clients of this API expect.
fn js_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

fn optional_js_number<S: Serializer>(
    value: &Option<f64>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(v) => js_number(v, serializer),
        None => serializer.serialize_none(),
    }
}
