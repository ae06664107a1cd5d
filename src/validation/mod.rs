//! # Validation Layer
//!
//! Turns a raw JSON request body into the typed DTOs the store accepts
//! ([`InstrumentCreate`], [`InstrumentPatch`]). Nothing reaches the store actor
//! without passing through here.
//!
//! Which fields exist depends on the [`Schema`]: the minimal schema knows only
//! `name` and `price`, the full schema adds `category`, `description`,
//! `stock`, `rating` and `image`. Keys outside the schema are ignored.

mod coerce;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::model::{InstrumentCreate, InstrumentPatch, PLACEHOLDER_IMAGE};

pub type JsonObject = Map<String, Value>;

/// The set of fields a catalog record carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// `name` and `price` only.
    Minimal,
    /// Every instrument field.
    Full,
}

impl Schema {
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Schema::Minimal => &["name", "price"],
            Schema::Full => &[
                "name",
                "category",
                "description",
                "price",
                "stock",
                "rating",
                "image",
            ],
        }
    }

    /// Fields that must be present on create.
    pub fn required(&self) -> &'static [&'static str] {
        match self {
            Schema::Minimal => &["name", "price"],
            Schema::Full => &["name", "category", "description", "price", "stock"],
        }
    }
}

/// Why a supplied value was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Empty,
    NotText,
    NotNumber,
    NotPositive,
    NotNonNegativeInteger,
    OutOfRange,
}

impl std::fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            FieldIssue::Empty => "must not be empty",
            FieldIssue::NotText => "must be a string",
            FieldIssue::NotNumber => "must be a finite number",
            FieldIssue::NotPositive => "must be greater than 0",
            FieldIssue::NotNonNegativeInteger => "must be a whole number of at least 0",
            FieldIssue::OutOfRange => "must be between 0 and 5",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required fields")]
    MissingFields,
    #[error("nothing to update")]
    NothingToUpdate,
    #[error("request body must be a JSON object")]
    MalformedBody,
    #[error("invalid value for field '{field}': {issue}")]
    InvalidField {
        field: &'static str,
        issue: FieldIssue,
    },
}

/// Parses a request body. An empty body counts as `{}`.
pub fn parse_body(bytes: &[u8]) -> Result<JsonObject, ValidationError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(JsonObject::new());
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(ValidationError::MalformedBody),
    }
}

/// Validates a create body.
///
/// Presence is checked for every required field before any value is coerced,
/// so a body missing one field and malformed in another reports the missing
/// field. A `price` of `0` counts as missing.
pub fn validate_create(
    schema: Schema,
    body: &JsonObject,
) -> Result<InstrumentCreate, ValidationError> {
    let missing = schema.required().iter().any(|field| match body.get(*field) {
        None => true,
        Some(value) if coerce::is_blank(value) => true,
        Some(Value::Number(n)) if *field == "price" => n.as_f64() == Some(0.0),
        Some(_) => false,
    });
    if missing {
        return Err(ValidationError::MissingFields);
    }

    static NULL: Value = Value::Null;
    let required = |field: &str| body.get(field).unwrap_or(&NULL);

    let mut params = InstrumentCreate {
        name: coerce::text("name", required("name"))?,
        price: coerce::price(required("price"))?,
        ..Default::default()
    };

    if schema == Schema::Full {
        params.category = Some(coerce::text("category", required("category"))?);
        params.description = Some(coerce::text("description", required("description"))?);
        params.stock = Some(coerce::stock(required("stock"))?);
        params.rating = Some(optional_rating(body.get("rating"))?);
        params.image = Some(optional_image(body.get("image"))?);
    }

    Ok(params)
}

/// Validates a partial-update body.
///
/// Any recognized key counts as supplied, even with a `null` value. Required
/// fields cannot be cleared; `rating` and `image` fall back to their defaults.
pub fn validate_patch(
    schema: Schema,
    body: &JsonObject,
) -> Result<InstrumentPatch, ValidationError> {
    if !schema.fields().iter().any(|field| body.contains_key(*field)) {
        return Err(ValidationError::NothingToUpdate);
    }

    let full = schema == Schema::Full;
    let supplied = |field: &str| {
        if full || Schema::Minimal.fields().contains(&field) {
            body.get(field)
        } else {
            None
        }
    };

    let mut patch = InstrumentPatch::default();
    if let Some(value) = supplied("name") {
        patch.name = Some(coerce::text("name", value)?);
    }
    if let Some(value) = supplied("category") {
        patch.category = Some(coerce::text("category", value)?);
    }
    if let Some(value) = supplied("description") {
        patch.description = Some(coerce::text("description", value)?);
    }
    if let Some(value) = supplied("price") {
        if coerce::is_cleared(value) {
            return Err(ValidationError::InvalidField {
                field: "price",
                issue: FieldIssue::Empty,
            });
        }
        patch.price = Some(coerce::price(value)?);
    }
    if let Some(value) = supplied("stock") {
        if coerce::is_cleared(value) {
            return Err(ValidationError::InvalidField {
                field: "stock",
                issue: FieldIssue::Empty,
            });
        }
        patch.stock = Some(coerce::stock(value)?);
    }
    if let Some(value) = supplied("rating") {
        patch.rating = Some(optional_rating(Some(value))?);
    }
    if let Some(value) = supplied("image") {
        patch.image = Some(optional_image(Some(value))?);
    }

    Ok(patch)
}

fn optional_rating(value: Option<&Value>) -> Result<f64, ValidationError> {
    match value {
        None => Ok(0.0),
        Some(v) if coerce::is_cleared(v) => Ok(0.0),
        Some(v) => coerce::rating(v),
    }
}

fn optional_image(value: Option<&Value>) -> Result<String, ValidationError> {
    match value {
        None => Ok(PLACEHOLDER_IMAGE.to_string()),
        Some(v) if coerce::is_cleared(v) => Ok(PLACEHOLDER_IMAGE.to_string()),
        Some(v) => coerce::text("image", v),
    }
}
