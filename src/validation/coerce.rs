//! Field-level coercions shared by create and patch validation.

use serde_json::Value;

use super::{FieldIssue, ValidationError};

/// Values treated as "not supplied" for a required field on create.
pub(crate) fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// `null` or an empty string: the way clients clear an optional field.
pub(crate) fn is_cleared(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn invalid(field: &'static str, issue: FieldIssue) -> ValidationError {
    ValidationError::InvalidField { field, issue }
}

pub(crate) fn text(field: &'static str, value: &Value) -> Result<String, ValidationError> {
    match value {
        Value::String(s) if s.trim().is_empty() => Err(invalid(field, FieldIssue::Empty)),
        Value::String(s) => Ok(s.trim().to_string()),
        Value::Null => Err(invalid(field, FieldIssue::Empty)),
        _ => Err(invalid(field, FieldIssue::NotText)),
    }
}

/// Accepts JSON numbers and strings holding a decimal number. Non-finite
/// results (`"NaN"`, `"inf"`, `"1e400"`) are rejected.
pub(crate) fn number(field: &'static str, value: &Value) -> Result<f64, ValidationError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Null => return Err(invalid(field, FieldIssue::Empty)),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() => Ok(n),
        _ => Err(invalid(field, FieldIssue::NotNumber)),
    }
}

pub(crate) fn price(value: &Value) -> Result<f64, ValidationError> {
    let n = number("price", value)?;
    if n <= 0.0 {
        return Err(invalid("price", FieldIssue::NotPositive));
    }
    Ok(n)
}

pub(crate) fn stock(value: &Value) -> Result<u64, ValidationError> {
    let n = number("stock", value)?;
    if n < 0.0 || n.fract() != 0.0 || n > u64::MAX as f64 {
        return Err(invalid("stock", FieldIssue::NotNonNegativeInteger));
    }
    Ok(n as u64)
}

pub(crate) fn rating(value: &Value) -> Result<f64, ValidationError> {
    let n = number("rating", value)?;
    if !(0.0..=5.0).contains(&n) {
        return Err(invalid("rating", FieldIssue::OutOfRange));
    }
    Ok(n)
}
