//! Field-level checks shared by the guest and room models

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::ValidationError;

/// A required text field: absent, empty and whitespace-only values are all missing.
pub(crate) fn required_text(
    field: &'static str,
    value: Option<String>,
) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

/// A patch to a required text field. Absent means "unchanged"; present but blank
/// would clear a required field and is rejected the same way as on create.
pub(crate) fn patched_text(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    value.map(|v| required_text(field, Some(v))).transpose()
}

/// Read an enumeration field as text whatever JSON type it arrived as, so a
/// non-string value reaches the enumeration check instead of failing the parse.
pub(crate) fn enum_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

pub(crate) fn integer_value(field: &'static str, value: &Value) -> Result<i64, ValidationError> {
    value.as_i64().ok_or_else(|| ValidationError::InvalidValue {
        field,
        reason: format!("must be a whole number (got {})", value),
    })
}

pub(crate) fn number_value(field: &'static str, value: &Value) -> Result<f64, ValidationError> {
    value.as_f64().ok_or_else(|| ValidationError::InvalidValue {
        field,
        reason: format!("must be a number (got {})", value),
    })
}

pub(crate) fn non_negative_integer(field: &'static str, value: i64) -> Result<i64, ValidationError> {
    if value < 0 {
        return Err(ValidationError::InvalidValue {
            field,
            reason: format!("must not be negative (got {})", value),
        });
    }
    Ok(value)
}

pub(crate) fn non_negative_amount(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidValue {
            field,
            reason: "must be a finite number".to_string(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field,
            reason: format!("must not be negative (got {})", value),
        });
    }
    Ok(value)
}
