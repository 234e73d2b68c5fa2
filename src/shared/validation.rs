use chrono::{DateTime, Utc};

use crate::shared::dates::parse_date_input;
use crate::shared::slug::slugify;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{0} must contain at least one entry")]
    EmptyList(&'static str),

    #[error("{field} is not a valid date: {value}")]
    InvalidDate { field: &'static str, value: String },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },

    #[error("{field} has an unsupported value: {value}")]
    UnsupportedValue { field: &'static str, value: String },

    #[error("{0}")]
    Inconsistent(&'static str),

    #[error("{0} does not produce a valid slug")]
    InvalidSlug(&'static str),
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InvalidSlug(_) => "INVALID_SLUG",
            ValidationError::InvalidDate { .. } => "INVALID_DATE",
            ValidationError::OutOfRange { .. } => "OUT_OF_RANGE",
            ValidationError::UnsupportedValue { .. } => "UNSUPPORTED_VALUE",
            _ => "VALIDATION_ERROR",
        }
    }
}

/// Trimmed value, or `Required` when nothing but whitespace is left.
pub fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(value.to_string())
}

/// Empty or whitespace-only strings count as absent.
pub fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn non_empty_list(
    field: &'static str,
    items: Vec<String>,
) -> Result<Vec<String>, ValidationError> {
    let items: Vec<String> = items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect();

    if items.is_empty() {
        return Err(ValidationError::EmptyList(field));
    }
    Ok(items)
}

pub fn date(field: &'static str, value: &str) -> Result<DateTime<Utc>, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required(field));
    }
    parse_date_input(value).map_err(|_| ValidationError::InvalidDate {
        field,
        value: value.trim().to_string(),
    })
}

/// Slug of `source`, rejecting inputs made only of dropped characters.
pub fn slug_from(field: &'static str, source: &str) -> Result<String, ValidationError> {
    let slug = slugify(source);
    if slug.is_empty() {
        return Err(ValidationError::InvalidSlug(field));
    }
    Ok(slug)
}
