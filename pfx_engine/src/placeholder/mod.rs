//! Typed placeholder data model
//!
//! A placeholder is one named, typed fact supplied by an external data
//! source before evaluation begins. The engine only reads the map; it never
//! fetches or mutates values. The declared [`ValueType`] decides which
//! operators are legal for a clause and how its comparison is performed.

use crate::logging::{codes, Code};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Accepted textual date-time formats, tried in order.
///
/// Both forms round-trip the representation the placeholder producer uses
/// (ISO-8601 local date-time, seconds and fraction optional).
pub const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Closed set of placeholder value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    String,
    Integer,
    Date,
    Boolean,
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::String => "STRING",
            ValueType::Integer => "INTEGER",
            ValueType::Date => "DATE",
            ValueType::Boolean => "BOOLEAN",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One named, typed fact available for comparison.
///
/// Immutable once constructed; `value` holds the canonical textual form of
/// the typed value (decimal text for integers, case-insensitive
/// "true"/"false" for booleans, [`DATE_TIME_FORMATS`] for dates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderValue {
    pub name: String,
    pub value: String,
    pub value_type: ValueType,
}

impl PlaceholderValue {
    pub fn new(name: &str, value: &str, value_type: ValueType) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
            value_type,
        }
    }
}

impl fmt::Display for PlaceholderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.name, self.value, self.value_type)
    }
}

/// Name -> typed value mapping supplied by the external data source
pub type PlaceholderMap = HashMap<String, PlaceholderValue>;

/// Value text not parseable as the declared type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Cannot parse '{text}' as {value_type}")]
pub struct TypeParseError {
    pub value_type: ValueType,
    pub text: String,
}

impl TypeParseError {
    pub fn new(value_type: ValueType, text: &str) -> Self {
        Self {
            value_type,
            text: text.to_string(),
        }
    }

    pub fn error_code(&self) -> Code {
        codes::evaluation::TYPE_PARSE_ERROR
    }
}

// ============================================================================
// TYPED PARSING HELPERS
// ============================================================================

/// Parse decimal signed integer text
pub fn parse_integer(text: &str) -> Result<i64, TypeParseError> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| TypeParseError::new(ValueType::Integer, text))
}

/// Parse case-insensitive "true"/"false" text.
///
/// Anything else is an error; junk never silently becomes false.
pub fn parse_boolean(text: &str) -> Result<bool, TypeParseError> {
    match text.trim().to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(TypeParseError::new(ValueType::Boolean, text)),
    }
}

/// Parse date-time text against the accepted formats, in order
pub fn parse_date_time(text: &str) -> Result<NaiveDateTime, TypeParseError> {
    let trimmed = text.trim();
    for format in DATE_TIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(parsed);
        }
    }
    Err(TypeParseError::new(ValueType::Date, text))
}
