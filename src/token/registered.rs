//! Registered header and claim names
//!
//! Registered names carry a fixed JSON type. Any other name accepts any
//! value.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// JSON type a registered name requires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expected {
    String,
    Number,
    StringOrStrings,
    Strings,
    Object,
}

impl Expected {
    fn accepts(self, value: &Value) -> bool {
        match self {
            Expected::String => value.is_string(),
            Expected::Number => value.is_number(),
            Expected::StringOrStrings => value.is_string() || is_string_array(value),
            Expected::Strings => is_string_array(value),
            Expected::Object => value.is_object(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            Expected::String => "a string",
            Expected::Number => "a number",
            Expected::StringOrStrings => "a string or an array of strings",
            Expected::Strings => "an array of strings",
            Expected::Object => "an object",
        }
    }
}

fn is_string_array(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|items| items.iter().all(Value::is_string))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn claim_type(name: &str) -> Option<Expected> {
    match name {
        "iss" | "sub" | "jti" => Some(Expected::String),
        "aud" => Some(Expected::StringOrStrings),
        "exp" | "nbf" | "iat" => Some(Expected::Number),
        _ => None,
    }
}

fn header_type(name: &str) -> Option<Expected> {
    match name {
        "alg" | "typ" | "cty" | "kid" | "jku" | "x5u" | "x5t" | "x5t#S256" => {
            Some(Expected::String)
        }
        "crit" | "x5c" => Some(Expected::Strings),
        "jwk" => Some(Expected::Object),
        _ => None,
    }
}

fn check(kind: &str, name: &str, value: &Value, expected: Option<Expected>) -> Result<()> {
    match expected {
        Some(expected) if !expected.accepts(value) => Err(Error::ConstructionRejected(format!(
            "{kind} '{name}' must be {}, got {}",
            expected.describe(),
            json_type(value)
        ))),
        _ => Ok(()),
    }
}

/// Check a single claim against its registered type
pub(crate) fn check_claim(name: &str, value: &Value) -> Result<()> {
    check("claim", name, value, claim_type(name))
}

/// Check a single header against its registered type
pub(crate) fn check_header(name: &str, value: &Value) -> Result<()> {
    check("header", name, value, header_type(name))
}

/// Check every claim of a claim set
pub(crate) fn check_claims(claims: &Map<String, Value>) -> Result<()> {
    claims
        .iter()
        .try_for_each(|(name, value)| check_claim(name, value))
}

/// Check every header of a header set
pub(crate) fn check_headers(headers: &Map<String, Value>) -> Result<()> {
    headers
        .iter()
        .try_for_each(|(name, value)| check_header(name, value))
}
