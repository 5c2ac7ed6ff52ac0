//! JSON serialization for headers and claims
//!
//! Claims serialize canonically: object members in sorted key order with no
//! insignificant whitespace.

use crate::claims::Claims;
use crate::error::{Error, Result};
use crate::token::TokenHeader;
use serde_json::Value;

/// Serialize claims to canonical JSON bytes
pub fn serialize_claims(claims: &Claims) -> Result<Vec<u8>> {
    serde_json::to_vec(claims.as_map())
        .map_err(|e| Error::InvalidJson(format!("Failed to serialize claims: {e}")))
}

/// Parse claims from JSON bytes
///
/// The top-level value must be a JSON object.
pub fn parse_claims(bytes: &[u8]) -> Result<Claims> {
    let value: Value = serde_json::from_slice(bytes)
        .map_err(|e| Error::InvalidJson(format!("Failed to parse claims: {e}")))?;

    match value {
        Value::Object(map) => Ok(Claims::from_map(map)),
        other => Err(Error::InvalidJson(format!(
            "Claims must be a JSON object, found {}",
            type_name(&other)
        ))),
    }
}

pub(crate) fn serialize_header(header: &TokenHeader) -> Result<Vec<u8>> {
    serde_json::to_vec(header)
        .map_err(|e| Error::InvalidJson(format!("Failed to serialize header: {e}")))
}

pub(crate) fn parse_header(bytes: &[u8]) -> Result<TokenHeader> {
    serde_json::from_slice(bytes)
        .map_err(|e| Error::InvalidJson(format!("Failed to parse header: {e}")))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
