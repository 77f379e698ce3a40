//! Conversion between typed payloads and dynamic [`Value`]s.
//!
//! Params and results travel as `Value` (JSON-shaped). Both directions go
//! through JSON text with facet-json: payloads are JSON on the wire, and
//! routing them through the JSON serializer keeps renames, defaults and
//! skipped fields identical to what the remote end sees.

use facet::Facet;

use crate::{PayloadError, Value};

/// Encode a typed payload into a `Value`.
pub fn encode<T>(payload: &T) -> Result<Value, PayloadError>
where
    T: for<'a> Facet<'a>,
{
    let json = facet_json::to_string(payload);
    facet_json::from_str(&json).map_err(|e| PayloadError::Encode(e.to_string()))
}

/// Decode a `Value` into a typed payload.
pub fn decode<T>(value: &Value) -> Result<T, PayloadError>
where
    T: for<'a> Facet<'a>,
{
    let json = facet_json::to_string(value);
    facet_json::from_str(&json).map_err(|e| PayloadError::Decode(e.to_string()))
}

/// The `{}` sent for commands called without params.
pub fn empty_object() -> Result<Value, PayloadError> {
    facet_json::from_str("{}").map_err(|e| PayloadError::Encode(e.to_string()))
}
