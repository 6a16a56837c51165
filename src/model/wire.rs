//! Flat key/value wire map and typed field readers.
//!
//! The wire map is a JSON object with insertion order preserved, so encoded
//! records list their keys in declaration order.

use serde_json::{Map, Value};

use crate::error::CodecError;

/// Flat ordered key/value representation exchanged with the photo API.
pub type WireMap = Map<String, Value>;

/// JSON type name of a wire value, as reported in type mismatches.
pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(key: &str, expected: &'static str, found: &Value) -> CodecError {
    CodecError::TypeMismatch {
        field: key.to_owned(),
        expected,
        actual: json_type(found),
    }
}

/// Read a required string. Absent and `null` both count as missing.
pub(crate) fn required_string(
    map: &WireMap,
    key: &'static str,
) -> Result<String, CodecError> {
    match map.get(key) {
        None | Some(Value::Null) => Err(CodecError::MissingRequiredField(key)),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(mismatch(key, "string", other)),
    }
}

/// Read an optional string. `null` is treated as absent.
pub(crate) fn optional_string(
    map: &WireMap,
    key: &str,
) -> Result<Option<String>, CodecError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(mismatch(key, "string", other)),
    }
}

/// Read an optional integer. Fractional and out-of-range numbers mismatch.
pub(crate) fn optional_int(
    map: &WireMap,
    key: &str,
) -> Result<Option<i64>, CodecError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value @ Value::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| mismatch(key, "integer", value)),
        Some(other) => Err(mismatch(key, "integer", other)),
    }
}

/// Read an optional nested object, decoding it with `decode`. Errors inside
/// the nested record are reported as `key.field`.
pub(crate) fn optional_object<T>(
    map: &WireMap,
    key: &str,
    decode: impl FnOnce(&WireMap) -> Result<T, CodecError>,
) -> Result<Option<T>, CodecError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(inner)) => {
            decode(inner).map(Some).map_err(|e| e.nested(key))
        }
        Some(other) => Err(mismatch(key, "object", other)),
    }
}

/// Incremental writer that drops absent optional values.
#[derive(Debug, Default)]
pub(crate) struct WireWriter {
    map: WireMap,
}

impl WireWriter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn string(&mut self, key: &str, value: &str) {
        let _ = self.map.insert(key.to_owned(), Value::from(value));
    }

    pub(crate) fn opt_string(&mut self, key: &str, value: Option<&str>) {
        if let Some(value) = value {
            self.string(key, value);
        }
    }

    pub(crate) fn opt_int(&mut self, key: &str, value: Option<i64>) {
        if let Some(value) = value {
            let _ = self.map.insert(key.to_owned(), Value::from(value));
        }
    }

    pub(crate) fn opt_object(&mut self, key: &str, value: Option<WireMap>) {
        if let Some(value) = value {
            let _ = self.map.insert(key.to_owned(), Value::Object(value));
        }
    }

    pub(crate) fn finish(self) -> WireMap {
        self.map
    }
}
