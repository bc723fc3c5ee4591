//! JSON codec and explicit accessors over `serde_json::Value`.
//!
//! # Design
//! `serde_json::Value` is already the sum type over null, boolean, number,
//! string, array, and object, so the codec is a thin pair of functions
//! with the crate's error type. The `JsonAccess` trait replaces dynamic
//! `value["key"][0]` indexing — which silently yields `Null` on any miss —
//! with accessors that fail loudly with `ApiError::TypeMismatch`, naming
//! what was expected and what was actually there.

use serde_json::Value;

use crate::error::ApiError;

/// Serialize a value to its canonical JSON text.
///
/// Round-trips: `decode(&encode(v)?)? == v` for every `Value`.
pub fn encode(value: &Value) -> Result<String, ApiError> {
    serde_json::to_string(value).map_err(|e| ApiError::Parse(e.to_string()))
}

/// Parse JSON text into a `Value`.
///
/// Fails with `ApiError::Parse` on malformed input; never returns a
/// partial value. Inputs are complete documents, no streaming.
pub fn decode(text: &str) -> Result<Value, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Parse(e.to_string()))
}

/// The JSON kind of a value, for error messages.
fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(expected: &'static str, found: String) -> ApiError {
    ApiError::TypeMismatch { expected, found }
}

/// Fallible navigation and extraction over a decoded JSON value.
///
/// Accessors chain: `v.field("response")?.item(0)?.field("duration")?.to_i64()`.
pub trait JsonAccess {
    /// The value under `key`; the receiver must be an object holding it.
    fn field(&self, key: &str) -> Result<&Value, ApiError>;

    /// The element at `index`; the receiver must be an array long enough.
    fn item(&self, index: usize) -> Result<&Value, ApiError>;

    /// This value as a string slice.
    fn to_str(&self) -> Result<&str, ApiError>;

    /// This value as a signed integer.
    fn to_i64(&self) -> Result<i64, ApiError>;

    /// This value as a float. Integers widen losslessly.
    fn to_f64(&self) -> Result<f64, ApiError>;

    /// This value as a boolean.
    fn to_bool(&self) -> Result<bool, ApiError>;

    /// This value's elements; the receiver must be an array.
    fn elements(&self) -> Result<&[Value], ApiError>;
}

impl JsonAccess for Value {
    fn field(&self, key: &str) -> Result<&Value, ApiError> {
        match self {
            Value::Object(map) => map
                .get(key)
                .ok_or_else(|| mismatch("object with key", format!("object missing key {key:?}"))),
            other => Err(mismatch("object", kind(other).to_string())),
        }
    }

    fn item(&self, index: usize) -> Result<&Value, ApiError> {
        match self {
            Value::Array(items) => items.get(index).ok_or_else(|| {
                mismatch(
                    "array element",
                    format!("array of length {} (index {index})", items.len()),
                )
            }),
            other => Err(mismatch("array", kind(other).to_string())),
        }
    }

    fn to_str(&self) -> Result<&str, ApiError> {
        self.as_str()
            .ok_or_else(|| mismatch("string", kind(self).to_string()))
    }

    fn to_i64(&self) -> Result<i64, ApiError> {
        self.as_i64()
            .ok_or_else(|| mismatch("integer", kind(self).to_string()))
    }

    fn to_f64(&self) -> Result<f64, ApiError> {
        self.as_f64()
            .ok_or_else(|| mismatch("number", kind(self).to_string()))
    }

    fn to_bool(&self) -> Result<bool, ApiError> {
        self.as_bool()
            .ok_or_else(|| mismatch("boolean", kind(self).to_string()))
    }

    fn elements(&self) -> Result<&[Value], ApiError> {
        match self {
            Value::Array(items) => Ok(items),
            other => Err(mismatch("array", kind(other).to_string())),
        }
    }
}
