// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The `{"type": .., "value": ..}` envelope used by every serializable bopjson value.

use serde_json::{json, Map, Value};
use thiserror::Error;

/// An error raised while converting a value to or from its wire form.
#[derive(Debug, Error, PartialEq)]
pub enum WireError {
    /// An integer array holds a value outside the bounds of its bit width.
    #[error("overflow/underflow in a {bits}-bit array with {value}")]
    Overflow {
        /// The bit width of the array (32 or 64).
        bits: u32,
        /// The offending value.
        value: i128,
    },
    /// An index does not address an element of the array.
    #[error("index {index} is out of range for an array of length {len}")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The length of the array at the time of the request.
        len: usize,
    },
    /// A payload did not have the shape expected for the given type.
    #[error("invalid '{type_name}' payload: {reason}")]
    InvalidPayload {
        /// The wire type name that was being decoded.
        type_name: &'static str,
        /// What was wrong with the payload.
        reason: String,
    },
    /// A float is NaN or infinite, which JSON cannot represent.
    #[error("'{type_name}' holds a NaN or infinite component")]
    NonFinite {
        /// The wire type name of the offending value.
        type_name: &'static str,
    },
}

/// A value that knows how to wrap itself in the bopjson type envelope.
pub trait WireValue: Sized {
    /// The bopjson type name written in the `"type"` field.
    fn type_name(&self) -> &'static str;

    /// Produces the raw payload written in the `"value"` field.
    fn payload(&self) -> Result<Value, WireError>;

    /// Rebuilds a value from a payload previously produced by [`WireValue::payload`].
    fn from_payload(payload: &Value) -> Result<Self, WireError>;

    /// Produces the full `{"type": .., "value": ..}` object.
    fn to_wire(&self) -> Result<Value, WireError> {
        Ok(envelope(self.type_name(), self.payload()?))
    }
}

/// Wraps a payload in the bopjson type envelope.
#[inline]
pub fn envelope(type_name: &str, payload: Value) -> Value {
    json!({ "type": type_name, "value": payload })
}

/// An ordered JSON object, as written for entities and levels.
pub type WireMap = Map<String, Value>;

/// Insertion helpers for [`WireMap`].
///
/// Inserting an existing key replaces its value in place, so overrides keep
/// the original key order.
pub trait WireMapExt {
    /// Inserts a plain JSON value.
    fn put(&mut self, key: &str, value: impl Into<Value>);

    /// Inserts the enveloped wire form of `value`.
    fn put_wire(&mut self, key: &str, value: &impl WireValue) -> Result<(), WireError>;
}

impl WireMapExt for WireMap {
    #[inline]
    fn put(&mut self, key: &str, value: impl Into<Value>) {
        self.insert(key.to_owned(), value.into());
    }

    #[inline]
    fn put_wire(&mut self, key: &str, value: &impl WireValue) -> Result<(), WireError> {
        self.insert(key.to_owned(), value.to_wire()?);
        Ok(())
    }
}

/// Extracts the element list of an array payload.
pub(crate) fn payload_items<'a>(
    type_name: &'static str,
    payload: &'a Value,
) -> Result<&'a Vec<Value>, WireError> {
    payload.as_array().ok_or_else(|| WireError::InvalidPayload {
        type_name,
        reason: format!("expected a list, got {payload}"),
    })
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_keeps_type_before_value() {
        let wrapped = envelope("Int32_Array", json!([1, 2]));
        let keys: Vec<&String> = wrapped.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["type", "value"]);
        assert_eq!(wrapped["value"], json!([1, 2]));
    }

    #[test]
    fn overflow_message_names_width_and_value() {
        let err = WireError::Overflow {
            bits: 32,
            value: -1,
        };
        assert_eq!(
            err.to_string(),
            "overflow/underflow in a 32-bit array with -1"
        );
    }

    #[test]
    fn overriding_a_key_keeps_its_position() {
        let mut map = WireMap::new();
        map.put("first", 1);
        map.put("second", 2);
        map.put("first", 10);

        let keys: Vec<&String> = map.keys().collect();
        assert_eq!(keys, ["first", "second"]);
        assert_eq!(map["first"], json!(10));
    }

    #[test]
    fn payload_items_rejects_non_lists() {
        let err = payload_items("Float32_Array", &json!({"x": 1})).unwrap_err();
        assert!(matches!(err, WireError::InvalidPayload { .. }));
    }
}
