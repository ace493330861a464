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

//! The single-precision float array.

use serde_json::Value;

use super::out_of_range;
use crate::wire::{payload_items, WireError, WireValue};

/// An array of 32-bit floats, written as `Float32_Array`.
///
/// Values are narrowed to `f32` on insertion, so the precision loss is visible
/// immediately on read. Reads widen back to `f64` for convenience.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Float32Array {
    values: Vec<f32>,
}

impl Float32Array {
    /// The bopjson type name of a float array.
    pub const TYPE_NAME: &'static str = "Float32_Array";

    /// Creates an empty array.
    #[inline]
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Creates an array of `len` zeros.
    #[inline]
    pub fn zeros(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
        }
    }

    /// Appends a value, narrowing it to `f32`.
    #[inline]
    pub fn add(&mut self, value: f64) {
        self.values.push(value as f32);
    }

    /// Returns the stored value at `index`, widened to `f64`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied().map(f64::from)
    }

    /// Replaces the value at `index`, narrowing it to `f32`.
    pub fn set(&mut self, index: usize, value: f64) -> Result<(), WireError> {
        let len = self.values.len();
        let slot = self.values.get_mut(index).ok_or_else(|| out_of_range(index, len))?;
        *slot = value as f32;
        Ok(())
    }

    /// Removes and returns the value at `index`.
    pub fn remove(&mut self, index: usize) -> Result<f64, WireError> {
        if index >= self.values.len() {
            return Err(out_of_range(index, self.values.len()));
        }
        Ok(f64::from(self.values.remove(index)))
    }

    /// Removes every value.
    #[inline]
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Returns `true` if the array holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterates over the stored values, widened to `f64`.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied().map(f64::from)
    }
}

impl From<Vec<f64>> for Float32Array {
    fn from(values: Vec<f64>) -> Self {
        values.into_iter().collect()
    }
}

impl FromIterator<f64> for Float32Array {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|v| v as f32).collect(),
        }
    }
}

impl std::ops::Add for Float32Array {
    type Output = Self;
    /// Concatenates two arrays.
    fn add(mut self, rhs: Self) -> Self::Output {
        self.values.extend(rhs.values);
        self
    }
}

impl std::ops::Add<Vec<f64>> for Float32Array {
    type Output = Self;
    /// Appends raw values, narrowing each to `f32`.
    fn add(mut self, rhs: Vec<f64>) -> Self::Output {
        self.values.extend(rhs.into_iter().map(|v| v as f32));
        self
    }
}

impl WireValue for Float32Array {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn payload(&self) -> Result<Value, WireError> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(WireError::NonFinite {
                type_name: Self::TYPE_NAME,
            });
        }
        Ok(Value::Array(self.iter().map(Value::from).collect()))
    }

    fn from_payload(payload: &Value) -> Result<Self, WireError> {
        payload_items(Self::TYPE_NAME, payload)?
            .iter()
            .map(|item| {
                item.as_f64().ok_or_else(|| WireError::InvalidPayload {
                    type_name: Self::TYPE_NAME,
                    reason: format!("expected a number, got {item}"),
                })
            })
            .collect()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_values_are_narrowed_on_insert() {
        let mut arr = Float32Array::new();
        arr.add(0.1);
        // The read reflects f32 precision, not the original f64.
        assert_ne!(arr.get(0), Some(0.1));
        assert_eq!(arr.get(0), Some(f64::from(0.1f32)));
    }

    #[test]
    fn test_exact_values_survive() {
        let arr = Float32Array::from(vec![1.0, 0.5, -2.25]);
        assert_eq!(arr.iter().collect::<Vec<_>>(), vec![1.0, 0.5, -2.25]);
    }

    #[test]
    fn test_contract_operations() {
        let mut arr = Float32Array::zeros(3);
        assert_eq!(arr.len(), 3);

        arr.set(1, 4.5).unwrap();
        assert_eq!(arr.get(1), Some(4.5));
        assert!(arr.set(3, 1.0).is_err());

        assert_eq!(arr.remove(1).unwrap(), 4.5);
        assert_eq!(arr.len(), 2);

        let joined = arr.clone() + vec![8.0] + Float32Array::from(vec![9.0]);
        assert_eq!(joined.iter().collect::<Vec<_>>(), vec![0.0, 0.0, 8.0, 9.0]);

        arr.clear();
        assert!(arr.is_empty());
    }

    #[test]
    fn test_wire_form_and_round_trip() {
        let arr = Float32Array::from(vec![1.5, 0.2]);
        let wire = arr.to_wire().unwrap();
        assert_eq!(wire["type"], "Float32_Array");
        assert_eq!(wire["value"], json!([1.5, f64::from(0.2f32)]));
        assert_eq!(Float32Array::from_payload(&wire["value"]).unwrap(), arr);
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        // 1e300 overflows to infinity when narrowed.
        for bad in [f64::NAN, f64::NEG_INFINITY, 1e300] {
            let arr = Float32Array::from(vec![1.0, bad]);
            assert_eq!(
                arr.to_wire(),
                Err(WireError::NonFinite {
                    type_name: "Float32_Array"
                })
            );
        }
    }
}
