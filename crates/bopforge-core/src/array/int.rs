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

//! Fixed-width integer arrays with serialize-time range checking.

use serde_json::{Number, Value};
use std::fmt;
use std::marker::PhantomData;

use super::out_of_range;
use crate::wire::{payload_items, WireError, WireValue};

/// The bit width of an [`IntArray`].
pub trait IntWidth {
    /// Number of bits of the game-side integer.
    const BITS: u32;
    /// The bopjson type name of an array of this width.
    const TYPE_NAME: &'static str;
}

/// Marker for 32-bit integer arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bits32;

/// Marker for 64-bit integer arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bits64;

impl IntWidth for Bits32 {
    const BITS: u32 = 32;
    const TYPE_NAME: &'static str = "Int32_Array";
}

impl IntWidth for Bits64 {
    const BITS: u32 = 64;
    const TYPE_NAME: &'static str = "Int64_Array";
}

/// An array of integers checked against a fixed bit width when serialized.
///
/// Values are stored unchecked as `i128` so that any value can be added and
/// inspected; the bound check happens in [`WireValue::payload`]. The `signed`
/// flag selects the bound pair:
///
/// * unsigned: `[0, 2^N]`. The upper bound is inclusive, one past the largest
///   unsigned value, to accept every file the game has produced so far.
/// * signed: `[-2^(N-1), 2^(N-1) - 1]`.
pub struct IntArray<W: IntWidth> {
    values: Vec<i128>,
    /// Selects the signed bound pair when serializing.
    pub signed: bool,
    width: PhantomData<W>,
}

/// A 32-bit integer array, written as `Int32_Array`.
pub type Int32Array = IntArray<Bits32>;
/// A 64-bit integer array, written as `Int64_Array`.
pub type Int64Array = IntArray<Bits64>;

impl<W: IntWidth> IntArray<W> {
    /// Creates an empty, unsigned array.
    #[inline]
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            signed: false,
            width: PhantomData,
        }
    }

    /// Creates an empty array using the signed bounds.
    #[inline]
    pub fn new_signed() -> Self {
        Self {
            signed: true,
            ..Self::new()
        }
    }

    /// The inclusive `(min, max)` pair checked at serialization time.
    #[inline]
    pub fn bounds(&self) -> (i128, i128) {
        if self.signed {
            let half = 1i128 << (W::BITS - 1);
            (-half, half - 1)
        } else {
            (0, 1i128 << W::BITS)
        }
    }

    /// Appends a value.
    #[inline]
    pub fn add(&mut self, value: impl Into<i128>) {
        self.values.push(value.into());
    }

    /// Returns the value at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<i128> {
        self.values.get(index).copied()
    }

    /// Replaces the value at `index`.
    pub fn set(&mut self, index: usize, value: impl Into<i128>) -> Result<(), WireError> {
        let len = self.values.len();
        let slot = self.values.get_mut(index).ok_or_else(|| out_of_range(index, len))?;
        *slot = value.into();
        Ok(())
    }

    /// Removes and returns the value at `index`.
    pub fn remove(&mut self, index: usize) -> Result<i128, WireError> {
        if index >= self.values.len() {
            return Err(out_of_range(index, self.values.len()));
        }
        Ok(self.values.remove(index))
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

    /// Returns `true` if `value` is present.
    #[inline]
    pub fn contains(&self, value: impl Into<i128>) -> bool {
        self.values.contains(&value.into())
    }

    /// Iterates over the values in order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = i128> + '_ {
        self.values.iter().copied()
    }

    /// Checks a single value against the bounds and converts it to a JSON number.
    fn checked_number(&self, value: i128) -> Result<Number, WireError> {
        let (min, max) = self.bounds();
        let overflow = WireError::Overflow {
            bits: W::BITS,
            value,
        };
        if value < min || value > max {
            return Err(overflow);
        }
        // 2^64 passes the unsigned bound but has no JSON integer form.
        if let Ok(v) = i64::try_from(value) {
            Ok(Number::from(v))
        } else {
            u64::try_from(value).map(Number::from).map_err(|_| overflow)
        }
    }
}

impl<W: IntWidth> Default for IntArray<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: IntWidth> Clone for IntArray<W> {
    fn clone(&self) -> Self {
        Self {
            values: self.values.clone(),
            signed: self.signed,
            width: PhantomData,
        }
    }
}

impl<W: IntWidth> fmt::Debug for IntArray<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct(W::TYPE_NAME)
            .field("values", &self.values)
            .field("signed", &self.signed)
            .finish()
    }
}

impl<W: IntWidth> PartialEq for IntArray<W> {
    /// Two arrays are equal when they hold the same values in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl<W: IntWidth, T: Into<i128>> From<Vec<T>> for IntArray<W> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<W: IntWidth, T: Into<i128>> FromIterator<T> for IntArray<W> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
            ..Self::new()
        }
    }
}

impl<W: IntWidth> std::ops::Add for IntArray<W> {
    type Output = Self;
    /// Concatenates two arrays, keeping the left-hand `signed` flag.
    fn add(mut self, rhs: Self) -> Self::Output {
        self.values.extend(rhs.values);
        self
    }
}

impl<W: IntWidth, T: Into<i128>> std::ops::Add<Vec<T>> for IntArray<W> {
    type Output = Self;
    /// Appends raw values to the array.
    fn add(mut self, rhs: Vec<T>) -> Self::Output {
        self.values.extend(rhs.into_iter().map(Into::into));
        self
    }
}

impl<W: IntWidth> WireValue for IntArray<W> {
    fn type_name(&self) -> &'static str {
        W::TYPE_NAME
    }

    /// Fails with [`WireError::Overflow`] on the first out-of-bounds value.
    fn payload(&self) -> Result<Value, WireError> {
        self.values
            .iter()
            .map(|&v| self.checked_number(v).map(Value::Number))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    fn from_payload(payload: &Value) -> Result<Self, WireError> {
        payload_items(W::TYPE_NAME, payload)?
            .iter()
            .map(|item| {
                item.as_i64()
                    .map(i128::from)
                    .or_else(|| item.as_u64().map(i128::from))
                    .ok_or_else(|| WireError::InvalidPayload {
                        type_name: W::TYPE_NAME,
                        reason: format!("expected an integer, got {item}"),
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

    const TWO_POW_32: i128 = 1 << 32;

    #[test]
    fn test_unsigned_32_accepts_zero_and_inclusive_upper_bound() {
        let arr = Int32Array::from(vec![0, TWO_POW_32]);
        let wire = arr.to_wire().unwrap();
        assert_eq!(wire, json!({"type": "Int32_Array", "value": [0, 4294967296u64]}));
    }

    #[test]
    fn test_unsigned_32_rejects_negative() {
        let arr = Int32Array::from(vec![5, -1]);
        assert_eq!(
            arr.to_wire(),
            Err(WireError::Overflow { bits: 32, value: -1 })
        );
    }

    #[test]
    fn test_unsigned_32_rejects_past_upper_bound() {
        let arr = Int32Array::from(vec![TWO_POW_32 + 1]);
        assert!(matches!(
            arr.to_wire(),
            Err(WireError::Overflow { bits: 32, .. })
        ));
    }

    #[test]
    fn test_signed_32_bounds() {
        let mut arr = Int32Array::new_signed();
        arr.add(i32::MIN);
        arr.add(i32::MAX);
        assert!(arr.to_wire().is_ok());

        arr.add(i64::from(i32::MAX) + 1);
        assert!(arr.to_wire().is_err());
    }

    #[test]
    fn test_signed_flag_switches_bounds() {
        let mut arr = Int64Array::from(vec![-5i64]);
        assert!(arr.to_wire().is_err());
        arr.signed = true;
        assert_eq!(arr.to_wire().unwrap()["value"], json!([-5]));
    }

    #[test]
    fn test_unsigned_64_upper_bound_has_no_json_form() {
        let arr = Int64Array::from(vec![u64::MAX]);
        assert_eq!(arr.to_wire().unwrap()["value"], json!([u64::MAX]));

        let edge = Int64Array::from(vec![1i128 << 64]);
        assert!(matches!(
            edge.to_wire(),
            Err(WireError::Overflow { bits: 64, .. })
        ));
    }

    #[test]
    fn test_contract_operations() {
        let mut arr = Int32Array::new();
        arr.add(1);
        arr.add(2u8);
        arr.add(3i64);
        assert_eq!(arr.len(), 3);
        assert!(arr.contains(2));

        arr.set(1, 20).unwrap();
        assert_eq!(arr.get(1), Some(20));
        assert_eq!(arr.remove(0).unwrap(), 1);
        assert!(arr.remove(5).is_err());
        assert_eq!(arr.iter().collect::<Vec<_>>(), vec![20, 3]);

        let joined = arr.clone() + vec![7] + Int32Array::from(vec![8]);
        assert_eq!(joined.iter().collect::<Vec<_>>(), vec![20, 3, 7, 8]);

        arr.clear();
        assert!(arr.is_empty());
    }

    #[test]
    fn test_equality_ignores_signed_flag() {
        let mut a = Int32Array::from(vec![1, 2]);
        let b = Int32Array::from(vec![1, 2]);
        a.signed = true;
        assert_eq!(a, b);
        assert_ne!(a, Int32Array::from(vec![2, 1]));
    }

    #[test]
    fn test_payload_round_trip() {
        let arr = Int64Array::from(vec![0u64, 17, u64::MAX]);
        let wire = arr.to_wire().unwrap();
        assert_eq!(Int64Array::from_payload(&wire["value"]).unwrap(), arr);
    }
}
