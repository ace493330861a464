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

//! Typed homogeneous arrays and their bopjson `*_Array` wire form.
//!
//! All arrays share one contract: `add`, `get`, `set`, `remove`, `clear`,
//! `is_empty`, `len`, iteration, `+` with another array of the same type or
//! with a `Vec` of raw elements, and `to_wire`. Equality is order-sensitive.
//! Elements are plain values, so `clone` is always a deep copy.

mod float;
mod int;

pub use float::Float32Array;
pub use int::{Bits32, Bits64, IntArray, IntWidth, Int32Array, Int64Array};

use serde_json::Value;

use crate::math::{Color, Vector3};
use crate::wire::{payload_items, WireError, WireValue};

/// Builds the error returned when `index` does not address an element.
#[inline]
pub(crate) fn out_of_range(index: usize, len: usize) -> WireError {
    WireError::IndexOutOfRange { index, len }
}

/// An element type that can be stored in a [`ValueArray`].
pub trait ArrayElement: Copy + PartialEq + WireValue {
    /// The bopjson type name of an array of this element.
    const ARRAY_TYPE_NAME: &'static str;
}

impl ArrayElement for Vector3 {
    const ARRAY_TYPE_NAME: &'static str = "Vector3F32_Array";
}

impl ArrayElement for Color {
    const ARRAY_TYPE_NAME: &'static str = "Color8_Array";
}

/// An ordered array of structured values (vectors or colors).
#[derive(Debug, Clone, PartialEq)]
pub struct ValueArray<T> {
    items: Vec<T>,
}

/// An array of vectors, written as `Vector3F32_Array`.
pub type Vector3Array = ValueArray<Vector3>;
/// An array of colors, written as `Color8_Array`.
pub type ColorArray = ValueArray<Color>;

impl<T: ArrayElement> ValueArray<T> {
    /// Creates an empty array.
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an element.
    #[inline]
    pub fn add(&mut self, value: T) {
        self.items.push(value);
    }

    /// Returns the element at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.items.get(index).copied()
    }

    /// Replaces the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), WireError> {
        let len = self.items.len();
        let slot = self.items.get_mut(index).ok_or_else(|| out_of_range(index, len))?;
        *slot = value;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting later elements down.
    pub fn remove(&mut self, index: usize) -> Result<T, WireError> {
        if index >= self.items.len() {
            return Err(out_of_range(index, self.items.len()));
        }
        Ok(self.items.remove(index))
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<T> {
        self.items.first().copied()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<T> {
        self.items.last().copied()
    }

    /// Iterates over the elements in order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.items.iter().copied()
    }

    /// Views the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: ArrayElement> Default for ValueArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ArrayElement> From<Vec<T>> for ValueArray<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T: ArrayElement> FromIterator<T> for ValueArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T: ArrayElement> Extend<T> for ValueArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T: ArrayElement> std::ops::Add for ValueArray<T> {
    type Output = Self;
    /// Concatenates two arrays.
    fn add(mut self, rhs: Self) -> Self::Output {
        self.items.extend(rhs.items);
        self
    }
}

impl<T: ArrayElement> std::ops::Add<Vec<T>> for ValueArray<T> {
    type Output = Self;
    /// Appends raw elements to the array.
    fn add(mut self, rhs: Vec<T>) -> Self::Output {
        self.items.extend(rhs);
        self
    }
}

impl<T: ArrayElement> WireValue for ValueArray<T> {
    fn type_name(&self) -> &'static str {
        T::ARRAY_TYPE_NAME
    }

    fn payload(&self) -> Result<Value, WireError> {
        self.items
            .iter()
            .map(WireValue::payload)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }

    fn from_payload(payload: &Value) -> Result<Self, WireError> {
        payload_items(T::ARRAY_TYPE_NAME, payload)?
            .iter()
            .map(T::from_payload)
            .collect()
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vector3Array {
        Vector3Array::from(vec![
            Vector3::new(1.0, 2.0, 3.0),
            Vector3::ZERO,
            Vector3::new(-4.0, 0.5, 9.0),
        ])
    }

    #[test]
    fn test_basic_operations() {
        let mut arr = Vector3Array::new();
        assert!(arr.is_empty());

        arr.add(Vector3::ONE);
        arr.add(Vector3::X);
        assert_eq!(arr.len(), 2);
        assert_eq!(arr.get(1), Some(Vector3::X));
        assert_eq!(arr.get(2), None);

        arr.set(0, Vector3::Y).unwrap();
        assert_eq!(arr.first(), Some(Vector3::Y));

        assert_eq!(arr.remove(0).unwrap(), Vector3::Y);
        assert_eq!(arr.as_slice(), &[Vector3::X]);

        arr.clear();
        assert!(arr.is_empty());
    }

    #[test]
    fn test_out_of_range_access_is_an_error() {
        let mut arr = sample();
        assert_eq!(
            arr.set(3, Vector3::ONE),
            Err(WireError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(arr.remove(10).is_err());
        assert_eq!(arr, sample());
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a = ColorArray::from(vec![Color::new(1, 2, 3), Color::new(4, 5, 6)]);
        let b = ColorArray::from(vec![Color::new(4, 5, 6), Color::new(1, 2, 3)]);
        assert_ne!(a, b);
        assert_eq!(a.clone(), a);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = sample();
        let mut copy = original.clone();
        copy.set(0, Vector3::splat(42.0)).unwrap();
        assert_eq!(original.get(0), Some(Vector3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_concatenation() {
        let joined = sample() + Vector3Array::from(vec![Vector3::ONE]);
        assert_eq!(joined.len(), 4);
        assert_eq!(joined.last(), Some(Vector3::ONE));

        let appended = sample() + vec![Vector3::X, Vector3::Y];
        assert_eq!(appended.len(), 5);
        assert_eq!(appended.get(3), Some(Vector3::X));
    }

    #[test]
    fn test_push_and_concatenation_mix() {
        // `add` pushes in place while `+` consumes both sides.
        let mut arr = Vector3Array::new();
        arr.add(Vector3::X);
        let mut joined = arr + vec![Vector3::Y];
        joined.add(Vector3::Z);

        let mut floats = Float32Array::new();
        floats.add(1.5);
        let floats = floats + vec![2.5];

        let mut ints = Int32Array::new();
        ints.add(7);
        let ints = ints + vec![8];

        assert_eq!(joined.as_slice(), &[Vector3::X, Vector3::Y, Vector3::Z]);
        assert_eq!(floats.len(), 2);
        assert_eq!(ints.iter().collect::<Vec<_>>(), [7, 8]);
    }

    #[test]
    fn test_wire_form() {
        let colors = ColorArray::from(vec![Color::new(255, 0, 0), Color::with_alpha(0, 0, 0, 7)]);
        let wire = colors.to_wire().unwrap();
        assert_eq!(
            wire,
            json!({
                "type": "Color8_Array",
                "value": [{"r": 255, "g": 0, "b": 0}, {"r": 0, "g": 0, "b": 0, "a": 7}]
            })
        );
    }

    #[test]
    fn test_payload_round_trip() {
        let vectors = sample();
        let wire = vectors.to_wire().unwrap();
        assert_eq!(wire["type"], "Vector3F32_Array");
        assert_eq!(Vector3Array::from_payload(&wire["value"]).unwrap(), vectors);

        let colors = ColorArray::from(vec![Color::new(3, 2, 1)]);
        let wire = colors.to_wire().unwrap();
        assert_eq!(ColorArray::from_payload(&wire["value"]).unwrap(), colors);
    }

    #[test]
    fn test_from_payload_rejects_wrong_shape() {
        assert!(Vector3Array::from_payload(&json!([{"x": 1.0}])).is_err());
        assert!(ColorArray::from_payload(&json!("red")).is_err());
    }
}
