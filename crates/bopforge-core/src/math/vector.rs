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

//! Provides the `Vector3` and `Vector2I8` value types and their operations.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};

use super::{Mat3, DEG_TO_RAD, RAD_TO_DEG};
use crate::wire::{WireError, WireValue};

// --- Vector3 ---

/// A 3-dimensional vector with `f64` components, written as `Vector3F32`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    /// The x component of the vector.
    pub x: f64,
    /// The y component of the vector.
    pub y: f64,
    /// The z component of the vector.
    pub z: f64,
}

impl Vector3 {
    /// The bopjson type name of a vector.
    pub const TYPE_NAME: &'static str = "Vector3F32";

    /// A vector with all components set to `0.0`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// A vector with all components set to `1.0`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// The unit vector pointing along the positive X-axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// The unit vector pointing along the positive Y-axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// The unit vector pointing along the positive Z-axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a new `Vector3` with the specified components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a vector with all components set to `v`.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self::new(v, v, v)
    }

    /// The unit vector facing forward for the given roll, pitch and yaw (radians).
    #[inline]
    pub fn forward(roll: f64, pitch: f64, yaw: f64) -> Self {
        Mat3::from_euler(roll, pitch, yaw) * Self::Z
    }

    /// The unit vector facing up for the given roll, pitch and yaw (radians).
    #[inline]
    pub fn up(roll: f64, pitch: f64, yaw: f64) -> Self {
        Mat3::from_euler(roll, pitch, yaw) * Self::Y
    }

    /// The unit vector facing left for the given roll, pitch and yaw (radians).
    #[inline]
    pub fn left(roll: f64, pitch: f64, yaw: f64) -> Self {
        Mat3::from_euler(roll, pitch, yaw) * Self::X
    }

    /// Calculates the dot product of this vector and another.
    #[inline]
    pub fn dot(&self, rhs: Self) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Calculates the length (magnitude) of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.dot(*self).sqrt()
    }

    /// Calculates the distance between two points.
    #[inline]
    pub fn distance(&self, rhs: Self) -> f64 {
        (*self - rhs).magnitude()
    }

    /// Interprets every component as radians and converts it to degrees.
    #[inline]
    pub fn to_degrees(self) -> Self {
        self * RAD_TO_DEG
    }

    /// Interprets every component as degrees and converts it to radians.
    #[inline]
    pub fn to_radians(self) -> Self {
        self * DEG_TO_RAD
    }

    /// Divides every component by `rhs`, or returns `None` if `rhs` is zero.
    #[inline]
    pub fn checked_div(self, rhs: f64) -> Option<Self> {
        (rhs != 0.0).then(|| Self::new(self.x / rhs, self.y / rhs, self.z / rhs))
    }

    /// Takes the remainder of every component by `rhs`, or returns `None` if `rhs` is zero.
    ///
    /// The result takes the sign of `rhs`, so `-1 mod 3 == 2`.
    #[inline]
    pub fn checked_rem(self, rhs: f64) -> Option<Self> {
        let wrap = |v: f64| {
            let r = v % rhs;
            if r != 0.0 && (r < 0.0) != (rhs < 0.0) {
                r + rhs
            } else {
                r
            }
        };
        (rhs != 0.0).then(|| Self::new(wrap(self.x), wrap(self.y), wrap(self.z)))
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {}, {})", Self::TYPE_NAME, self.x, self.y, self.z)
    }
}

impl WireValue for Vector3 {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn payload(&self) -> Result<Value, WireError> {
        if !(self.x.is_finite() && self.y.is_finite() && self.z.is_finite()) {
            return Err(WireError::NonFinite {
                type_name: Self::TYPE_NAME,
            });
        }
        Ok(json!({ "x": self.x, "y": self.y, "z": self.z }))
    }

    fn from_payload(payload: &Value) -> Result<Self, WireError> {
        Self::deserialize(payload).map_err(|e| WireError::InvalidPayload {
            type_name: Self::TYPE_NAME,
            reason: e.to_string(),
        })
    }
}

// --- Operator Overloads ---

impl Add for Vector3 {
    type Output = Self;
    /// Adds two vectors component-wise.
    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3 {
    type Output = Self;
    /// Subtracts two vectors component-wise.
    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;
    /// Multiplies the vector by a scalar.
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;
    /// Divides the vector by a scalar.
    ///
    /// # Panics
    /// Panics if `rhs` is zero. Use [`Vector3::checked_div`] to handle that case.
    #[inline]
    fn div(self, rhs: f64) -> Self::Output {
        match self.checked_div(rhs) {
            Some(v) => v,
            None => panic!("attempted to divide a vector by zero"),
        }
    }
}

impl Rem<f64> for Vector3 {
    type Output = Self;
    /// Takes the floored remainder of every component.
    ///
    /// # Panics
    /// Panics if `rhs` is zero. Use [`Vector3::checked_rem`] to handle that case.
    #[inline]
    fn rem(self, rhs: f64) -> Self::Output {
        match self.checked_rem(rhs) {
            Some(v) => v,
            None => panic!("attempted to take the remainder of a vector by zero"),
        }
    }
}

impl Neg for Vector3 {
    type Output = Self;
    /// Negates the vector.
    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

// --- Vector2I8 ---

/// A 2-dimensional vector of signed bytes, written as `Vector2_I8`.
///
/// Used for pattern scrolling, where each component is a scroll speed.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vector2I8 {
    /// The x component of the vector.
    pub x: i8,
    /// The y component of the vector.
    pub y: i8,
}

impl Vector2I8 {
    /// The bopjson type name of a byte vector.
    pub const TYPE_NAME: &'static str = "Vector2_I8";

    /// Creates a new `Vector2I8` with the specified components.
    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

impl WireValue for Vector2I8 {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn payload(&self) -> Result<Value, WireError> {
        Ok(json!({ "x": self.x, "y": self.y }))
    }

    fn from_payload(payload: &Value) -> Result<Self, WireError> {
        Self::deserialize(payload).map_err(|e| WireError::InvalidPayload {
            type_name: Self::TYPE_NAME,
            reason: e.to_string(),
        })
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, PI};
    use approx::assert_relative_eq;

    fn vec3_approx_eq(a: Vector3, b: Vector3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(Vector3::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_arithmetic_operators() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.5);
        assert_eq!(a + b, Vector3::new(5.0, -3.0, 9.5));
        assert_eq!(a - b, Vector3::new(-3.0, 7.0, -3.5));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(b / 2.0, Vector3::new(2.0, -2.5, 3.25));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
    }

    #[test]
    fn test_remainder_follows_divisor_sign() {
        let v = Vector3::new(7.0, -1.0, 3.0) % 3.0;
        assert_eq!(v, Vector3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_checked_division_by_zero() {
        assert_eq!(Vector3::ONE.checked_div(0.0), None);
        assert_eq!(Vector3::ONE.checked_rem(0.0), None);
    }

    #[test]
    #[should_panic]
    fn test_division_by_zero_panics() {
        let _ = Vector3::ONE / 0.0;
    }

    #[test]
    fn test_degree_radian_conversion() {
        let degrees = Vector3::new(180.0, 90.0, -45.0);
        let radians = degrees.to_radians();
        assert_relative_eq!(radians.x, PI);
        assert_relative_eq!(radians.y, PI / 2.0);
        assert!(vec3_approx_eq(radians.to_degrees(), degrees));
    }

    #[test]
    fn test_directions_without_rotation_are_basis_vectors() {
        assert!(vec3_approx_eq(Vector3::forward(0.0, 0.0, 0.0), Vector3::Z));
        assert!(vec3_approx_eq(Vector3::up(0.0, 0.0, 0.0), Vector3::Y));
        assert!(vec3_approx_eq(Vector3::left(0.0, 0.0, 0.0), Vector3::X));
    }

    #[test]
    fn test_directions_follow_rotation() {
        // A quarter turn of pitch swings forward onto +X.
        assert!(vec3_approx_eq(
            Vector3::forward(0.0, PI / 2.0, 0.0),
            Vector3::X
        ));
        // A quarter turn of roll tips up onto +Z.
        assert!(vec3_approx_eq(Vector3::up(PI / 2.0, 0.0, 0.0), Vector3::Z));
        // A quarter turn of yaw swings left onto +Y.
        assert!(vec3_approx_eq(Vector3::left(0.0, 0.0, PI / 2.0), Vector3::Y));
    }

    #[test]
    fn test_directions_are_unit_length() {
        let v = Vector3::forward(0.3, -1.1, 2.4);
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_wire_payload() {
        let wire = Vector3::new(1.0, 2.5, -3.0).to_wire().unwrap();
        assert_eq!(wire["type"], "Vector3F32");
        assert_eq!(wire["value"], json!({"x": 1.0, "y": 2.5, "z": -3.0}));
        let back = Vector3::from_payload(&wire["value"]).unwrap();
        assert_eq!(back, Vector3::new(1.0, 2.5, -3.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Vector3::new(1.0, 2.0, 3.5).to_string(),
            "Vector3F32(1, 2, 3.5)"
        );
    }

    #[test]
    fn test_vector2_i8_wire() {
        let wire = Vector2I8::new(-3, 4).to_wire().unwrap();
        assert_eq!(wire, json!({"type": "Vector2_I8", "value": {"x": -3, "y": 4}}));
    }

    #[test]
    fn test_non_finite_components_fail_to_serialize() {
        let expected = Err(WireError::NonFinite {
            type_name: "Vector3F32",
        });
        assert_eq!(Vector3::new(f64::NAN, 0.0, 0.0).to_wire(), expected);
        assert_eq!(Vector3::new(0.0, f64::INFINITY, 0.0).to_wire(), expected);
        assert!(Vector3::new(0.0, 0.0, -1e9).to_wire().is_ok());
    }
}
