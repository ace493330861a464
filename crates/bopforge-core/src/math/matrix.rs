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

//! Defines the `Mat3` rotation matrix used for euler-angle math.

use super::Vector3;
use std::ops::{Index, Mul};

/// A 3x3 column-major matrix.
///
/// Its only job in a level builder is rotating local offsets and basis vectors
/// by an entity's euler angles, matching the coordinate system of the game client.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    /// The columns of the matrix. `cols[0]` is the first column, and so on.
    pub cols: [Vector3; 3],
}

impl Mat3 {
    /// The 3x3 identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [Vector3::X, Vector3::Y, Vector3::Z],
    };

    /// Creates a new matrix from three column vectors.
    #[inline]
    pub fn from_cols(c0: Vector3, c1: Vector3, c2: Vector3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Creates a matrix for a rotation around the X-axis (roll).
    #[inline]
    pub fn from_rotation_x(angle_radians: f64) -> Self {
        let (s, c) = angle_radians.sin_cos();
        Self::from_cols(
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, c, s),
            Vector3::new(0.0, -s, c),
        )
    }

    /// Creates a matrix for a right-handed rotation around the Y-axis (pitch).
    #[inline]
    pub fn from_rotation_y(angle_radians: f64) -> Self {
        let (s, c) = angle_radians.sin_cos();
        Self::from_cols(
            Vector3::new(c, 0.0, -s),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(s, 0.0, c),
        )
    }

    /// Creates a matrix for a rotation around the Z-axis (yaw).
    #[inline]
    pub fn from_rotation_z(angle_radians: f64) -> Self {
        let (s, c) = angle_radians.sin_cos();
        Self::from_cols(
            Vector3::new(c, s, 0.0),
            Vector3::new(-s, c, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        )
    }

    /// Builds the rotation for a set of euler angles, in radians.
    ///
    /// The composition is `pitch * roll * yaw`: a vector is rotated by yaw
    /// first, then roll, then pitch.
    #[inline]
    pub fn from_euler(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self::from_rotation_y(pitch) * Self::from_rotation_x(roll) * Self::from_rotation_z(yaw)
    }

    /// Returns a row of the matrix as a `Vector3`.
    #[inline]
    pub fn row(&self, index: usize) -> Vector3 {
        let pick = |v: Vector3| match index {
            0 => v.x,
            1 => v.y,
            _ => v.z,
        };
        Vector3::new(pick(self.cols[0]), pick(self.cols[1]), pick(self.cols[2]))
    }

    /// Returns the transpose of the matrix, which is its inverse for rotations.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2))
    }
}

impl Default for Mat3 {
    /// Returns the 3x3 identity matrix.
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul<Mat3> for Mat3 {
    type Output = Self;
    /// Multiplies this matrix by another `Mat3`.
    #[inline]
    fn mul(self, rhs: Mat3) -> Self::Output {
        Self::from_cols(self * rhs.cols[0], self * rhs.cols[1], self * rhs.cols[2])
    }
}

impl Mul<Vector3> for Mat3 {
    type Output = Vector3;
    /// Transforms a `Vector3` by this matrix.
    #[inline]
    fn mul(self, v: Vector3) -> Self::Output {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z
    }
}

impl Index<usize> for Mat3 {
    type Output = Vector3;
    /// Allows accessing a matrix column by index.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.cols[index]
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{approx_eq, PI};

    fn vec3_approx_eq(a: Vector3, b: Vector3) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
    }

    fn mat3_approx_eq(a: Mat3, b: Mat3) -> bool {
        (0..3).all(|i| vec3_approx_eq(a.cols[i], b.cols[i]))
    }

    #[test]
    fn test_identity_default() {
        assert_eq!(Mat3::default(), Mat3::IDENTITY);
        let v = Vector3::new(1.0, -2.0, 3.0);
        assert_eq!(Mat3::IDENTITY * v, v);
    }

    #[test]
    fn test_single_axis_rotations() {
        let angle = PI / 6.0;

        let expected_x = Vector3::new(0.0, angle.cos(), angle.sin());
        assert!(vec3_approx_eq(Mat3::from_rotation_x(angle) * Vector3::Y, expected_x));

        let expected_y = Vector3::new(angle.cos(), 0.0, -angle.sin());
        assert!(vec3_approx_eq(Mat3::from_rotation_y(angle) * Vector3::X, expected_y));

        let expected_z = Vector3::new(angle.cos(), angle.sin(), 0.0);
        assert!(vec3_approx_eq(Mat3::from_rotation_z(angle) * Vector3::X, expected_z));
    }

    #[test]
    fn test_euler_composition_order() {
        let (roll, pitch, yaw) = (0.4, -0.7, 1.3);
        let composed = Mat3::from_euler(roll, pitch, yaw);
        let manual = Mat3::from_rotation_y(pitch)
            * (Mat3::from_rotation_x(roll) * Mat3::from_rotation_z(yaw));
        assert!(mat3_approx_eq(composed, manual));

        // Applying to a vector equals applying yaw, then roll, then pitch.
        let v = Vector3::new(0.2, 1.0, -3.0);
        let stepwise = Mat3::from_rotation_y(pitch)
            * (Mat3::from_rotation_x(roll) * (Mat3::from_rotation_z(yaw) * v));
        assert!(vec3_approx_eq(composed * v, stepwise));
    }

    #[test]
    fn test_transpose_inverts_rotation() {
        let m = Mat3::from_euler(0.9, 0.1, -2.2);
        assert!(mat3_approx_eq(m * m.transpose(), Mat3::IDENTITY));
    }
}
