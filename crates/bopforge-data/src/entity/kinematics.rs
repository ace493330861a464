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

//! Position and rotation kinematics of an entity.
//!
//! Kinematics only *describe* motion; the game client plays it back. A
//! position path is a closed loop of points relative to the entity origin,
//! where `travel_times[i]` is the time spent going from point `i` to point
//! `i + 1`, and the last time covers the way back to the first point.
//!
//! Two mutually exclusive modes exist:
//!
//! * [`TravelMode::ConstantSpeed`]: the legacy mode. Times are derived from
//!   the distance between consecutive points and never supplied directly.
//! * [`TravelMode::ExplicitTimes`]: every point carries its own time.
//!
//! Whatever the mode, the point and time arrays always have the same length.

use bopforge_core::{Deprecation, Diagnostics, Float32Array, Vector3, Vector3Array};

use crate::error::KinematicsError;

/// How the travel times of a path are obtained.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TravelMode {
    /// Times are derived from distances at this speed (units per second).
    ConstantSpeed(f64),
    /// Times are given by the caller for every point.
    #[default]
    ExplicitTimes,
}

/// Input of [`PositionKinematics::add_position_points`].
#[derive(Debug, Clone, PartialEq)]
pub enum PathPoints {
    /// Points without times, for constant-speed paths.
    Bare(Vec<Vector3>),
    /// Points paired with their travel times, for explicit-time paths.
    Timed(Vec<(Vector3, f64)>),
}

impl PathPoints {
    /// Returns `true` if no point is given.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Bare(points) => points.is_empty(),
            Self::Timed(points) => points.is_empty(),
        }
    }
}

impl From<Vec<Vector3>> for PathPoints {
    fn from(points: Vec<Vector3>) -> Self {
        Self::Bare(points)
    }
}

impl From<Vec<(Vector3, f64)>> for PathPoints {
    fn from(points: Vec<(Vector3, f64)>) -> Self {
        Self::Timed(points)
    }
}

/// The speed given to paths set through the legacy setter without a speed.
pub const LEGACY_DEFAULT_SPEED: f64 = 5.0;

/// A looping path of points with a travel time per segment.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PositionKinematics {
    /// Whether the client plays the path back.
    pub enabled: bool,
    points: Vector3Array,
    travel_times: Float32Array,
    mode: TravelMode,
}

impl PositionKinematics {
    /// Creates an empty, disabled path in explicit-time mode.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Accessors ---

    /// The current travel mode.
    #[inline]
    pub fn mode(&self) -> TravelMode {
        self.mode
    }

    /// The constant travel speed, if the path is in legacy mode.
    #[inline]
    pub fn travel_speed(&self) -> Option<f64> {
        match self.mode {
            TravelMode::ConstantSpeed(speed) => Some(speed),
            TravelMode::ExplicitTimes => None,
        }
    }

    /// The points of the path.
    #[inline]
    pub fn points(&self) -> &Vector3Array {
        &self.points
    }

    /// The travel time of every segment.
    #[inline]
    pub fn travel_times(&self) -> &Float32Array {
        &self.travel_times
    }

    /// Number of points on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the path has no point.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at `index`.
    #[inline]
    pub fn position_point(&self, index: usize) -> Option<Vector3> {
        self.points.get(index)
    }

    /// Returns the travel time leaving the point at `index`.
    #[inline]
    pub fn travel_time(&self, index: usize) -> Option<f64> {
        self.travel_times.get(index)
    }

    // --- Mode ---

    /// Sets the constant travel speed.
    ///
    /// A non-zero speed switches to [`TravelMode::ConstantSpeed`] and derives
    /// every time again. Zero switches to [`TravelMode::ExplicitTimes`] and
    /// keeps the current times as they are.
    pub fn set_travel_speed(&mut self, speed: f64) {
        if speed == 0.0 {
            self.mode = TravelMode::ExplicitTimes;
            return;
        }
        self.mode = TravelMode::ConstantSpeed(speed);
        self.recompute_all(speed);
    }

    // --- Mutations ---

    /// Appends a point.
    ///
    /// In explicit-time mode `time` is stored as given. In constant-speed mode
    /// it is ignored: the segment from the previous point and the wrap-around
    /// segment back to the first point are derived instead.
    pub fn add_position_point(&mut self, position: Vector3, time: f64) {
        match self.mode {
            TravelMode::ExplicitTimes => {
                self.points.add(position);
                self.travel_times.add(time);
            }
            TravelMode::ConstantSpeed(speed) => {
                self.push_derived(position, speed);
                self.close_loop(speed);
            }
        }
    }

    /// Appends several points at once.
    ///
    /// Bare points are only accepted in constant-speed mode and timed points
    /// only in explicit-time mode. The wrap-around time of a bare batch is
    /// derived once, after the last point. An empty batch is a no-op.
    pub fn add_position_points(
        &mut self,
        points: impl Into<PathPoints>,
    ) -> Result<(), KinematicsError> {
        let points = points.into();
        if points.is_empty() {
            return Ok(());
        }
        match (points, self.mode) {
            (PathPoints::Bare(_), TravelMode::ExplicitTimes) => Err(KinematicsError::TimesRequired),
            (PathPoints::Timed(_), TravelMode::ConstantSpeed(speed)) => {
                Err(KinematicsError::SpeedIsSet { speed })
            }
            (PathPoints::Bare(points), TravelMode::ConstantSpeed(speed)) => {
                for position in points {
                    self.push_derived(position, speed);
                    self.travel_times.add(0.0);
                }
                // The placeholder of the last point becomes the wrap-around.
                self.derive_segment(self.points.len() - 1, speed);
                Ok(())
            }
            (PathPoints::Timed(points), TravelMode::ExplicitTimes) => {
                for (position, time) in points {
                    self.points.add(position);
                    self.travel_times.add(time);
                }
                Ok(())
            }
        }
    }

    /// Replaces the point at `index`.
    ///
    /// In explicit-time mode its time is replaced by `time`. In constant-speed
    /// mode both segments touching the point are derived again.
    pub fn set_position_point(
        &mut self,
        index: usize,
        position: Vector3,
        time: f64,
    ) -> Result<(), KinematicsError> {
        self.check_index(index)?;
        self.points.set(index, position).ok();
        match self.mode {
            TravelMode::ExplicitTimes => {
                self.travel_times.set(index, time).ok();
            }
            TravelMode::ConstantSpeed(speed) => {
                let len = self.points.len();
                self.derive_segment((index + len - 1) % len, speed);
                self.derive_segment(index, speed);
            }
        }
        Ok(())
    }

    /// Removes the point at `index` and returns it with its travel time.
    ///
    /// In constant-speed mode the segment now joining the neighbors of the
    /// removed point is derived again.
    pub fn remove_position_point(&mut self, index: usize) -> Result<(Vector3, f64), KinematicsError> {
        self.check_index(index)?;
        let len = self.points.len();
        let out_of_range = |_| KinematicsError::IndexOutOfRange { index, len };
        let position = self.points.remove(index).map_err(out_of_range)?;
        let time = self.travel_times.remove(index).map_err(out_of_range)?;

        if let TravelMode::ConstantSpeed(speed) = self.mode {
            let len = self.points.len();
            if len > 0 {
                self.derive_segment((index + len - 1) % len, speed);
            }
        }
        Ok((position, time))
    }

    /// Removes every point and time.
    pub fn clear_position_points(&mut self) {
        self.points.clear();
        self.travel_times.clear();
    }

    // --- Legacy ---

    /// Replaces the whole path, the way paths were declared before explicit
    /// travel times existed.
    ///
    /// Older game versions implicitly started every path at the entity origin,
    /// so an origin point is prepended when the first point is not the origin.
    /// A path without speed gets the old default of
    /// [`LEGACY_DEFAULT_SPEED`], then every time is derived.
    pub fn set_position_points_legacy(
        &mut self,
        points: Vector3Array,
        diagnostics: &mut Diagnostics,
    ) {
        diagnostics.deprecated(Deprecation::SetPositionPoints);

        self.points = match points.first() {
            Some(first) if first != Vector3::ZERO => {
                Vector3Array::from(vec![Vector3::ZERO]) + points
            }
            _ => points,
        };
        self.travel_times = Float32Array::zeros(self.points.len());

        let speed = match self.mode {
            TravelMode::ConstantSpeed(speed) => speed,
            TravelMode::ExplicitTimes => LEGACY_DEFAULT_SPEED,
        };
        self.set_travel_speed(speed);
    }

    /// Reads the whole path, the way paths were read before explicit travel
    /// times existed.
    ///
    /// Explicit-time paths have no meaningful point list on their own, so
    /// `None` is returned for them. Nothing is mutated.
    pub fn position_points_legacy(&self, diagnostics: &mut Diagnostics) -> Option<&Vector3Array> {
        diagnostics.deprecated(Deprecation::GetPositionPoints);
        match self.mode {
            TravelMode::ConstantSpeed(_) => Some(&self.points),
            TravelMode::ExplicitTimes => None,
        }
    }

    // --- Internals ---

    fn check_index(&self, index: usize) -> Result<(), KinematicsError> {
        let len = self.points.len();
        if index < len {
            Ok(())
        } else {
            Err(KinematicsError::IndexOutOfRange { index, len })
        }
    }

    /// Pushes a point and derives the segment from the previous point to it.
    ///
    /// The new point gets no time of its own; the caller pushes one.
    fn push_derived(&mut self, position: Vector3, speed: f64) {
        self.points.add(position);
        let len = self.points.len();
        if len >= 2 {
            self.derive_segment(len - 2, speed);
        }
    }

    /// Pushes the wrap-around time of the last point.
    fn close_loop(&mut self, speed: f64) {
        let len = self.points.len();
        self.travel_times.add(0.0);
        if len > 0 {
            self.derive_segment(len - 1, speed);
        }
    }

    /// Derives the time of the segment leaving point `index`.
    fn derive_segment(&mut self, index: usize, speed: f64) {
        let len = self.points.len();
        if len == 0 {
            return;
        }
        if let (Some(from), Some(to)) = (self.points.get(index), self.points.get((index + 1) % len)) {
            self.travel_times.set(index, from.distance(to) / speed).ok();
        }
    }

    fn recompute_all(&mut self, speed: f64) {
        log::debug!("Deriving {} travel times at speed {speed}", self.points.len());
        for index in 0..self.points.len() {
            self.derive_segment(index, speed);
        }
    }
}

/// A constant rotation around an axis going through a pivot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationKinematics {
    /// Whether the client plays the rotation back.
    pub enabled: bool,
    /// The pivot, relative to the entity origin.
    pub pivot_offset: Vector3,
    /// The rotation axis.
    pub direction: Vector3,
    /// Angular speed.
    pub speed: f64,
}

impl Default for RotationKinematics {
    fn default() -> Self {
        Self {
            enabled: false,
            pivot_offset: Vector3::ZERO,
            direction: Vector3::ZERO,
            speed: 1.0,
        }
    }
}

impl RotationKinematics {
    /// Points the rotation axis along the up vector of the given euler
    /// angles, in radians.
    pub fn set_axis_from_euler(&mut self, roll: f64, pitch: f64, yaw: f64) {
        self.direction = Vector3::up(roll, pitch, yaw);
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_times(path: &PositionKinematics, expected: &[f64]) {
        let times: Vec<f64> = path.travel_times().iter().collect();
        assert_eq!(times.len(), expected.len(), "times: {times:?}");
        for (actual, expected) in times.iter().zip(expected) {
            assert_relative_eq!(*actual, *expected, epsilon = 1e-5);
        }
    }

    fn assert_lengths_match(path: &PositionKinematics) {
        assert_eq!(path.points().len(), path.travel_times().len());
    }

    fn triangle() -> Vec<Vector3> {
        vec![
            Vector3::ZERO,
            Vector3::new(0.0, 0.0, 10.0),
            Vector3::new(10.0, 0.0, 10.0),
        ]
    }

    fn constant_speed_triangle() -> PositionKinematics {
        let mut path = PositionKinematics::new();
        path.set_travel_speed(10.0);
        path.add_position_points(triangle()).unwrap();
        path
    }

    #[test]
    fn test_default_is_explicit_and_empty() {
        let path = PositionKinematics::new();
        assert!(!path.enabled);
        assert_eq!(path.mode(), TravelMode::ExplicitTimes);
        assert_eq!(path.travel_speed(), None);
        assert!(path.is_empty());
    }

    #[test]
    fn test_constant_speed_times_wrap_to_origin() {
        let path = constant_speed_triangle();
        assert_times(&path, &[1.0, 1.0, 200f64.sqrt() / 10.0]);
    }

    #[test]
    fn test_single_adds_match_bulk_add() {
        let mut single = PositionKinematics::new();
        single.set_travel_speed(10.0);
        for point in triangle() {
            single.add_position_point(point, 99.0);
            assert_lengths_match(&single);
        }
        assert_eq!(single, constant_speed_triangle());
    }

    #[test]
    fn test_first_point_gets_zero_time() {
        let mut path = PositionKinematics::new();
        path.set_travel_speed(3.0);
        path.add_position_point(Vector3::new(4.0, 0.0, 0.0), 0.0);
        assert_times(&path, &[0.0]);
    }

    #[test]
    fn test_explicit_times_are_stored_verbatim() {
        // Arrange
        let diagonal = 0.2 * 2f64.sqrt();
        let input = vec![
            (Vector3::ZERO, 0.2),
            (Vector3::new(0.0, 0.0, 10.0), 0.2),
            (Vector3::new(10.0, 0.0, 10.0), diagonal),
            (Vector3::ZERO, 5.0),
        ];
        let mut path = PositionKinematics::new();

        // Act
        path.add_position_points(input).unwrap();

        // Assert
        let expected: Vec<f64> = [0.2, 0.2, diagonal, 5.0]
            .iter()
            .map(|&t| f64::from(t as f32))
            .collect();
        assert_eq!(path.travel_times().iter().collect::<Vec<_>>(), expected);
        assert_eq!(path.len(), 4);
    }

    #[test]
    fn test_wrong_input_shape_is_rejected() {
        let mut explicit = PositionKinematics::new();
        assert_eq!(
            explicit.add_position_points(triangle()),
            Err(KinematicsError::TimesRequired)
        );
        assert!(explicit.is_empty());

        let mut legacy = constant_speed_triangle();
        assert_eq!(
            legacy.add_position_points(vec![(Vector3::ONE, 1.0)]),
            Err(KinematicsError::SpeedIsSet { speed: 10.0 })
        );
        assert_eq!(legacy.len(), 3);
    }

    #[test]
    fn test_empty_batch_is_a_no_op() {
        let mut path = PositionKinematics::new();
        assert!(path.add_position_points(Vec::<Vector3>::new()).is_ok());
        assert!(path.is_empty());
    }

    #[test]
    fn test_zero_speed_keeps_times() {
        let mut path = constant_speed_triangle();
        let before: Vec<f64> = path.travel_times().iter().collect();

        path.set_travel_speed(0.0);

        assert_eq!(path.mode(), TravelMode::ExplicitTimes);
        assert_eq!(path.travel_times().iter().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_changing_speed_recomputes_everything() {
        let mut path = constant_speed_triangle();
        path.set_travel_speed(5.0);
        assert_times(&path, &[2.0, 2.0, 200f64.sqrt() / 5.0]);
    }

    #[test]
    fn test_set_point_in_constant_speed_updates_both_segments() {
        let mut path = constant_speed_triangle();

        path.set_position_point(1, Vector3::new(0.0, 0.0, 20.0), 0.0)
            .unwrap();

        // 0 -> 1 is 20 long, 1 -> 2 is sqrt(200), 2 -> 0 is unchanged.
        assert_times(&path, &[2.0, 200f64.sqrt() / 10.0, 200f64.sqrt() / 10.0]);
    }

    #[test]
    fn test_set_first_point_updates_wrap_segment() {
        let mut path = constant_speed_triangle();
        path.set_position_point(0, Vector3::new(10.0, 0.0, 0.0), 0.0)
            .unwrap();
        assert_times(&path, &[200f64.sqrt() / 10.0, 1.0, 1.0]);
    }

    #[test]
    fn test_set_point_in_explicit_mode_replaces_time() {
        let mut path = PositionKinematics::new();
        path.add_position_point(Vector3::ZERO, 1.0);
        path.add_position_point(Vector3::ONE, 2.0);

        path.set_position_point(1, Vector3::X, 4.0).unwrap();

        assert_eq!(path.position_point(1), Some(Vector3::X));
        assert_eq!(path.travel_time(1), Some(4.0));
        assert_eq!(
            path.set_position_point(2, Vector3::X, 1.0),
            Err(KinematicsError::IndexOutOfRange { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_remove_in_explicit_mode_returns_pair() {
        let mut path = PositionKinematics::new();
        path.add_position_point(Vector3::ZERO, 1.5);
        path.add_position_point(Vector3::ONE, 2.5);

        assert_eq!(path.remove_position_point(0), Ok((Vector3::ZERO, 1.5)));
        assert_eq!(path.len(), 1);
        assert_lengths_match(&path);
    }

    #[test]
    fn test_remove_in_constant_speed_joins_neighbors() {
        let mut path = constant_speed_triangle();

        let (removed, _) = path.remove_position_point(1).unwrap();

        assert_eq!(removed, Vector3::new(0.0, 0.0, 10.0));
        assert_lengths_match(&path);
        let joined = 200f64.sqrt() / 10.0;
        assert_times(&path, &[joined, joined]);
    }

    #[test]
    fn test_remove_out_of_range_fails() {
        let mut path = constant_speed_triangle();
        assert!(path.remove_position_point(3).is_err());
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_clear_empties_both_arrays() {
        let mut path = constant_speed_triangle();
        path.clear_position_points();
        assert!(path.points().is_empty());
        assert!(path.travel_times().is_empty());
    }

    #[test]
    fn test_legacy_setter_prepends_origin_and_defaults_speed() {
        let mut diagnostics = Diagnostics::new();
        let mut path = PositionKinematics::new();

        path.set_position_points_legacy(
            Vector3Array::from(vec![Vector3::new(0.0, 5.0, 0.0)]),
            &mut diagnostics,
        );

        assert_eq!(path.travel_speed(), Some(LEGACY_DEFAULT_SPEED));
        assert_eq!(path.points().as_slice(), &[Vector3::ZERO, Vector3::new(0.0, 5.0, 0.0)]);
        assert_times(&path, &[1.0, 1.0]);
        assert_eq!(diagnostics.warnings().len(), 1);
    }

    #[test]
    fn test_legacy_setter_keeps_origin_start_and_speed() {
        let mut diagnostics = Diagnostics::new();
        let mut path = PositionKinematics::new();
        path.set_travel_speed(10.0);

        path.set_position_points_legacy(Vector3Array::from(triangle()), &mut diagnostics);
        path.set_position_points_legacy(Vector3Array::from(triangle()), &mut diagnostics);

        assert_eq!(path, constant_speed_triangle());
        assert_eq!(diagnostics.warnings().len(), 1);
    }

    #[test]
    fn test_legacy_getter_never_mutates() {
        let mut diagnostics = Diagnostics::new();
        let explicit = PositionKinematics::new();
        assert_eq!(explicit.position_points_legacy(&mut diagnostics), None);
        assert_eq!(explicit.mode(), TravelMode::ExplicitTimes);

        let legacy = constant_speed_triangle();
        assert_eq!(
            legacy.position_points_legacy(&mut diagnostics).map(Vector3Array::len),
            Some(3)
        );
        assert!(diagnostics.has_reported(Deprecation::GetPositionPoints));
    }

    #[test]
    fn test_lengths_stay_equal_across_mixed_mutations() {
        let mut path = PositionKinematics::new();
        path.add_position_point(Vector3::ZERO, 1.0);
        path.add_position_point(Vector3::X, 1.0);
        assert_lengths_match(&path);

        path.set_travel_speed(2.0);
        path.add_position_point(Vector3::Y, 0.0);
        path.add_position_points(vec![Vector3::Z, Vector3::ONE]).unwrap();
        assert_lengths_match(&path);

        path.remove_position_point(0).unwrap();
        path.set_position_point(2, Vector3::splat(3.0), 0.0).unwrap();
        assert_lengths_match(&path);

        path.set_travel_speed(0.0);
        path.add_position_points(vec![(Vector3::ZERO, 0.5)]).unwrap();
        assert_lengths_match(&path);
    }

    #[test]
    fn test_rotation_defaults_and_axis() {
        let mut rotation = RotationKinematics::default();
        assert!(!rotation.enabled);
        assert_eq!(rotation.speed, 1.0);

        rotation.set_axis_from_euler(0.0, 0.0, 0.0);
        assert_eq!(rotation.direction, Vector3::Y);
    }
}
