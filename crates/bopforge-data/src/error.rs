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

//! Error types of the entity model.

use thiserror::Error;

/// An error raised by a position kinematics mutation.
///
/// A failed mutation leaves the points and travel times untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum KinematicsError {
    /// Bare points were given while the path uses explicit travel times.
    #[error(
        "bare points were given but the path uses explicit travel times; \
         set a travel speed or give a time in seconds for every point"
    )]
    TimesRequired,
    /// Timed points were given while a constant travel speed is set.
    #[error(
        "timed points were given but the travel speed is {speed}; \
         set the travel speed to 0 or drop the times"
    )]
    SpeedIsSet {
        /// The active travel speed.
        speed: f64,
    },
    /// An index does not address a point of the path.
    #[error("position point index {index} is out of range for a path of {len} points")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The number of points at the time of the request.
        len: usize,
    },
}

/// An error raised when an entity field is given an unusable value.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EntityError {
    /// The legacy transparency level must be between 0 and 8.
    #[error("transparency level must be between 0 and 8, got {level}")]
    TransparencyOutOfRange {
        /// The rejected level.
        level: u8,
    },
}
