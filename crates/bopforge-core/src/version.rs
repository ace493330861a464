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

//! Semantic game versions used for the level header and feature gating.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A `major.minor.micro` game version.
///
/// Ordering compares `major`, then `minor`, then `micro`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GameVersion {
    /// The major number of the version.
    pub major: u32,
    /// The minor number of the version.
    pub minor: u32,
    /// The micro (patch) number of the version.
    pub micro: u32,
}

impl GameVersion {
    /// The newest game version this crate knows how to write.
    pub const LATEST: Self = Self::new(1, 1, 0);
    /// The oldest level version supported; time-based kinematics arrived here.
    pub const MINIMUM_SUPPORTED: Self = Self::new(1, 0, 14);

    /// Creates a new version.
    #[inline]
    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }
}

impl Default for GameVersion {
    fn default() -> Self {
        Self::LATEST
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// An error returned when a string is not a `major.minor.micro` version.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{input}' is not a version of the form major.minor.micro")]
pub struct ParseVersionError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for GameVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseVersionError {
            input: s.to_owned(),
        };
        let mut parts = s.trim().split('.').map(|p| p.parse::<u32>().map_err(|_| err()));
        let version = Self::new(
            parts.next().ok_or_else(err)??,
            parts.next().ok_or_else(err)??,
            parts.next().ok_or_else(err)??,
        );
        match parts.next() {
            Some(_) => Err(err()),
            None => Ok(version),
        }
    }
}

// --- Tests ---
