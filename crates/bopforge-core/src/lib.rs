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

//! # Bopforge Core
//!
//! Foundational crate containing the value types, typed arrays and wire
//! contracts shared by every other bopforge crate.

#![warn(missing_docs)]

pub mod array;
pub mod catalog;
pub mod diagnostics;
pub mod math;
pub mod timer;
pub mod version;
pub mod wire;

pub use array::{ColorArray, Float32Array, Int32Array, Int64Array, Vector3Array};
pub use diagnostics::{Deprecation, Diagnostics, Warning};
pub use math::{Color, Mat3, Vector2I8, Vector3};
pub use timer::Stopwatch;
pub use version::GameVersion;
pub use wire::{WireError, WireMap, WireMapExt, WireValue};
