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

//! # Bopforge Data
//!
//! The entity model of a bopjson level: the universal transform and
//! appearance fields, the per-kind payloads, the position and rotation
//! kinematics, and the decal transform corrector.

#![warn(missing_docs)]

pub mod entity;
pub mod error;

pub use entity::decal::{DecalTransform, DecalType};
pub use entity::kind::{EntityKind, KindMeta, KindPayload, WireContext};
pub use entity::kinematics::{PathPoints, PositionKinematics, RotationKinematics, TravelMode};
pub use entity::tiling::Tiling;
pub use entity::Entity;
pub use error::{EntityError, KinematicsError};
