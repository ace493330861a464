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

//! The primitive block, the basic building piece of every level.

use bopforge_core::catalog::{BlockId, Shape};
use bopforge_core::{
    Color, Deprecation, Diagnostics, Vector2I8, Vector3, WireError, WireMap, WireMapExt,
};

use super::{tilable, KindMeta, KindPayload, WireContext};
use crate::entity::tiling::Tiling;
use crate::error::EntityError;

/// The opacity matching each legacy transparency level, from 0 to 8.
pub const TRANSPARENCY_LOOKUP: [u8; 9] = [0, 31, 63, 95, 127, 159, 191, 223, 255];

/// A primitive shape with a pattern, opacity and collision.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The surface pattern.
    pub tiling: Tiling,
    /// The geometric shape.
    pub shape: Shape,
    /// The size of one pattern tile, in world units.
    pub pattern_scale: f64,
    /// How fast the pattern scrolls along each axis.
    pub pattern_scroll: Vector2I8,
    /// Whether players collide with the block.
    pub collision_enabled: bool,
    /// Whether lighting is ignored.
    pub unshaded: bool,
    opacity: u8,
    transparency_enabled: bool,
}

impl Default for Block {
    fn default() -> Self {
        Self::new(Shape::CUBE)
    }
}

impl Block {
    /// Creates an opaque block of the given shape.
    pub fn new(shape: Shape) -> Self {
        Self {
            tiling: Tiling::default(),
            shape,
            pattern_scale: 2.0,
            pattern_scroll: Vector2I8::new(0, 0),
            collision_enabled: true,
            unshaded: false,
            opacity: 255,
            transparency_enabled: false,
        }
    }

    /// The opacity, in `0..=255`.
    #[inline]
    pub fn opacity(&self) -> u8 {
        self.opacity
    }

    /// Sets the opacity, clamped to `0..=255`.
    #[inline]
    pub fn set_opacity(&mut self, value: i64) {
        self.opacity = value.clamp(0, 255) as u8;
    }

    /// Builder form of [`Block::set_opacity`].
    #[inline]
    pub fn with_opacity(mut self, value: i64) -> Self {
        self.set_opacity(value);
        self
    }

    /// The legacy transparency level matching the current opacity, if the
    /// opacity is one of the nine legacy steps.
    pub fn transparency(&self) -> Option<u8> {
        TRANSPARENCY_LOOKUP
            .iter()
            .position(|&step| step == self.opacity)
            .map(|level| level as u8)
    }

    /// Sets the opacity from a legacy transparency level between 0 and 8.
    pub fn set_transparency(&mut self, level: u8) -> Result<(), EntityError> {
        let opacity = TRANSPARENCY_LOOKUP
            .get(usize::from(level))
            .ok_or(EntityError::TransparencyOutOfRange { level })?;
        self.opacity = *opacity;
        Ok(())
    }

    /// Reads the flag removed in game version 1.1.0. It is no longer written.
    pub fn transparency_enabled(&self, diagnostics: &mut Diagnostics) -> bool {
        diagnostics.deprecated(Deprecation::TransparencyEnabled);
        self.transparency_enabled
    }

    /// Sets the flag removed in game version 1.1.0. It is no longer written.
    pub fn set_transparency_enabled(&mut self, value: bool, diagnostics: &mut Diagnostics) {
        diagnostics.deprecated(Deprecation::TransparencyEnabled);
        self.transparency_enabled = value;
    }
}

impl KindPayload for Block {
    const META: KindMeta = KindMeta::new(
        BlockId::PRIMITIVE,
        "Generated Block",
        Color::rgb(34, 139, 34),
        Vector3::splat(2.0),
    );

    tilable!();

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("collision_enabled", self.collision_enabled);
        out.put("opacity", self.opacity);
        out.put("pattern_scale", 2.0 / self.pattern_scale);
        out.put_wire("pattern_scroll", &self.pattern_scroll)?;
        out.put("shape", self.shape);
        out.put("unshaded", self.unshaded);
        Ok(())
    }
}
