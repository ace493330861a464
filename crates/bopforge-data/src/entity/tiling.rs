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

//! The repeating surface pattern shared by tilable entity kinds.

use bopforge_core::catalog::Pattern;
use bopforge_core::{Color, WireError, WireMap, WireMapExt};

/// The default opacity of a pattern.
pub const DEFAULT_PATTERN_OPACITY: u8 = 60;

/// A pattern drawn over the surface of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tiling {
    /// The pattern id.
    pub pattern: Pattern,
    /// The color the pattern is drawn with.
    pub pattern_color: Color,
    pattern_opacity: u8,
}

impl Tiling {
    /// Creates a tiling with the default opacity.
    #[inline]
    pub const fn new(pattern: Pattern, pattern_color: Color) -> Self {
        Self {
            pattern,
            pattern_color,
            pattern_opacity: DEFAULT_PATTERN_OPACITY,
        }
    }

    /// A tiling with the given pattern and a black pattern color.
    #[inline]
    pub const fn with_pattern(pattern: Pattern) -> Self {
        Self::new(pattern, Color::BLACK)
    }

    /// The pattern opacity, in `0..=255`.
    #[inline]
    pub fn pattern_opacity(&self) -> u8 {
        self.pattern_opacity
    }

    /// Sets the pattern opacity, clamped to `0..=255`.
    #[inline]
    pub fn set_pattern_opacity(&mut self, value: i64) {
        self.pattern_opacity = value.clamp(0, 255) as u8;
    }

    /// Builder form of [`Tiling::set_pattern_opacity`].
    #[inline]
    pub fn with_pattern_opacity(mut self, value: i64) -> Self {
        self.set_pattern_opacity(value);
        self
    }

    pub(crate) fn write(&self, out: &mut WireMap) -> Result<(), WireError> {
        out.put("block_pattern", self.pattern);
        out.put_wire("block_pattern_color", &self.pattern_color)?;
        out.put("pattern_opacity", self.pattern_opacity);
        Ok(())
    }
}

impl Default for Tiling {
    fn default() -> Self {
        Self::with_pattern(Pattern::CHECKERBOARD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let tiling = Tiling::default();
        assert_eq!(tiling.pattern, Pattern::CHECKERBOARD);
        assert_eq!(tiling.pattern_color, Color::BLACK);
        assert_eq!(tiling.pattern_opacity(), 60);
    }

    #[test]
    fn test_opacity_is_clamped() {
        let mut tiling = Tiling::default().with_pattern_opacity(400);
        assert_eq!(tiling.pattern_opacity(), 255);
        tiling.set_pattern_opacity(-3);
        assert_eq!(tiling.pattern_opacity(), 0);
    }

    #[test]
    fn test_wire_keys() {
        let mut out = WireMap::new();
        Tiling::new(Pattern::HEX, Color::rgb(1, 2, 3))
            .write(&mut out)
            .unwrap();
        assert_eq!(
            serde_json::Value::Object(out),
            json!({
                "block_pattern": 1,
                "block_pattern_color": {"type": "Color8", "value": {"r": 1, "g": 2, "b": 3}},
                "pattern_opacity": 60
            })
        );
    }
}
