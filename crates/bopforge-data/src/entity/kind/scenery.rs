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

//! Decorative kinds. Most carry no gameplay behavior beyond a few visuals.

use bopforge_core::catalog::{BlockId, Pattern};
use bopforge_core::{Color, ColorArray, GameVersion, Vector3, WireError, WireMap, WireMapExt};

use super::{tilable, KindMeta, KindPayload, WireContext};
use crate::entity::tiling::Tiling;

/// Declares a decoration that only carries a tiling and writes no fields.
macro_rules! plain_tilable {
    (@tiling) => { Tiling::default() };
    (@tiling $tiling:expr) => { $tiling };
    (
        $(#[$attr:meta])*
        $name:ident, $id:expr, $label:literal, $color:expr, $scale:expr
        $(, $tiling:expr)? $(,)?
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            /// The surface pattern.
            pub tiling: Tiling,
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    tiling: plain_tilable!(@tiling $($tiling)?),
                }
            }
        }

        impl KindPayload for $name {
            const META: KindMeta = KindMeta::new($id, $label, $color, $scale);

            tilable!();

            fn write_fields(&self, _: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
                Ok(())
            }
        }
    };
}

plain_tilable!(
    /// A fence segment.
    Fence,
    BlockId::FENCE,
    "Generated Fence",
    Color::rgb(121, 85, 72),
    Vector3::new(2.0, 4.0, 1.0),
    Tiling::with_pattern(Pattern::PLANKS)
);

plain_tilable!(
    /// A palm tree.
    PalmTree,
    BlockId::PALM_TREE,
    "Generated Palm Tree",
    Color::rgb(94, 214, 0),
    Vector3::splat(8.0)
);

plain_tilable!(
    /// A statue.
    Statue,
    BlockId::STATUE,
    "Generated Statue",
    Color::rgb(246, 156, 0),
    Vector3::new(3.0, 5.0, 2.0)
);

plain_tilable!(
    /// A clock showing the real time.
    AnalogClock,
    BlockId::ANALOG_CLOCK,
    "Generated Analog Clock",
    Color::rgb(160, 29, 175),
    Vector3::splat(2.0)
);

plain_tilable!(
    /// An eye that bleeds. Hidden from the in-game editor.
    BleedingEye,
    BlockId::BLEEDING_EYE,
    "Generated Bleeding Eye",
    Color::rgb(237, 0, 8),
    Vector3::splat(2.0)
);

plain_tilable!(
    /// A hyacinth flower. Hidden from the in-game editor.
    Hyacinth,
    BlockId::HYACINTH,
    "Generated Hyacinth Flower",
    Color::rgb(20, 126, 172),
    Vector3::splat(2.0)
);

/// A flower. The tiling color is the stem color.
#[derive(Debug, Clone, PartialEq)]
pub struct Flower {
    /// The stem pattern.
    pub tiling: Tiling,
    /// Color of the flower head.
    pub capitulum_color: Color,
}

impl Default for Flower {
    fn default() -> Self {
        Self {
            tiling: Tiling::new(Pattern::CHECKERBOARD, Color::rgb(0, 167, 0)),
            capitulum_color: Color::rgb(255, 165, 0),
        }
    }
}

impl KindPayload for Flower {
    const META: KindMeta = KindMeta::new(
        BlockId::FLOWER,
        "Generated Flower",
        Color::rgb(160, 30, 176),
        Vector3::splat(2.0),
    );

    tilable!();

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put_wire("capitulum_color", &self.capitulum_color)
    }
}

/// A corn plant.
#[derive(Debug, Clone, PartialEq)]
pub struct Cornstalk {
    /// Color of the corn cobs.
    pub corn_color: Color,
}

impl Default for Cornstalk {
    fn default() -> Self {
        Self {
            corn_color: Color::rgb(255, 207, 0),
        }
    }
}

impl KindPayload for Cornstalk {
    const META: KindMeta = KindMeta::new(
        BlockId::CORNSTALK,
        "Generated Cornstalk",
        Color::rgb(0, 131, 35),
        Vector3::new(5.0, 10.0, 5.0),
    )
    .since(GameVersion::new(1, 1, 0));

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put_wire("pattern_color", &self.corn_color)
    }
}

/// A leafy tree. The entity color is the trunk color.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    /// The trunk pattern.
    pub tiling: Tiling,
    /// Whether the tree has leaves.
    pub leaves: bool,
    /// Color of the leaves.
    pub leaves_color: Color,
}

impl Default for Tree {
    fn default() -> Self {
        Self {
            tiling: Tiling::default(),
            leaves: true,
            leaves_color: Color::rgb(0, 128, 0),
        }
    }
}

impl KindPayload for Tree {
    const META: KindMeta = KindMeta::new(
        BlockId::TREE,
        "Generated Tree",
        Color::rgb(91, 40, 24),
        Vector3::new(11.0, 17.0, 11.0),
    )
    .since(GameVersion::new(1, 1, 0));

    tilable!();

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("leaves", self.leaves);
        out.put_wire("leaves_color", &self.leaves_color)
    }
}

/// A pine tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PineTree {
    /// The surface pattern.
    pub tiling: Tiling,
    /// Covers the branches with snow.
    pub snow: bool,
}

impl KindPayload for PineTree {
    const META: KindMeta = KindMeta::new(
        BlockId::PINE_TREE,
        "Generated Pine Tree",
        Color::rgb(0, 88, 36),
        Vector3::new(5.0, 10.0, 5.0),
    );

    tilable!();

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("snow", self.snow);
        Ok(())
    }
}

/// A lamp post.
#[derive(Debug, Clone, PartialEq)]
pub struct StreetLamp {
    /// Radius of the cast light.
    pub light_range: f64,
}

impl Default for StreetLamp {
    fn default() -> Self {
        Self { light_range: 25.0 }
    }
}

impl KindPayload for StreetLamp {
    const META: KindMeta = KindMeta::new(
        BlockId::STREET_LAMP,
        "Generated Street Lamp",
        Color::rgb(255, 160, 30),
        Vector3::new(2.0, 10.0, 2.0),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("light_range", self.light_range);
        Ok(())
    }
}

/// A wall torch.
#[derive(Debug, Clone, PartialEq)]
pub struct Torch {
    /// Radius of the cast light.
    pub light_range: f64,
}

impl Default for Torch {
    fn default() -> Self {
        Self { light_range: 25.0 }
    }
}

impl KindPayload for Torch {
    const META: KindMeta = KindMeta::new(
        BlockId::TORCH,
        "Generated Torch",
        Color::rgb(73, 48, 42),
        Vector3::new(1.0, 2.0, 1.0),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("light_range", self.light_range);
        Ok(())
    }
}

/// The three-tone colors shared by both logo kinds. The entity color is the
/// primary tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoColors {
    /// The second tone, written as `color2`.
    pub secondary: Color,
    /// The third tone, written as `color3`.
    pub tertiary: Color,
}

impl Default for LogoColors {
    fn default() -> Self {
        Self {
            secondary: Color::rgb(175, 85, 217),
            tertiary: Color::rgb(141, 62, 229),
        }
    }
}

impl LogoColors {
    fn write(&self, out: &mut WireMap) -> Result<(), WireError> {
        out.put_wire("color2", &self.secondary)?;
        out.put_wire("color3", &self.tertiary)
    }
}

/// The game logo.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Logo {
    /// The extra tones.
    pub colors: LogoColors,
}

impl KindPayload for Logo {
    const META: KindMeta = KindMeta::new(
        BlockId::LOGO,
        "Generated Logo",
        Color::rgb(130, 12, 155),
        Vector3::new(6.0, 2.5, 2.0),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        self.colors.write(out)
    }
}

/// The small logo icon.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogoIcon {
    /// The extra tones.
    pub colors: LogoColors,
}

impl KindPayload for LogoIcon {
    const META: KindMeta = KindMeta::new(
        BlockId::LOGO_ICON,
        "Generated Logo Icon",
        Color::rgb(130, 12, 155),
        Vector3::new(6.0, 2.5, 2.0),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        self.colors.write(out)
    }
}

/// A wire of blinking bulbs. The entity color is the wire color.
#[derive(Debug, Clone, PartialEq)]
pub struct StringLights {
    /// Colors of the bulbs, cycled along the wire.
    pub bulb_colors: ColorArray,
    /// Blinks per second. Zero keeps the bulbs lit.
    pub blink_speed: f64,
}

impl Default for StringLights {
    fn default() -> Self {
        Self {
            bulb_colors: ColorArray::from(vec![
                Color::rgb(255, 0, 0),
                Color::rgb(255, 215, 0),
                Color::rgb(50, 205, 50),
                Color::rgb(0, 0, 255),
                Color::rgb(255, 0, 255),
            ]),
            blink_speed: 0.0,
        }
    }
}

impl KindPayload for StringLights {
    const META: KindMeta = KindMeta::new(
        BlockId::STRING_LIGHTS,
        "Generated String Lights",
        Color::rgb(0, 67, 27),
        Vector3::new(6.0, 2.5, 2.0),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put_wire("bulb_colors", &self.bulb_colors)?;
        out.put("blink_speed", self.blink_speed);
        Ok(())
    }
}

/// A rose that hurts on touch. The tiling color is the stem color.
#[derive(Debug, Clone, PartialEq)]
pub struct Rose {
    /// The stem pattern.
    pub tiling: Tiling,
    /// Damage dealt per touch.
    pub damage: f64,
}

impl Default for Rose {
    fn default() -> Self {
        Self {
            tiling: Tiling::new(Pattern::CHECKERBOARD, Color::rgb(0, 153, 0)),
            damage: 1.0,
        }
    }
}

impl KindPayload for Rose {
    const META: KindMeta = KindMeta::new(
        BlockId::ROSE,
        "Generated Rose",
        Color::rgb(255, 0, 0),
        Vector3::new(1.0, 3.0, 1.0),
    )
    .since(GameVersion::new(1, 0, 15));

    tilable!();

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("damage", self.damage);
        Ok(())
    }
}

/// An avatar item rendered as a static mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemMesh {
    /// The avatar item id.
    pub item_id: i64,
    /// Whether lighting applies to the mesh.
    pub shaded: bool,
}

impl Default for ItemMesh {
    fn default() -> Self {
        Self {
            item_id: 1,
            shaded: true,
        }
    }
}

impl KindPayload for ItemMesh {
    const META: KindMeta = KindMeta::new(
        BlockId::MESH,
        "Generated Item Mesh",
        Color::WHITE,
        Vector3::splat(2.0),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("item_id", self.item_id);
        out.put("shaded", self.shaded);
        Ok(())
    }
}

/// A cloud.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cloud;

impl KindPayload for Cloud {
    const META: KindMeta = KindMeta::new(
        BlockId::CLOUD,
        "Generated Cloud",
        Color::WHITE,
        Vector3::new(8.0, 2.0, 8.0),
    );

    fn write_fields(&self, _: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_logo_tones() {
        let mut out = WireMap::new();
        LogoIcon::default()
            .write_fields(&mut out, &WireContext::default())
            .unwrap();
        assert_eq!(out["color2"]["value"], json!({"r": 175, "g": 85, "b": 217}));
        assert_eq!(out["color3"]["value"], json!({"r": 141, "g": 62, "b": 229}));
    }

    #[test]
    fn test_string_lights_bulbs() {
        let mut out = WireMap::new();
        StringLights::default()
            .write_fields(&mut out, &WireContext::default())
            .unwrap();
        assert_eq!(out["bulb_colors"]["type"], "Color8_Array");
        assert_eq!(out["bulb_colors"]["value"].as_array().map(Vec::len), Some(5));
        assert_eq!(out["blink_speed"], 0.0);
    }

    #[test]
    fn test_cornstalk_writes_corn_as_pattern_color() {
        let mut out = WireMap::new();
        Cornstalk::default()
            .write_fields(&mut out, &WireContext::default())
            .unwrap();
        assert_eq!(out["pattern_color"]["value"], json!({"r": 255, "g": 207, "b": 0}));
    }

    #[test]
    fn test_plain_decorations_write_nothing() {
        let mut out = WireMap::new();
        Statue::default()
            .write_fields(&mut out, &WireContext::default())
            .unwrap();
        Cloud.write_fields(&mut out, &WireContext::default()).unwrap();
        assert!(out.is_empty());
    }
}
