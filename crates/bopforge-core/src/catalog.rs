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

//! Numeric catalogs of the game: block ids, shapes, patterns, skies and so on.
//!
//! Every catalog is an open newtype around the raw integer written to the
//! file. Named constants cover the known values, while [`new`](BlockId::new)
//! accepts any integer so ids added by newer game versions still pass
//! through unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines an open catalog newtype with named constants.
#[macro_export]
#[doc(hidden)]
macro_rules! bop_catalog {
    (
        $(#[$attr:meta])*
        $vis:vis struct $name:ident: $ty:ty {
            $(
                $(#[$id_attr:meta])*
                const $id_name:ident = $id_value:expr;
            )*
        }
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        $vis struct $name($ty);

        impl $name {
            $(
                $(#[$id_attr])*
                #[doc = concat!("Raw value `", stringify!($id_value), "`.")]
                pub const $id_name: Self = Self($id_value);
            )*

            /// Every named value, in declaration order.
            pub const NAMED: &'static [(&'static str, Self)] = &[
                $( (stringify!($id_name), Self($id_value)), )*
            ];

            /// Wraps a raw value, known or not.
            #[inline]
            pub const fn new(raw: $ty) -> Self {
                Self(raw)
            }

            /// Returns the raw value written to the file.
            #[inline]
            pub const fn raw(&self) -> $ty {
                self.0
            }

            /// Returns the constant name of a known value.
            pub fn name(&self) -> Option<&'static str> {
                Self::NAMED
                    .iter()
                    .find(|(_, value)| value == self)
                    .map(|(name, _)| *name)
            }
        }

        impl From<$ty> for $name {
            fn from(raw: $ty) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i128 {
            fn from(value: $name) -> Self {
                i128::from(value.0)
            }
        }

        impl From<$name> for serde_json::Value {
            fn from(value: $name) -> Self {
                serde_json::Value::from(value.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self.name() {
                    Some(name) => write!(f, "{}::{name}", stringify!($name)),
                    None => write!(f, "{}({})", stringify!($name), self.0),
                }
            }
        }
    };
}

bop_catalog! {
    /// The numeric id that tells the game which kind of object a block is.
    pub struct BlockId: i64 {
        /// Unknown or unset ids.
        const NULL = -1;
        /// All primitives share this id and differ by [`Shape`].
        const PRIMITIVE = 0;
        const PINE_TREE = 1000;
        const LOGO = 1002;
        const LOGO_ICON = 1003;
        const PALM_TREE = 1004;
        const STREET_LAMP = 1005;
        const FLOWER = 1006;
        const FENCE = 1007;
        const TORCH = 1008;
        const STRING_LIGHTS = 1009;
        const HYACINTH = 1010;
        const ANALOG_CLOCK = 1012;
        const ROSE = 1014;
        const TREE = 1015;
        const CORNSTALK = 1016;
        const MESH = 1100;
        const CLOUD = 1101;
        const STATUE = 1102;
        const SPRING = 2000;
        const WATER = 2001;
        const SPAWN = 2002;
        const CHECKPOINT = 2003;
        const TOKEN = 2004;
        const LADDER = 2005;
        const ICE = 2006;
        const COMPLETION_STAR = 2007;
        const MAGMA = 2008;
        const BOOST_PANEL = 2009;
        const SPEED_PANEL = 2010;
        const GRATES = 2011;
        const DISAPPEARING_BLOCK = 2012;
        const MISSILE_LAUNCHER = 2013;
        const BREAKABLE_BLOCK = 2014;
        const CANNON = 2015;
        const PORTAL = 2016;
        const DIALOGUE_SIGN = 2019;
        const WEB = 2025;
        const NOTE_BLOCK = 2026;
        const LEVEL_PAINTING = 2027;
        const BOPI_SPAWNER = 3000;
        const GLOOMLIGHT_SPAWNER = 3100;
        const ITEM_GRANTER = 60000;
        const BLEEDING_EYE = 61366;
    }
}

impl BlockId {
    /// Old name of [`BlockId::MAGMA`].
    pub const LAVA: Self = Self::MAGMA;
}

bop_catalog! {
    /// The shape of a primitive block.
    pub struct Shape: i64 {
        const CUBE = 0;
        const RAMP = 1;
        const CYLINDER = 2;
        const HALF_CYLINDER = 3;
        const QUARTER_CYLINDER = 4;
        const SPHERE = 5;
        const HALF_SPHERE = 6;
        const CORNER_RAMP = 7;
        const CONE = 8;
        const TORUS = 9;
        const THIN_TORUS = 10;
        const TETRAHEDRON = 11;
        const PYRAMID = 12;
        const PYRAMID_CORNER = 13;
        const OCTAHEDRON = 14;
        const ROUNDED_RAMP = 15;
        const INVERTED_ROUNDED_RAMP = 16;
        const HOLLOW_CYLINDER = 17;
        const HALF_HOLLOW_CYLINDER = 18;
        const QUARTER_HOLLOW_CYLINDER = 19;
        const HOLE = 20;
        const ARCH = 21;
        const HALF_ARCH = 22;
        const PENTAGON = 23;
        const HEXAGON = 24;
        const HEPTAGON = 25;
        const OCTAGON = 26;
        const STAR = 27;
        const HEART = 28;
        const OPEN_CRESCENT = 29;
        const CLOSING_CRESCENT = 30;
        const EGG = 31;
        const LOOP = 32;
    }
}

bop_catalog! {
    /// The repeating surface pattern of a tilable object.
    pub struct Pattern: i64 {
        const CHECKERBOARD = 0;
        const HEX = 1;
        const STRIPES = 2;
        const PLANKS = 3;
        const ZIG_ZAG = 4;
        const BRICKS = 5;
        const LARGE_BRICKS = 6;
        const WAVES = 7;
        const CHEVRON = 8;
        const GEOMETRIC = 9;
        const HORIZONTAL_STRIPES = 10;
        const VERTICAL_STRIPES = 11;
        const X = 12;
        const PLATE = 13;
        const RADIAL = 14;
        const ARROW = 15;
        const CIRCLES = 16;
        const EVEN_CIRCLES = 17;
        const MESSY_CIRCLES = 18;
        const SQUARES = 19;
        const EVEN_SQUARES = 20;
        const MESSY_SQUARES = 21;
        const TRIANGLES = 22;
        const EVEN_TRIANGLES = 23;
        const MESSY_TRIANGLES = 24;
        const DIAMONDS = 25;
        const ODD_DIAMONDS = 26;
        const MESSY_DIAMONDS = 27;
        const LARGE_DIAMONDS = 28;
        const STARS = 29;
        const EVEN_STARS = 30;
        const MESSY_STARS = 31;
        const HEARTS = 32;
        const EVEN_HEARTS = 33;
        const MESSY_HEARTS = 34;
        const NOTE = 35;
        const BEAMED_NOTE = 36;
    }
}

bop_catalog! {
    /// The skybox of a level.
    pub struct Sky: i64 {
        const DAY = 0;
        const SUNSET = 1;
        const NIGHT = 2;
        const RAINDROP = 3;
        const ALIEN = 4;
        const DULL = 5;
        const WINTER = 6;
        const INFERNAL = 7;
        const FLAME = 8;
        const GOLDEN = 9;
        const VIOLET = 10;
        const THE_SUN = 11;
        const HALLOWEEN = 12;
        const OVERCAST = 13;
        const STARLIT_CITY = 14;
        const VOID = 15;
        const DESERT = 16;
        const FAR_GONE = 17;
        const SUNKEN = 18;
        const EGGSTAR = 19;
        const BLOOM = 20;
        const DEPENDENCE = 21;
        const RAPTURE = 22;
        const WASTES = 23;
    }
}

bop_catalog! {
    /// Client-side weather particles.
    pub struct Weather: i64 {
        const CLEAR = 0;
        const SNOW = 1;
        const RAIN = 2;
        const VOID = 3;
        const AUTUMN = 4;
    }
}

bop_catalog! {
    /// Sound ids, used mostly as note block instruments.
    pub struct Sound: i64 {
        const SPRING = 0;
        const COMPLETION_STAR = 1;
        const TOKEN = 2;
        const SPLASH = 3;
        const DISAPPEAR = 4;
        const CANNON_ENTER = 5;
        /// Loops after being emitted.
        const NOTE_LOOP = 6;
        const FIREWORKS = 7;
        /// Loops after being emitted.
        const PORTAL_AMBIENCE = 8;
        const PORTAL_ENTER = 9;
        const PORTAL_EXIT = 10;
        const PIANO = 11;
        const CHORD = 12;
        const SYNTH = 13;
        const VIOLA = 14;
        const STAR_COLLECT = 15;
    }
}

bop_catalog! {
    /// Soundtrack ids for the level playlist.
    pub struct Music: i64 {
        const SERENE = 0;
        const SWAYING_DREAMS = 1;
        const PLAYFUL_WALTZ = 2;
        const SICILIAN_STREET = 3;
        const CONTEMPLATION = 4;
        const CAVE_AMBIENCE = 5;
        const FUNKY = 6;
        const DARKNESS_APPROACHES = 7;
        const CARNIVAL = 8;
        const LATE_NIGHT_FIREWORKS = 9;
        const I_DONT_KNOW = 10;
        const WINTER_FOREST = 11;
        const ASSAULT_ON_THE_EAR_DRUMS = 12;
        const BLOOD_MOON = 13;
        const ORGAN = 14;
        const BAMBA = 15;
        const TORTUGA = 16;
        const FRIVOLOUS_FLUTES = 17;
        const PEACEFUL = 18;
        const SIXTY_FOUR = 64;
    }
}

impl Music {
    /// Old name of [`Music::ORGAN`].
    #[deprecated(note = "renamed to Music::ORGAN")]
    pub const ISAIAH_NEW_SONG: Self = Self::ORGAN;
}

bop_catalog! {
    /// Textures exclusive to grates.
    pub struct GratesStyle: i64 {
        const GRID = 0;
        const X = 1;
        const BOX = 2;
        const ROUNDED_BOX = 3;
        const TILES = 4;
        const OVERLAPPING_TILES = 5;
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_values_have_names() {
        assert_eq!(BlockId::PORTAL.raw(), 2016);
        assert_eq!(BlockId::PORTAL.name(), Some("PORTAL"));
        assert_eq!(Shape::LOOP.to_string(), "Shape::LOOP");
    }

    #[test]
    fn test_unknown_values_round_trip() {
        let future = Sky::new(99);
        assert_eq!(future.name(), None);
        assert_eq!(future.to_string(), "Sky(99)");
        assert_eq!(serde_json::to_value(future).unwrap(), json!(99));
        assert_eq!(serde_json::from_value::<Sky>(json!(99)).unwrap(), future);
    }

    #[test]
    fn test_aliases_share_values() {
        assert_eq!(BlockId::LAVA, BlockId::MAGMA);
        #[allow(deprecated)]
        let old = Music::ISAIAH_NEW_SONG;
        assert_eq!(old, Music::ORGAN);
        assert_eq!(old.name(), Some("ORGAN"));
    }

    #[test]
    fn test_catalogs_convert_into_array_values() {
        let raw: i128 = Music::SIXTY_FOUR.into();
        assert_eq!(raw, 64);
    }
}
