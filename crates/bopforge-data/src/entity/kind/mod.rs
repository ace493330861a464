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

//! Per-kind payloads of an entity.
//!
//! Every kind of object the game knows is a payload struct implementing
//! [`KindPayload`]. The [`EntityKind`] enum wraps one of them and dispatches
//! to it when an entity is validated or written.

mod action;
mod npc;
mod primitive;
mod scenery;

pub use action::{
    BoostPanel, BreakableBlock, Cannon, Checkpoint, CompletionStar, DisappearingBlock, Grates, Ice,
    Ladder, LevelPainting, Magma, MissileLauncher, NoteBlock, Portal, Sign, Spawn, SpeedPanel,
    Spring, Token, Water, Web,
};
pub use npc::{BodyColors, BopiSpawner, Outfit, NO_ITEM};
pub use primitive::{Block, TRANSPARENCY_LOOKUP};
pub use scenery::{
    AnalogClock, BleedingEye, Cloud, Cornstalk, Fence, Flower, Hyacinth, ItemMesh, Logo, LogoColors,
    LogoIcon, PalmTree, PineTree, Rose, Statue, StreetLamp, StringLights, Torch, Tree,
};

use bopforge_core::catalog::BlockId;
use bopforge_core::{Color, GameVersion, Vector3, WireError, WireMap};

use super::decal::Decal;
use super::tiling::Tiling;
use super::Entity;

/// Static facts about a kind: its id, the defaults given to new entities and
/// the first game version that supports it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KindMeta {
    /// The id written as `block_id`.
    pub block_id: BlockId,
    /// The name given to new entities of this kind.
    pub default_name: &'static str,
    /// The color given to new entities of this kind.
    pub default_color: Color,
    /// The scale given to new entities of this kind.
    pub default_scale: Vector3,
    /// The oldest game version that knows this kind.
    pub min_version: GameVersion,
}

impl KindMeta {
    /// Creates the facts of a kind supported since the oldest level version.
    pub const fn new(
        block_id: BlockId,
        default_name: &'static str,
        default_color: Color,
        default_scale: Vector3,
    ) -> Self {
        Self {
            block_id,
            default_name,
            default_color,
            default_scale,
            min_version: GameVersion::MINIMUM_SUPPORTED,
        }
    }

    /// Raises the minimum game version.
    pub const fn since(mut self, min_version: GameVersion) -> Self {
        self.min_version = min_version;
        self
    }
}

/// Values supplied by the level when an entity is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WireContext {
    /// Position of the entity in the level's star order, for completion stars.
    pub star_id: usize,
}

/// The kind-specific part of an entity.
pub trait KindPayload: Clone + Default + Into<EntityKind> {
    /// Static facts about the kind.
    const META: KindMeta;

    /// The pattern capability, for tilable kinds.
    fn tiling(&self) -> Option<&Tiling> {
        None
    }

    /// Mutable access to the pattern capability, for tilable kinds.
    fn tiling_mut(&mut self) -> Option<&mut Tiling> {
        None
    }

    /// Writes the kind-specific keys, after the universal and tiling keys.
    fn write_fields(&self, out: &mut WireMap, ctx: &WireContext) -> Result<(), WireError>;
}

/// Implements the tiling accessors of a payload holding a `tiling` field.
macro_rules! tilable {
    () => {
        fn tiling(&self) -> Option<&$crate::entity::tiling::Tiling> {
            Some(&self.tiling)
        }

        fn tiling_mut(&mut self) -> Option<&mut $crate::entity::tiling::Tiling> {
            Some(&mut self.tiling)
        }
    };
}
pub(crate) use tilable;

/// Declares [`EntityKind`] and the constructors of [`Entity`].
macro_rules! entity_kinds {
    (
        $(
            $(#[$attr:meta])*
            $variant:ident($payload:ty) $(=> $ctor:ident)?
        ),* $(,)?
    ) => {
        /// The kind of an entity and its kind-specific fields.
        #[derive(Debug, Clone, PartialEq)]
        pub enum EntityKind {
            $(
                $(#[$attr])*
                $variant($payload),
            )*
        }

        $(
            impl From<$payload> for EntityKind {
                fn from(payload: $payload) -> Self {
                    Self::$variant(payload)
                }
            }
        )*

        impl EntityKind {
            /// Static facts about this kind.
            pub fn meta(&self) -> KindMeta {
                match self {
                    $( Self::$variant(_) => <$payload as KindPayload>::META, )*
                }
            }

            /// The name of the variant, for messages.
            pub fn kind_name(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => stringify!($variant), )*
                }
            }

            /// The pattern capability, for tilable kinds.
            pub fn tiling(&self) -> Option<&Tiling> {
                match self {
                    $( Self::$variant(payload) => payload.tiling(), )*
                }
            }

            /// Mutable access to the pattern capability, for tilable kinds.
            pub fn tiling_mut(&mut self) -> Option<&mut Tiling> {
                match self {
                    $( Self::$variant(payload) => payload.tiling_mut(), )*
                }
            }

            pub(crate) fn write_fields(
                &self,
                out: &mut WireMap,
                ctx: &WireContext,
            ) -> Result<(), WireError> {
                match self {
                    $( Self::$variant(payload) => payload.write_fields(out, ctx), )*
                }
            }
        }

        impl Entity {
            $($(
                #[doc = concat!("Creates a default [`", stringify!($variant), "`] entity.")]
                pub fn $ctor() -> Self {
                    Self::new(<$payload>::default())
                }
            )?)*
        }
    };
}

entity_kinds! {
    /// A primitive shape.
    Block(Block) => block,

    // --- Action blocks ---
    /// Where players appear.
    Spawn(Spawn) => spawn,
    /// A respawn point.
    Checkpoint(Checkpoint) => checkpoint,
    /// Collecting every star completes the level.
    CompletionStar(CompletionStar) => completion_star,
    /// Bounces players up.
    Spring(Spring) => spring,
    /// Damages players on contact.
    Magma(Magma) => magma,
    /// A swimmable volume.
    Water(Water) => water,
    /// A climbable surface.
    Ladder(Ladder) => ladder,
    /// A collectible that heals.
    Token(Token) => token,
    /// A block that vanishes after being stepped on.
    DisappearingBlock(DisappearingBlock) => disappearing_block,
    /// See-through floor.
    Grates(Grates) => grates,
    /// Changes the player speed for a while.
    SpeedPanel(SpeedPanel) => speed_panel,
    /// Launches players forward.
    BoostPanel(BoostPanel) => boost_panel,
    /// A slippery block.
    Ice(Ice) => ice,
    /// A block that breaks after taking damage.
    BreakableBlock(BreakableBlock) => breakable_block,
    /// Shoots players out.
    Cannon(Cannon) => cannon,
    /// Teleports players to other portals.
    Portal(Portal) => portal,
    /// Slows players down.
    Web(Web) => web,
    /// Fires missiles at players.
    MissileLauncher(MissileLauncher) => missile_launcher,
    /// Plays a note when bounced on.
    NoteBlock(NoteBlock) => note_block,
    /// Shows a line of dialogue.
    Sign(Sign) => sign,
    /// A picture linking to another level.
    LevelPainting(LevelPainting) => level_painting,

    // --- Decoration blocks ---
    /// A decorative flower.
    Flower(Flower) => flower,
    /// A corn plant.
    Cornstalk(Cornstalk) => cornstalk,
    /// A fence segment.
    Fence(Fence) => fence,
    /// A leafy tree.
    Tree(Tree) => tree,
    /// A pine tree, optionally snowy.
    PineTree(PineTree) => pine_tree,
    /// A palm tree.
    PalmTree(PalmTree) => palm_tree,
    /// A lamp post casting light.
    StreetLamp(StreetLamp) => street_lamp,
    /// A torch casting light.
    Torch(Torch) => torch,
    /// The game logo.
    Logo(Logo) => logo,
    /// The game logo icon.
    LogoIcon(LogoIcon) => logo_icon,
    /// A wire of blinking bulbs.
    StringLights(StringLights) => string_lights,
    /// A rose that damages players.
    Rose(Rose) => rose,
    /// An avatar item shown as a mesh.
    ItemMesh(ItemMesh) => item_mesh,
    /// A cloud.
    Cloud(Cloud) => cloud,
    /// A statue.
    Statue(Statue) => statue,

    // --- NPC blocks ---
    /// Spawns a hostile bopi.
    BopiSpawner(BopiSpawner) => bopi_spawner,

    // --- Hidden blocks ---
    /// A clock showing the time.
    AnalogClock(AnalogClock) => analog_clock,
    /// An eye that bleeds.
    BleedingEye(BleedingEye) => bleeding_eye,
    /// A hyacinth flower.
    Hyacinth(Hyacinth) => hyacinth,

    // --- Unofficial blocks ---
    /// A flat image made from a transparent clothing item.
    Decal(Decal),
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use bopforge_core::catalog::Pattern;

    #[test]
    fn test_constructors_apply_kind_defaults() {
        let spring = Entity::spring();
        assert_eq!(spring.name, "Generated Spring");
        assert_eq!(spring.color, Color::rgb(226, 181, 4));
        assert_eq!(spring.scale, Vector3::splat(2.0));
        assert_eq!(spring.block_id(), BlockId::SPRING);
    }

    #[test]
    fn test_min_versions() {
        assert_eq!(Entity::block().min_version(), GameVersion::MINIMUM_SUPPORTED);
        assert_eq!(Entity::rose().min_version(), GameVersion::new(1, 0, 15));
        assert_eq!(Entity::note_block().min_version(), GameVersion::new(1, 1, 0));
        assert_eq!(Entity::sign().min_version(), GameVersion::new(1, 1, 0));
        assert_eq!(Entity::level_painting().min_version(), GameVersion::new(1, 1, 0));
        assert_eq!(Entity::cornstalk().min_version(), GameVersion::new(1, 1, 0));
        assert_eq!(Entity::tree().min_version(), GameVersion::new(1, 1, 0));
    }

    #[test]
    fn test_tiling_only_on_tilable_kinds() {
        assert!(Entity::block().kind.tiling().is_some());
        assert!(Entity::spring().kind.tiling().is_none());
        assert_eq!(
            Entity::disappearing_block().kind.tiling().map(|t| t.pattern),
            Some(Pattern::X)
        );
        assert_eq!(
            Entity::breakable_block().kind.tiling().map(|t| t.pattern),
            Some(Pattern::BRICKS)
        );
        assert_eq!(
            Entity::fence().kind.tiling().map(|t| t.pattern),
            Some(Pattern::PLANKS)
        );
    }

    #[test]
    fn test_each_kind_writes_its_own_id() {
        let ids = [
            (Entity::palm_tree(), BlockId::PALM_TREE),
            (Entity::bleeding_eye(), BlockId::BLEEDING_EYE),
            (Entity::logo_icon(), BlockId::LOGO_ICON),
            (Entity::statue(), BlockId::STATUE),
            (Entity::item_mesh(), BlockId::MESH),
        ];
        for (entity, id) in ids {
            assert_eq!(entity.block_id(), id, "{}", entity.kind.kind_name());
        }
    }
}
