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

//! Gameplay blocks: spawns, hazards, movement modifiers and interactive blocks.

use bopforge_core::catalog::{BlockId, GratesStyle, Pattern, Shape, Sound};
use bopforge_core::{Color, GameVersion, Int64Array, Vector3, WireError, WireMap, WireMapExt};

use super::{tilable, KindMeta, KindPayload, WireContext};
use crate::entity::tiling::Tiling;

const V1_1_0: GameVersion = GameVersion::new(1, 1, 0);

/// Where players appear when the level starts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spawn {
    /// The surface pattern.
    pub tiling: Tiling,
}

impl KindPayload for Spawn {
    const META: KindMeta = KindMeta::new(
        BlockId::SPAWN,
        "Generated Spawn",
        Color::rgb(160, 30, 176),
        Vector3::new(4.0, 1.0, 4.0),
    );

    tilable!();

    fn write_fields(&self, _: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        Ok(())
    }
}

/// A respawn point. Its pattern is drawn on the flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Checkpoint {
    /// The flag pattern.
    pub tiling: Tiling,
}

impl KindPayload for Checkpoint {
    const META: KindMeta = KindMeta::new(
        BlockId::CHECKPOINT,
        "Generated Checkpoint",
        Color::rgb(160, 30, 176),
        Vector3::new(2.0, 4.0, 2.0),
    );

    tilable!();

    fn write_fields(&self, _: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        Ok(())
    }
}

/// A completion star.
///
/// Its `star_id` is not stored: the level supplies the star's current
/// position in its star order when writing.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionStar {
    /// The surface pattern.
    pub tiling: Tiling,
    /// Silences the collection sound.
    pub mute: bool,
    /// How high the star hovers.
    pub float_height: f64,
}

impl Default for CompletionStar {
    fn default() -> Self {
        Self {
            tiling: Tiling::default(),
            mute: false,
            float_height: 1.5,
        }
    }
}

impl KindPayload for CompletionStar {
    const META: KindMeta = KindMeta::new(
        BlockId::COMPLETION_STAR,
        "Generated Completion Star",
        Color::rgb(94, 0, 176),
        Vector3::splat(4.0),
    );

    tilable!();

    fn write_fields(&self, out: &mut WireMap, ctx: &WireContext) -> Result<(), WireError> {
        out.put("mute", self.mute);
        out.put("star_id", ctx.star_id);
        out.put("float_height", self.float_height);
        Ok(())
    }
}

/// Bounces players upward.
#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    /// Color of the base plate.
    pub base_color: Color,
    /// Color of the coil.
    pub coil_color: Color,
    /// Strength of the bounce.
    pub bounce_force: f64,
    /// Whether ground pounding onto the spring gives a stronger bounce.
    pub can_ground_pound: bool,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            base_color: Color::rgb(84, 84, 84),
            coil_color: Color::rgb(92, 92, 92),
            bounce_force: 50.0,
            can_ground_pound: true,
        }
    }
}

impl KindPayload for Spring {
    const META: KindMeta = KindMeta::new(
        BlockId::SPRING,
        "Generated Spring",
        Color::rgb(226, 181, 4),
        Vector3::splat(2.0),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("bounce_force", self.bounce_force);
        out.put("can_ground_pound", self.can_ground_pound);
        out.put_wire("base_color", &self.base_color)?;
        out.put_wire("pattern_color", &self.coil_color)?;
        Ok(())
    }
}

/// Damages players on contact. Formerly known as lava.
#[derive(Debug, Clone, PartialEq)]
pub struct Magma {
    /// Color of the glowing veins.
    pub pattern_color: Color,
    /// The size of one pattern tile, in world units.
    pub pattern_scale: f64,
    /// The geometric shape.
    pub shape: Shape,
    damage_amount: f64,
}

impl Default for Magma {
    fn default() -> Self {
        Self {
            pattern_color: Color::rgb(246, 84, 20),
            pattern_scale: 4.0,
            shape: Shape::CUBE,
            damage_amount: 25.0,
        }
    }
}

impl Magma {
    /// Damage dealt per hit, never negative.
    #[inline]
    pub fn damage_amount(&self) -> f64 {
        self.damage_amount
    }

    /// Sets the damage dealt per hit. Negative values become zero.
    #[inline]
    pub fn set_damage_amount(&mut self, value: f64) {
        self.damage_amount = value.max(0.0);
    }

    /// Builder form of [`Magma::set_damage_amount`].
    #[inline]
    pub fn with_damage_amount(mut self, value: f64) -> Self {
        self.set_damage_amount(value);
        self
    }
}

impl KindPayload for Magma {
    const META: KindMeta = KindMeta::new(
        BlockId::MAGMA,
        "Generated Magma",
        Color::rgb(96, 20, 0),
        Vector3::splat(2.0),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put_wire("block_pattern_color", &self.pattern_color)?;
        out.put("damage_amount", self.damage_amount);
        out.put("pattern_scale", 2.0 / self.pattern_scale);
        out.put("shape", self.shape);
        Ok(())
    }
}

/// A swimmable volume.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Water;

impl KindPayload for Water {
    const META: KindMeta = KindMeta::new(
        BlockId::WATER,
        "Generated Water",
        Color::rgb(71, 130, 255),
        Vector3::splat(4.0),
    );

    fn write_fields(&self, _: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        Ok(())
    }
}

/// A climbable surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Ladder {
    /// The surface pattern.
    pub tiling: Tiling,
    /// Climbing speed multiplier.
    pub climbing_speed: f64,
}

impl Default for Ladder {
    fn default() -> Self {
        Self {
            tiling: Tiling::default(),
            climbing_speed: 1.0,
        }
    }
}

impl KindPayload for Ladder {
    const META: KindMeta = KindMeta::new(
        BlockId::LADDER,
        "Generated Ladder",
        Color::rgb(78, 52, 46),
        Vector3::new(2.0, 2.0, 1.0),
    );

    tilable!();

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("climbing_speed", self.climbing_speed);
        Ok(())
    }
}

/// A collectible that heals and counts toward the player's tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Health restored on pickup.
    pub heal_amount: f64,
    /// Seconds before the token comes back.
    pub regeneration_time: f64,
    /// Tokens granted on pickup.
    pub worth: i64,
    /// Model variant.
    pub model: i64,
}

impl Default for Token {
    fn default() -> Self {
        Self {
            heal_amount: 5.0,
            regeneration_time: 45.0,
            worth: 1,
            model: 0,
        }
    }
}

impl KindPayload for Token {
    const META: KindMeta = KindMeta::new(
        BlockId::TOKEN,
        "Generated Token",
        Color::rgb(236, 126, 0),
        Vector3::splat(2.0),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("heal_amount", self.heal_amount);
        out.put("regeneration_time", self.regeneration_time);
        out.put("worth", self.worth);
        out.put("model", self.model);
        Ok(())
    }
}

/// A block that vanishes shortly after being touched.
#[derive(Debug, Clone, PartialEq)]
pub struct DisappearingBlock {
    /// The surface pattern.
    pub tiling: Tiling,
    /// Seconds between the first touch and the disappearance.
    pub disappears_after: f64,
    /// Seconds before the block comes back.
    pub regeneration_time: f64,
    /// Only players trigger the block.
    pub players_only: bool,
}

impl Default for DisappearingBlock {
    fn default() -> Self {
        Self {
            tiling: Tiling::with_pattern(Pattern::X),
            disappears_after: 2.0,
            regeneration_time: 5.0,
            players_only: false,
        }
    }
}

impl KindPayload for DisappearingBlock {
    const META: KindMeta = KindMeta::new(
        BlockId::DISAPPEARING_BLOCK,
        "Generated Disappearing Block",
        Color::rgb(122, 9, 0),
        Vector3::splat(2.0),
    );

    tilable!();

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("disappears_after", self.disappears_after);
        out.put("regen_time", self.regeneration_time);
        out.put("players_only", self.players_only);
        Ok(())
    }
}

/// See-through floor with its own set of textures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Grates {
    /// The grate texture, written as the block pattern.
    pub style: GratesStyle,
}

impl Default for Grates {
    fn default() -> Self {
        Self {
            style: GratesStyle::GRID,
        }
    }
}

impl KindPayload for Grates {
    const META: KindMeta = KindMeta::new(
        BlockId::GRATES,
        "Generated Grates",
        Color::rgb(0, 10, 18),
        Vector3::new(4.0, 1.0, 4.0),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("block_pattern", self.style);
        Ok(())
    }
}

/// Changes the player's speed for a while.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedPanel {
    /// The speed given to the player.
    pub new_speed: f64,
    /// Seconds the speed lasts.
    pub duration: f64,
}

impl Default for SpeedPanel {
    fn default() -> Self {
        Self {
            new_speed: 30.0,
            duration: 10.0,
        }
    }
}

impl KindPayload for SpeedPanel {
    const META: KindMeta = KindMeta::new(
        BlockId::SPEED_PANEL,
        "Generated Speed Panel",
        Color::rgb(27, 0, 32),
        Vector3::new(3.0, 1.0, 3.0),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("new_speed", self.new_speed);
        out.put("duration", self.duration);
        Ok(())
    }
}

/// Launches players forward and up.
#[derive(Debug, Clone, PartialEq)]
pub struct BoostPanel {
    /// Horizontal launch strength.
    pub boost: f64,
    /// Vertical launch strength.
    pub vertical_boost: f64,
}

impl Default for BoostPanel {
    fn default() -> Self {
        Self {
            boost: 75.0,
            vertical_boost: 15.0,
        }
    }
}

impl KindPayload for BoostPanel {
    const META: KindMeta = KindMeta::new(
        BlockId::BOOST_PANEL,
        "Generated Boost Panel",
        Color::rgb(0, 2, 34),
        Vector3::new(3.0, 1.0, 3.0),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("boost", self.boost);
        out.put("vertical_boost", self.vertical_boost);
        Ok(())
    }
}

/// A slippery block.
#[derive(Debug, Clone, PartialEq)]
pub struct Ice {
    /// The geometric shape.
    pub shape: Shape,
    /// How slippery the surface is.
    pub slipperiness: f64,
    opacity: u8,
}

impl Default for Ice {
    fn default() -> Self {
        Self {
            shape: Shape::CUBE,
            slipperiness: 1.0,
            opacity: 255,
        }
    }
}

impl Ice {
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
}

impl KindPayload for Ice {
    const META: KindMeta = KindMeta::new(
        BlockId::ICE,
        "Generated Ice",
        Color::rgb(138, 220, 223),
        Vector3::splat(2.0),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("opacity", self.opacity);
        out.put("shape", self.shape);
        out.put("slipperiness", self.slipperiness);
        Ok(())
    }
}

/// A block that breaks after taking enough damage.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakableBlock {
    /// The surface pattern.
    pub tiling: Tiling,
    /// Damage needed to break the block.
    pub max_health: f64,
    /// Seconds before the block comes back.
    pub regeneration_time: f64,
}

impl Default for BreakableBlock {
    fn default() -> Self {
        Self {
            tiling: Tiling::with_pattern(Pattern::BRICKS),
            max_health: 40.0,
            regeneration_time: 10.0,
        }
    }
}

impl KindPayload for BreakableBlock {
    const META: KindMeta = KindMeta::new(
        BlockId::BREAKABLE_BLOCK,
        "Generated Breakable Block",
        Color::rgb(129, 0, 40),
        Vector3::splat(2.0),
    );

    tilable!();

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("max_health", self.max_health);
        out.put("regeneration_time", self.regeneration_time);
        Ok(())
    }
}

/// Shoots players out in the direction it faces.
#[derive(Debug, Clone, PartialEq)]
pub struct Cannon {
    /// Launch strength.
    pub power: f64,
}

impl Default for Cannon {
    fn default() -> Self {
        Self { power: 50.0 }
    }
}

impl KindPayload for Cannon {
    const META: KindMeta = KindMeta::new(
        BlockId::CANNON,
        "Generated Cannon",
        Color::rgb(42, 2, 47),
        Vector3::splat(2.0),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("power", self.power);
        Ok(())
    }
}

/// Teleports players to one of its destination portals.
///
/// Destinations are level UIDs. The level checks that each one exists and is
/// a portal when the portal is added and again when the level is written.
#[derive(Debug, Clone, PartialEq)]
pub struct Portal {
    /// The surface pattern. Its color is the portal's secondary color.
    pub tiling: Tiling,
    /// Seconds before teleporting.
    pub delay: f64,
    /// UIDs of the destination portals.
    pub destinations: Int64Array,
    opacity: u8,
}

impl Default for Portal {
    fn default() -> Self {
        Self {
            tiling: Tiling::new(Pattern::CHECKERBOARD, Color::rgb(158, 1, 255)),
            delay: 1.0,
            destinations: Int64Array::new(),
            opacity: 204,
        }
    }
}

impl Portal {
    /// Adds a destination portal by UID.
    #[inline]
    pub fn add_destination(&mut self, uid: u32) {
        self.destinations.add(uid);
    }

    /// Builder form of [`Portal::add_destination`].
    #[inline]
    pub fn with_destination(mut self, uid: u32) -> Self {
        self.add_destination(uid);
        self
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
}

impl KindPayload for Portal {
    const META: KindMeta = KindMeta::new(
        BlockId::PORTAL,
        "Generated Portal",
        Color::rgb(31, 49, 255),
        Vector3::new(10.0, 10.0, 2.0),
    );

    tilable!();

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("delay", self.delay);
        out.put_wire("destinations", &self.destinations)?;
        out.put("opacity", self.opacity);
        Ok(())
    }
}

/// Slows players down.
#[derive(Debug, Clone, PartialEq)]
pub struct Web {
    /// How strongly players are held.
    pub stickiness: f64,
}

impl Default for Web {
    fn default() -> Self {
        Self { stickiness: 0.5 }
    }
}

impl KindPayload for Web {
    const META: KindMeta = KindMeta::new(
        BlockId::WEB,
        "Generated Web",
        Color::WHITE,
        Vector3::new(6.0, 1.0, 6.0),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("stickiness", self.stickiness);
        Ok(())
    }
}

/// Fires homing missiles at players.
#[derive(Debug, Clone, PartialEq)]
pub struct MissileLauncher {
    /// Seconds between shots.
    pub delay: f64,
    /// Missile size multiplier.
    pub missile_size: f64,
    /// Missile speed.
    pub missile_speed: f64,
    /// Damage dealt by an explosion.
    pub explosion_damage: f64,
    /// Knockback of an explosion.
    pub explosion_force: f64,
    /// Radius of an explosion.
    pub explosion_size: f64,
    /// Model variant.
    pub model: i64,
}

impl Default for MissileLauncher {
    fn default() -> Self {
        Self {
            delay: 5.0,
            missile_size: 1.0,
            missile_speed: 15.0,
            explosion_damage: 50.0,
            explosion_force: 10.0,
            explosion_size: 5.0,
            model: 0,
        }
    }
}

impl KindPayload for MissileLauncher {
    const META: KindMeta = KindMeta::new(
        BlockId::MISSILE_LAUNCHER,
        "Generated Missile Launcher",
        Color::rgb(160, 30, 176),
        Vector3::splat(2.0),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("delay", self.delay);
        out.put("missile_size", self.missile_size);
        out.put("missile_speed", self.missile_speed);
        out.put("explosion_damage", self.explosion_damage);
        out.put("explosion_force", self.explosion_force);
        out.put("explosion_size", self.explosion_size);
        out.put("model", self.model);
        Ok(())
    }
}

/// Plays a note and bounces players.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteBlock {
    /// The surface pattern of the frame.
    pub tiling: Tiling,
    /// Color of the center face.
    pub center_color: Color,
    /// Pattern of the center face.
    pub center_pattern: Pattern,
    /// Pattern color of the center face.
    pub center_pattern_color: Color,
    /// Strength of the bounce.
    pub bounce_force: f64,
    /// The sound played.
    pub instrument: Sound,
    /// Pitch multiplier of the sound.
    pub pitch: f64,
}

impl Default for NoteBlock {
    fn default() -> Self {
        Self {
            tiling: Tiling::default(),
            center_color: Color::rgb(26, 23, 47),
            center_pattern: Pattern::NOTE,
            center_pattern_color: Color::rgb(176, 131, 241),
            bounce_force: 50.0,
            instrument: Sound::PIANO,
            pitch: 1.0,
        }
    }
}

impl KindPayload for NoteBlock {
    const META: KindMeta = KindMeta::new(
        BlockId::NOTE_BLOCK,
        "Generated Note Block",
        Color::rgb(77, 31, 144),
        Vector3::splat(2.0),
    )
    .since(V1_1_0);

    tilable!();

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put_wire("center_color", &self.center_color)?;
        out.put("center_pattern", self.center_pattern);
        out.put_wire("center_pattern_color", &self.center_pattern_color)?;
        out.put("bounce_force", self.bounce_force);
        out.put("instrument", self.instrument);
        out.put("pitch_scale", self.pitch);
        Ok(())
    }
}

/// A sign on a pole showing a line of dialogue.
#[derive(Debug, Clone, PartialEq)]
pub struct Sign {
    /// The surface pattern of the board.
    pub tiling: Tiling,
    /// The displayed text.
    pub text: String,
    /// Color of the pole.
    pub pole_color: Color,
    /// Pattern of the pole.
    pub pole_pattern: Pattern,
    /// Pattern color of the pole.
    pub pole_pattern_color: Color,
    pole_pattern_opacity: u8,
}

impl Default for Sign {
    fn default() -> Self {
        Self {
            tiling: Tiling::with_pattern(Pattern::PLANKS),
            text: "Hello World!".to_owned(),
            pole_color: Color::rgb(83, 41, 11),
            pole_pattern: Pattern::PLANKS,
            pole_pattern_color: Color::BLACK,
            pole_pattern_opacity: 60,
        }
    }
}

impl Sign {
    /// Creates a sign showing `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// The pole pattern opacity, in `0..=255`.
    #[inline]
    pub fn pole_pattern_opacity(&self) -> u8 {
        self.pole_pattern_opacity
    }

    /// Sets the pole pattern opacity, clamped to `0..=255`.
    #[inline]
    pub fn set_pole_pattern_opacity(&mut self, value: i64) {
        self.pole_pattern_opacity = value.clamp(0, 255) as u8;
    }
}

impl KindPayload for Sign {
    const META: KindMeta = KindMeta::new(
        BlockId::DIALOGUE_SIGN,
        "Generated Sign",
        Color::rgb(155, 60, 17),
        Vector3::new(3.0, 3.0, 1.0),
    )
    .since(V1_1_0);

    tilable!();

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("text", self.text.as_str());
        out.put_wire("pole_color", &self.pole_color)?;
        out.put("pole_pattern", self.pole_pattern);
        out.put_wire("pole_pattern_color", &self.pole_pattern_color)?;
        out.put("pole_pattern_opacity", self.pole_pattern_opacity);
        Ok(())
    }
}

/// A painting that links to a published level.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelPainting {
    /// The surface pattern of the frame.
    pub tiling: Tiling,
    level_id: u64,
}

impl Default for LevelPainting {
    fn default() -> Self {
        Self {
            tiling: Tiling::default(),
            level_id: 4193,
        }
    }
}

impl LevelPainting {
    /// Creates a painting of the given level.
    pub fn new(level_id: i64) -> Self {
        let mut painting = Self::default();
        painting.set_level_id(level_id);
        painting
    }

    /// The id of the shown level, at least 1.
    #[inline]
    pub fn level_id(&self) -> u64 {
        self.level_id
    }

    /// Sets the id of the shown level. Values below 1 become 1.
    #[inline]
    pub fn set_level_id(&mut self, id: i64) {
        self.level_id = id.max(1) as u64;
    }
}

impl KindPayload for LevelPainting {
    const META: KindMeta = KindMeta::new(
        BlockId::LEVEL_PAINTING,
        "Generated Level Painting",
        Color::rgb(160, 29, 175),
        Vector3::new(16.0, 12.0, 2.0),
    )
    .since(V1_1_0);

    tilable!();

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("level_id", self.level_id);
        Ok(())
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields<K: KindPayload>(payload: &K, ctx: &WireContext) -> WireMap {
        let mut out = WireMap::new();
        payload.write_fields(&mut out, ctx).unwrap();
        out
    }

    #[test]
    fn test_star_takes_id_from_context() {
        let out = fields(&CompletionStar::default(), &WireContext { star_id: 3 });
        assert_eq!(out["star_id"], 3);
        assert_eq!(out["float_height"], 1.5);
    }

    #[test]
    fn test_magma_damage_is_never_negative() {
        let mut magma = Magma::default().with_damage_amount(-10.0);
        assert_eq!(magma.damage_amount(), 0.0);
        magma.set_damage_amount(12.5);
        assert_eq!(fields(&magma, &WireContext::default())["damage_amount"], 12.5);
    }

    #[test]
    fn test_magma_pattern_scale_is_inverted() {
        let out = fields(&Magma::default(), &WireContext::default());
        assert_eq!(out["pattern_scale"], 0.5);
    }

    #[test]
    fn test_spring_coil_is_written_as_pattern_color() {
        let out = fields(&Spring::default(), &WireContext::default());
        assert_eq!(out["pattern_color"]["value"], json!({"r": 92, "g": 92, "b": 92}));
    }

    #[test]
    fn test_disappearing_block_uses_short_regen_key() {
        let out = fields(&DisappearingBlock::default(), &WireContext::default());
        assert!(out.contains_key("regen_time"));
        assert!(!out.contains_key("regeneration_time"));
    }

    #[test]
    fn test_portal_destinations() {
        let portal = Portal::default().with_destination(7).with_destination(42);
        let out = fields(&portal, &WireContext::default());
        assert_eq!(
            out["destinations"],
            json!({"type": "Int64_Array", "value": [7, 42]})
        );
        assert_eq!(out["opacity"], 204);
    }

    #[test]
    fn test_clamped_fields() {
        let mut painting = LevelPainting::new(-5);
        assert_eq!(painting.level_id(), 1);
        painting.set_level_id(77);
        assert_eq!(painting.level_id(), 77);

        let mut sign = Sign::new("Welcome");
        sign.set_pole_pattern_opacity(1000);
        assert_eq!(sign.pole_pattern_opacity(), 255);

        let mut ice = Ice::default();
        ice.set_opacity(-1);
        assert_eq!(ice.opacity(), 0);
    }

    #[test]
    fn test_note_block_fields() {
        let out = fields(&NoteBlock::default(), &WireContext::default());
        let keys: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            [
                "center_color",
                "center_pattern",
                "center_pattern_color",
                "bounce_force",
                "instrument",
                "pitch_scale"
            ]
        );
        assert_eq!(out["instrument"], 11);
        assert_eq!(out["center_pattern"], 35);
    }

    #[test]
    fn test_grates_style_is_the_block_pattern() {
        let grates = Grates {
            style: GratesStyle::ROUNDED_BOX,
        };
        assert_eq!(fields(&grates, &WireContext::default())["block_pattern"], 3);
    }
}
