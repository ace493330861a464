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

//! Spawners for non-player characters.

use bopforge_core::catalog::BlockId;
use bopforge_core::{Color, Int32Array, Vector3, WireError, WireMap, WireMapExt};

use super::{tilable, KindMeta, KindPayload, WireContext};
use crate::entity::tiling::Tiling;

/// Marks an avatar slot left empty.
pub const NO_ITEM: i64 = -1;

const SKIN: Color = Color::rgb(246, 156, 0);
const LEG: Color = Color::rgb(49, 51, 53);
const FOOT: Color = Color::rgb(17, 17, 17);

/// Skin colors of every body part of a bopi.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyColors {
    /// The head.
    pub head: Color,
    /// The torso.
    pub torso: Color,
    /// The left arm.
    pub left_arm: Color,
    /// The left hand.
    pub left_hand: Color,
    /// The right arm.
    pub right_arm: Color,
    /// The right hand.
    pub right_hand: Color,
    /// The left leg.
    pub left_leg: Color,
    /// The left foot.
    pub left_foot: Color,
    /// The right leg.
    pub right_leg: Color,
    /// The right foot.
    pub right_foot: Color,
}

impl Default for BodyColors {
    fn default() -> Self {
        Self {
            head: SKIN,
            torso: Color::rgb(156, 156, 156),
            left_arm: SKIN,
            left_hand: SKIN,
            right_arm: SKIN,
            right_hand: SKIN,
            left_leg: LEG,
            left_foot: FOOT,
            right_leg: LEG,
            right_foot: FOOT,
        }
    }
}

impl BodyColors {
    fn write(&self, out: &mut WireMap) -> Result<(), WireError> {
        let parts = [
            ("head_color", &self.head),
            ("torso_color", &self.torso),
            ("left_arm_color", &self.left_arm),
            ("left_hand_color", &self.left_hand),
            ("right_arm_color", &self.right_arm),
            ("right_hand_color", &self.right_hand),
            ("left_leg_color", &self.left_leg),
            ("left_foot_color", &self.left_foot),
            ("right_leg_color", &self.right_leg),
            ("right_foot_color", &self.right_foot),
        ];
        for (key, color) in parts {
            out.put_wire(key, color)?;
        }
        Ok(())
    }
}

/// Avatar items worn by a bopi. Slots hold an item id or [`NO_ITEM`].
#[derive(Debug, Clone, PartialEq)]
pub struct Outfit {
    /// Ids of the worn hats, checked as 32-bit values.
    pub hats: Int32Array,
    /// The face item.
    pub face: i64,
    /// The shirt item.
    pub shirt: i64,
    /// The pants item.
    pub pants: i64,
    /// The shoes item.
    pub shoes: i64,
    /// The held toy.
    pub toy: i64,
}

impl Default for Outfit {
    fn default() -> Self {
        Self {
            hats: Int32Array::new(),
            face: NO_ITEM,
            shirt: NO_ITEM,
            pants: NO_ITEM,
            shoes: NO_ITEM,
            toy: NO_ITEM,
        }
    }
}

/// Spawns one hostile bopi, respawned above the spawner when it dies.
#[derive(Debug, Clone, PartialEq)]
pub struct BopiSpawner {
    /// The pattern of the spawner pad.
    pub tiling: Tiling,
    /// Starting health of the bopi.
    pub max_health: f64,
    /// Damage dealt per punch.
    pub attack_damage: f64,
    /// Walking speed.
    pub move_speed: f64,
    /// Distance from the bopi at which it starts chasing players.
    pub targeting_radius: f64,
    /// Seconds the bopi stays stunned after a ground pound.
    pub stun_time: f64,
    /// Whether the bopi walks back once players leave its radius.
    pub return_to_spawner: bool,
    /// Seconds of standing still before the bopi falls asleep.
    pub sleep_time: f64,
    /// Skin colors.
    pub body: BodyColors,
    /// Worn items.
    pub outfit: Outfit,
}

impl Default for BopiSpawner {
    fn default() -> Self {
        Self {
            tiling: Tiling::default(),
            max_health: 75.0,
            attack_damage: 10.0,
            move_speed: 15.0,
            targeting_radius: 75.0,
            stun_time: 3.5,
            return_to_spawner: false,
            sleep_time: 60.0,
            body: BodyColors::default(),
            outfit: Outfit::default(),
        }
    }
}

impl KindPayload for BopiSpawner {
    const META: KindMeta = KindMeta::new(
        BlockId::BOPI_SPAWNER,
        "Generated Bopi Spawner",
        Color::rgb(160, 30, 176),
        Vector3::new(2.0, 0.5, 2.0),
    );

    tilable!();

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("max_health", self.max_health);
        out.put("attack_damage", self.attack_damage);
        out.put("move_speed", self.move_speed);
        out.put("targeting_radius", self.targeting_radius);
        out.put("stun_time", self.stun_time);
        out.put("return_to_spawner", self.return_to_spawner);
        out.put("sleep_time", self.sleep_time);
        self.body.write(out)?;

        let outfit = &self.outfit;
        out.put_wire("hats", &outfit.hats)?;
        out.put("face", outfit.face);
        out.put("shirt", outfit.shirt);
        out.put("pants", outfit.pants);
        out.put("shoes", outfit.shoes);
        out.put("toy", outfit.toy);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_order_and_empty_slots() {
        let mut out = WireMap::new();
        BopiSpawner::default()
            .write_fields(&mut out, &WireContext::default())
            .unwrap();

        let keys: Vec<&str> = out.keys().map(String::as_str).collect();
        assert_eq!(keys.first(), Some(&"max_health"));
        assert_eq!(keys[7], "head_color");
        assert_eq!(keys[16], "right_foot_color");
        assert_eq!(keys.last(), Some(&"toy"));
        assert_eq!(out["face"], -1);
        assert_eq!(out["hats"]["type"], "Int32_Array");
    }

    #[test]
    fn test_oversized_hat_id_fails() {
        let mut spawner = BopiSpawner::default();
        spawner.outfit.hats.add(1i64 << 40);

        let result = spawner.write_fields(&mut WireMap::new(), &WireContext::default());
        assert!(matches!(result, Err(WireError::Overflow { bits: 32, .. })));
    }
}
