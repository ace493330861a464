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

//! The entity: one placed object of a level.
//!
//! An [`Entity`] holds the fields every object shares (name, color,
//! transform and kinematics) and an [`EntityKind`] payload with the fields
//! of its kind. Entities are plain values: cloning one gives a fully
//! independent copy.

pub mod decal;
pub mod kind;
pub mod kinematics;
pub mod tiling;

use bopforge_core::catalog::BlockId;
use bopforge_core::{
    Color, Diagnostics, GameVersion, Vector3, WireError, WireMap, WireMapExt,
};

use self::decal::DecalTransform;
use self::kind::{EntityKind, Portal, WireContext};
use self::kinematics::{PositionKinematics, RotationKinematics};
use self::tiling::Tiling;

/// A placed object of a level.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    /// The kind and its specific fields.
    pub kind: EntityKind,
    /// The display name.
    pub name: String,
    /// Whether the name floats above the object in game.
    pub nametag: bool,
    /// The main color.
    pub color: Color,
    /// World position.
    pub position: Vector3,
    /// Euler rotation, in degrees.
    pub rotation: Vector3,
    /// Size along each axis.
    pub scale: Vector3,
    /// The position path.
    pub position_kinematics: PositionKinematics,
    /// The constant rotation.
    pub rotation_kinematics: RotationKinematics,
}

impl Entity {
    /// Creates an entity of the given kind with the kind's default name,
    /// color and scale, at the origin and without rotation.
    pub fn new(kind: impl Into<EntityKind>) -> Self {
        let kind = kind.into();
        let meta = kind.meta();
        Self {
            kind,
            name: meta.default_name.to_owned(),
            nametag: false,
            color: meta.default_color,
            position: Vector3::ZERO,
            rotation: Vector3::ZERO,
            scale: meta.default_scale,
            position_kinematics: PositionKinematics::new(),
            rotation_kinematics: RotationKinematics::default(),
        }
    }

    // --- Builders ---

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Shows or hides the name tag.
    #[inline]
    pub fn with_nametag(mut self, nametag: bool) -> Self {
        self.nametag = nametag;
        self
    }

    /// Sets the main color.
    #[inline]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the position.
    #[inline]
    pub fn with_position(mut self, position: Vector3) -> Self {
        self.position = position;
        self
    }

    /// Sets the euler rotation, in degrees.
    #[inline]
    pub fn with_rotation(mut self, rotation: Vector3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Sets the scale.
    #[inline]
    pub fn with_scale(mut self, scale: Vector3) -> Self {
        self.scale = scale;
        self
    }

    /// Replaces the pattern of a tilable entity. Other kinds are returned
    /// unchanged.
    pub fn with_tiling(mut self, tiling: Tiling) -> Self {
        if let Some(current) = self.kind.tiling_mut() {
            *current = tiling;
        }
        self
    }

    // --- Accessors ---

    /// The id written as `block_id`.
    #[inline]
    pub fn block_id(&self) -> BlockId {
        self.kind.meta().block_id
    }

    /// The oldest game version that knows this kind.
    #[inline]
    pub fn min_version(&self) -> GameVersion {
        self.kind.meta().min_version
    }

    /// The pattern capability, for tilable kinds.
    #[inline]
    pub fn tiling(&self) -> Option<&Tiling> {
        self.kind.tiling()
    }

    /// Mutable access to the pattern capability, for tilable kinds.
    #[inline]
    pub fn tiling_mut(&mut self) -> Option<&mut Tiling> {
        self.kind.tiling_mut()
    }

    /// Whether this entity is a completion star.
    #[inline]
    pub fn is_star(&self) -> bool {
        matches!(self.kind, EntityKind::CompletionStar(_))
    }

    /// The portal payload, if this entity is a portal.
    pub fn as_portal(&self) -> Option<&Portal> {
        match &self.kind {
            EntityKind::Portal(portal) => Some(portal),
            _ => None,
        }
    }

    /// Mutable access to the portal payload, if this entity is a portal.
    pub fn as_portal_mut(&mut self) -> Option<&mut Portal> {
        match &mut self.kind {
            EntityKind::Portal(portal) => Some(portal),
            _ => None,
        }
    }

    /// Reports authoring mistakes that do not prevent writing the entity.
    pub fn check(&self, diagnostics: &mut Diagnostics) {
        decal::check_depth(self, diagnostics);
    }

    // --- Wire ---

    /// Writes the entity with a default context.
    pub fn to_wire(&self) -> Result<WireMap, WireError> {
        self.to_wire_with(&WireContext::default())
    }

    /// Writes the entity as an ordered JSON object.
    ///
    /// The universal keys come first, then the tiling keys of tilable kinds,
    /// then the kind's own keys. Decals finally overwrite their transform
    /// keys in place with the corrected values.
    pub fn to_wire_with(&self, ctx: &WireContext) -> Result<WireMap, WireError> {
        let mut out = WireMap::new();
        out.put("block_id", self.block_id());
        out.put("block_name", self.name.as_str());
        out.put("nametag", self.nametag);
        out.put_wire("block_color", &self.color)?;
        out.put_wire("block_position", &self.position)?;
        out.put_wire("block_rotation", &self.rotation)?;
        out.put_wire("block_scale", &self.scale)?;

        let path = &self.position_kinematics;
        out.put("position_enabled", path.enabled);
        out.put_wire("position_points", path.points())?;
        out.put_wire("position_travel_times", path.travel_times())?;

        let spin = &self.rotation_kinematics;
        out.put("rotation_enabled", spin.enabled);
        out.put_wire("rotation_pivot_offset", &spin.pivot_offset)?;
        out.put_wire("rotation_direction", &spin.direction)?;
        out.put("rotation_speed", spin.speed);

        if let Some(tiling) = self.kind.tiling() {
            tiling.write(&mut out)?;
        }
        self.kind.write_fields(&mut out, ctx)?;

        if let Some(transform) = DecalTransform::compute(self) {
            transform.apply(&mut out)?;
        }
        Ok(out)
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::decal::DecalType;
    use super::kind::Block;
    use super::*;
    use bopforge_core::catalog::{Pattern, Shape};
    use serde_json::json;

    const UNIVERSAL_KEYS: [&str; 14] = [
        "block_id",
        "block_name",
        "nametag",
        "block_color",
        "block_position",
        "block_rotation",
        "block_scale",
        "position_enabled",
        "position_points",
        "position_travel_times",
        "rotation_enabled",
        "rotation_pivot_offset",
        "rotation_direction",
        "rotation_speed",
    ];

    fn keys(map: &WireMap) -> Vec<&str> {
        map.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_universal_keys_come_first() {
        let out = Entity::spring().to_wire().unwrap();
        assert_eq!(&keys(&out)[..14], UNIVERSAL_KEYS);
        assert_eq!(out["block_id"], 2000);
        assert_eq!(out["block_name"], "Generated Spring");
    }

    #[test]
    fn test_tiling_keys_follow_universal_keys() {
        let out = Entity::new(Block::new(Shape::SPHERE))
            .with_tiling(Tiling::with_pattern(Pattern::HEX))
            .to_wire()
            .unwrap();

        let keys = keys(&out);
        assert_eq!(
            &keys[14..17],
            ["block_pattern", "block_pattern_color", "pattern_opacity"]
        );
        assert_eq!(keys[17], "collision_enabled");
        assert_eq!(out["block_pattern"], 1);
    }

    #[test]
    fn test_builders() {
        // Arrange
        let entity = Entity::block()
            .with_name("Floor")
            .with_nametag(true)
            .with_color(Color::rgb(1, 2, 3))
            .with_position(Vector3::new(1.0, 2.0, 3.0))
            .with_rotation(Vector3::new(0.0, 45.0, 0.0))
            .with_scale(Vector3::new(10.0, 1.0, 10.0));

        // Act
        let out = entity.to_wire().unwrap();

        // Assert
        assert_eq!(out["block_name"], "Floor");
        assert_eq!(out["nametag"], true);
        assert_eq!(
            out["block_position"],
            json!({"type": "Vector3F32", "value": {"x": 1.0, "y": 2.0, "z": 3.0}})
        );
        assert_eq!(out["block_rotation"]["value"]["y"], 45.0);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = Entity::block();
        original.position_kinematics.add_position_point(Vector3::X, 1.0);

        let mut copy = original.clone();
        copy.position_kinematics.add_position_point(Vector3::Y, 2.0);
        copy.name.push_str(" copy");

        assert_eq!(original.position_kinematics.len(), 1);
        assert_eq!(copy.position_kinematics.len(), 2);
        assert_eq!(original.name, "Generated Block");
    }

    #[test]
    fn test_decal_overrides_keep_key_positions() {
        let decal = Entity::decal(DecalType::PantsFrontRight, 3.0, 21.0);

        let out = decal.to_wire().unwrap();

        assert_eq!(&keys(&out)[..14], UNIVERSAL_KEYS);
        assert_eq!(out["block_id"], 1100);
        assert_eq!(out["item_id"], 3372);
        assert_eq!(out["block_rotation"]["value"]["z"], 2.0);
        let scale = &out["block_scale"]["value"];
        assert!((scale["x"].as_f64().unwrap() - 10.0).abs() < 1e-9);
        assert!((scale["y"].as_f64().unwrap() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_shirt_decal_keeps_rotation() {
        let decal = Entity::decal(DecalType::Shirt, 8.0, 17.0)
            .with_rotation(Vector3::new(0.0, 0.0, 30.0));
        let out = decal.to_wire().unwrap();
        assert_eq!(out["block_rotation"]["value"]["z"], 30.0);
    }

    #[test]
    fn test_portal_accessors() {
        let mut portal = Entity::portal();
        assert!(portal.as_portal().is_some());
        assert!(Entity::block().as_portal().is_none());

        if let Some(payload) = portal.as_portal_mut() {
            payload.add_destination(12);
        }
        assert_eq!(
            portal.as_portal().map(|p| p.destinations.len()),
            Some(1)
        );
    }
}
