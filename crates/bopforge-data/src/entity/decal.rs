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

//! Decals: flat images made from the texture of a transparent clothing item.
//!
//! A clothing texture is wrapped around a body part, so an item mesh showing
//! it has the wrong size, is off-center for pants, and is slightly tilted.
//! The author sets the size, position and rotation the *image* should have,
//! and [`DecalTransform`] computes the mesh transform that displays it that
//! way. The corrected values replace the author's ones in the written file.

use bopforge_core::catalog::BlockId;
use bopforge_core::{
    Color, Diagnostics, Mat3, Vector3, Warning, WireError, WireMap, WireMapExt,
};

use super::kind::{EntityKind, KindMeta, KindPayload, WireContext};
use super::Entity;

/// Mesh width per image width on a shirt. Shirt textures are 16:17.
pub const SHIRT_WIDTH_RATIO: f64 = 10.0 / 8.0;
/// Mesh height per image height on a shirt.
pub const SHIRT_HEIGHT_RATIO: f64 = 20.0 / 17.0;
/// Mesh width per image width on pants. Pants textures are 12:21.
pub const PANTS_WIDTH_RATIO: f64 = 10.0 / 3.0;
/// Mesh height per image height on pants.
pub const PANTS_HEIGHT_RATIO: f64 = 40.0 / 21.0;
/// Horizontal recentering of a pants image, per unit of mesh width.
pub const PANTS_X_ADJUST: f64 = 41.0 / 200.0;
/// Vertical recentering of a pants image, per unit of mesh height.
pub const PANTS_Y_ADJUST: f64 = 25.0 / 2000.0;
/// Roll, in degrees, undoing the tilt of a pants leg.
pub const PANTS_TILT_FIX: f64 = 2.0;

/// Depth above which a decal stops looking flat.
pub const MAX_FLAT_DEPTH: f64 = 0.1;

/// The clothing item hosting the image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DecalType {
    /// The front of a shirt.
    #[default]
    Shirt,
    /// The front of the left pants leg.
    PantsFrontLeft,
    /// The front of the right pants leg.
    PantsFrontRight,
}

impl DecalType {
    /// The numeric value of the type.
    #[inline]
    pub const fn raw(self) -> i64 {
        match self {
            Self::Shirt => 0,
            Self::PantsFrontLeft => 1,
            Self::PantsFrontRight => 2,
        }
    }

    /// Whether the image sits on a pants leg.
    #[inline]
    pub const fn is_pants(self) -> bool {
        !matches!(self, Self::Shirt)
    }

    /// The mesh scale that shows the image at `scale`.
    pub fn mesh_size(self, scale: Vector3) -> Vector3 {
        let (width, height) = match self {
            Self::Shirt => (SHIRT_WIDTH_RATIO, SHIRT_HEIGHT_RATIO),
            Self::PantsFrontLeft | Self::PantsFrontRight => (PANTS_WIDTH_RATIO, PANTS_HEIGHT_RATIO),
        };
        Vector3::new(scale.x * width, scale.y * height, scale.z)
    }

    /// The translation that centers the image on the mesh.
    ///
    /// `mesh_size` is the corrected size, `rotation` is in degrees and
    /// `offset` is the author's manual recentering, of which Z is ignored.
    /// Shirt images are already centered and get the zero vector.
    pub fn center_offset(self, mesh_size: Vector3, rotation: Vector3, offset: Vector3) -> Vector3 {
        let side = match self {
            Self::Shirt => return Vector3::ZERO,
            Self::PantsFrontLeft => 1.0,
            Self::PantsFrontRight => -1.0,
        };
        let local = Vector3::new(
            PANTS_X_ADJUST * mesh_size.x * -side + offset.x,
            PANTS_Y_ADJUST * mesh_size.y + offset.y,
            0.0,
        );
        let r = rotation.to_radians();
        Mat3::from_euler(r.x, r.y, r.z) * local
    }

    /// The roll, in degrees, added to the rotation.
    #[inline]
    pub fn tilt_correction(self) -> f64 {
        match self {
            Self::Shirt => 0.0,
            Self::PantsFrontLeft => -PANTS_TILT_FIX,
            Self::PantsFrontRight => PANTS_TILT_FIX,
        }
    }
}

/// The payload of a decal entity. The entity scale is the image size.
#[derive(Debug, Clone, PartialEq)]
pub struct Decal {
    /// The clothing item hosting the image.
    pub decal_type: DecalType,
    /// The id of the clothing item, written as `item_id`.
    pub image_id: i64,
    /// Whether lighting applies.
    pub shaded: bool,
    /// Manual recentering for images that are not centered. Z is ignored.
    pub offset: Vector3,
}

impl Default for Decal {
    fn default() -> Self {
        Self {
            decal_type: DecalType::Shirt,
            image_id: 3372,
            shaded: true,
            offset: Vector3::ZERO,
        }
    }
}

impl KindPayload for Decal {
    const META: KindMeta = KindMeta::new(
        BlockId::MESH,
        "Generated Decal",
        Color::WHITE,
        Vector3::new(2.0, 2.0, 0.01),
    );

    fn write_fields(&self, out: &mut WireMap, _: &WireContext) -> Result<(), WireError> {
        out.put("item_id", self.image_id);
        out.put("shaded", self.shaded);
        Ok(())
    }
}

impl Entity {
    /// Creates a decal showing an image of `width` by `height` units.
    pub fn decal(decal_type: DecalType, width: f64, height: f64) -> Self {
        Self::new(Decal {
            decal_type,
            ..Decal::default()
        })
        .with_scale(Vector3::new(width, height, 0.01))
    }
}

/// Where the centering translation is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecalAnchor {
    /// The block position, for a decal without rotation kinematics.
    Position(Vector3),
    /// The rotation pivot, for a rotating decal.
    Pivot(Vector3),
}

/// The mesh transform that displays a decal as authored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecalTransform {
    /// The mesh scale.
    pub scale: Vector3,
    /// The recentered position or pivot.
    pub anchor: DecalAnchor,
    /// The tilt-corrected rotation. Shirts keep their rotation.
    pub rotation: Option<Vector3>,
}

impl DecalTransform {
    /// Computes the corrected transform of a decal entity, or `None` for any
    /// other kind.
    pub fn compute(entity: &Entity) -> Option<Self> {
        let EntityKind::Decal(decal) = &entity.kind else {
            return None;
        };
        let kind = decal.decal_type;
        let scale = kind.mesh_size(entity.scale);
        let translation = kind.center_offset(scale, entity.rotation, decal.offset);

        let rotation_kinematics = &entity.rotation_kinematics;
        let anchor = if rotation_kinematics.enabled {
            DecalAnchor::Pivot(rotation_kinematics.pivot_offset + translation)
        } else {
            DecalAnchor::Position(entity.position + translation)
        };

        let rotation = kind
            .is_pants()
            .then(|| entity.rotation + Vector3::new(0.0, 0.0, kind.tilt_correction()));

        Some(Self {
            scale,
            anchor,
            rotation,
        })
    }

    /// Overwrites the transform keys of an already written entity. The keys
    /// keep their positions.
    pub fn apply(&self, out: &mut WireMap) -> Result<(), WireError> {
        out.put_wire("block_scale", &self.scale)?;
        match self.anchor {
            DecalAnchor::Pivot(pivot) => out.put_wire("rotation_pivot_offset", &pivot)?,
            DecalAnchor::Position(position) => out.put_wire("block_position", &position)?,
        }
        if let Some(rotation) = self.rotation {
            out.put_wire("block_rotation", &rotation)?;
        }
        Ok(())
    }
}

/// Reports a decal whose depth is large enough to stop looking flat.
pub(crate) fn check_depth(entity: &Entity, diagnostics: &mut Diagnostics) {
    if matches!(entity.kind, EntityKind::Decal(_)) && entity.scale.z > MAX_FLAT_DEPTH {
        diagnostics.report(Warning::DecalDepth {
            name: entity.name.clone(),
            depth: entity.scale.z,
        });
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_vec_eq(actual: Vector3, expected: Vector3) {
        assert_relative_eq!(actual.x, expected.x, epsilon = 1e-9);
        assert_relative_eq!(actual.y, expected.y, epsilon = 1e-9);
        assert_relative_eq!(actual.z, expected.z, epsilon = 1e-9);
    }

    #[test]
    fn test_shirt_size_and_center() {
        let size = DecalType::Shirt.mesh_size(Vector3::new(8.0, 17.0, 0.01));
        assert_vec_eq(size, Vector3::new(10.0, 20.0, 0.01));
        assert_eq!(
            DecalType::Shirt.center_offset(size, Vector3::new(10.0, 20.0, 30.0), Vector3::ONE),
            Vector3::ZERO
        );
        assert_eq!(DecalType::Shirt.tilt_correction(), 0.0);
    }

    #[test]
    fn test_pants_center_without_rotation() {
        let size = DecalType::PantsFrontRight.mesh_size(Vector3::new(3.0, 21.0, 0.01));
        assert_vec_eq(size, Vector3::new(10.0, 40.0, 0.01));

        // Right leg: d = -1, so X shifts by +X_ADJUST * width.
        let right = DecalType::PantsFrontRight.center_offset(size, Vector3::ZERO, Vector3::ZERO);
        assert_vec_eq(right, Vector3::new(2.05, 0.5, 0.0));

        let left = DecalType::PantsFrontLeft.center_offset(size, Vector3::ZERO, Vector3::ZERO);
        assert_vec_eq(left, Vector3::new(-2.05, 0.5, 0.0));
    }

    #[test]
    fn test_pants_center_follows_rotation() {
        let size = Vector3::new(10.0, 40.0, 0.01);
        let offset = DecalType::PantsFrontRight.center_offset(
            size,
            Vector3::new(0.0, 90.0, 0.0),
            Vector3::ZERO,
        );
        // A quarter turn around Y sends +X to -Z.
        assert_vec_eq(offset, Vector3::new(0.0, 0.5, -2.05));
    }

    #[test]
    fn test_manual_offset_ignores_z() {
        let size = Vector3::new(10.0, 40.0, 0.01);
        let offset = DecalType::PantsFrontLeft.center_offset(
            size,
            Vector3::ZERO,
            Vector3::new(1.0, -1.0, 50.0),
        );
        assert_vec_eq(offset, Vector3::new(-1.05, -0.5, 0.0));
    }

    #[test]
    fn test_compute_on_static_pants() {
        let entity = Entity::decal(DecalType::PantsFrontLeft, 3.0, 21.0)
            .with_position(Vector3::new(10.0, 0.0, 0.0));

        let transform = DecalTransform::compute(&entity).unwrap();

        assert_vec_eq(transform.scale, Vector3::new(10.0, 40.0, 0.01));
        match transform.anchor {
            DecalAnchor::Position(p) => assert_vec_eq(p, Vector3::new(7.95, 0.5, 0.0)),
            other => panic!("expected a position anchor, got {other:?}"),
        }
        assert_eq!(transform.rotation, Some(Vector3::new(0.0, 0.0, -2.0)));
    }

    #[test]
    fn test_compute_moves_pivot_when_rotating() {
        let mut entity = Entity::decal(DecalType::PantsFrontRight, 3.0, 21.0);
        entity.rotation_kinematics.enabled = true;
        entity.rotation_kinematics.pivot_offset = Vector3::new(0.0, 5.0, 0.0);

        let transform = DecalTransform::compute(&entity).unwrap();

        match transform.anchor {
            DecalAnchor::Pivot(p) => assert_vec_eq(p, Vector3::new(2.05, 5.5, 0.0)),
            other => panic!("expected a pivot anchor, got {other:?}"),
        }
    }

    #[test]
    fn test_compute_ignores_other_kinds() {
        assert!(DecalTransform::compute(&Entity::item_mesh()).is_none());
    }

    #[test]
    fn test_deep_decal_is_reported() {
        let mut diagnostics = Diagnostics::new();

        check_depth(&Entity::decal(DecalType::Shirt, 2.0, 2.0), &mut diagnostics);
        assert!(diagnostics.is_empty());

        let deep = Entity::decal(DecalType::Shirt, 2.0, 2.0).with_scale(Vector3::splat(2.0));
        check_depth(&deep, &mut diagnostics);
        assert!(matches!(
            diagnostics.warnings(),
            [Warning::DecalDepth { depth, .. }] if *depth == 2.0
        ));
    }
}
