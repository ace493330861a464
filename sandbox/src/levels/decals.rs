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

use anyhow::Result;
use bopforge_core::{Color, Stopwatch, Vector3};
use bopforge_data::entity::decal::Decal;
use bopforge_data::entity::kind::Block;
use bopforge_data::{DecalType, Entity};
use bopforge_io::Level;

const SHIRT_ID: i64 = 3915;
const PANTS_RIGHT_ID: i64 = 3566;

/// Rotation axes of the stress grid, one row each.
const STRESS_AXES: [(f64, f64, f64); 7] = [
    (1.0, 0.0, 0.0),
    (0.0, 1.0, 0.0),
    (0.0, 0.0, 1.0),
    (0.0, 1.0, 1.0),
    (1.0, 0.0, 1.0),
    (1.0, 1.0, 0.0),
    (1.0, 1.0, 1.0),
];
const STRESS_COLUMNS: usize = 30;

fn decal(decal_type: DecalType, image_id: i64, width: f64, height: f64) -> Entity {
    Entity::new(Decal {
        decal_type,
        image_id,
        ..Decal::default()
    })
    .with_scale(Vector3::new(width, height, 0.01))
}

pub(super) fn build(level: &mut Level) -> Result<()> {
    level.add(super::baseplate(1024.0))?;

    level.add(
        decal(DecalType::Shirt, SHIRT_ID, 5.0, 5.0)
            .with_name(format!("Shirt Decal (ID: {SHIRT_ID})"))
            .with_nametag(true)
            .with_position(Vector3::new(10.0, 5.0, 0.0)),
    )?;

    let pants = decal(DecalType::PantsFrontRight, PANTS_RIGHT_ID, 5.0, 5.0)
        .with_name(format!("Pants Decal (ID: {PANTS_RIGHT_ID})"))
        .with_nametag(true)
        .with_position(Vector3::new(0.0, 5.0, 0.0));

    let mut spinning = pants
        .clone()
        .with_name("Pants with Rotation Kinematics")
        .with_position(pants.position - Vector3::new(10.0, 0.0, 0.0));
    spinning.rotation_kinematics.enabled = true;
    spinning.rotation_kinematics.set_axis_from_euler(0.0, 0.0, 0.0);
    spinning.rotation_kinematics.speed = 20.0;

    level.add(pants)?;
    level.add(spinning)?;
    level.add_all(stress_grid(Vector3::new(40.0, 0.0, 0.0))?)?;
    Ok(())
}

/// Pairs every pants decal with a see-through reference block of the same
/// transform and a red ray along the block's forward direction. A decal that
/// drifts from its block shows a broken correction.
fn stress_grid(origin: Vector3) -> Result<Vec<Entity>> {
    let stopwatch = Stopwatch::new();
    let mut entities = Vec::with_capacity(STRESS_AXES.len() * STRESS_COLUMNS * 3);

    for (row, &(x, y, z)) in STRESS_AXES.iter().enumerate() {
        for column in 0..STRESS_COLUMNS {
            let angle = column as f64 * 12.0;
            let position = origin + Vector3::new(10.0 * column as f64, 5.0, 10.0 * row as f64);
            let rotation = Vector3::new(x * angle, y * angle, z * angle);
            let scale = Vector3::new(5.0, 5.0, 2.0);

            let mut block = Block::default();
            block.collision_enabled = false;
            block.set_transparency(2)?;
            entities.push(
                Entity::new(block)
                    .with_position(position)
                    .with_rotation(rotation)
                    .with_scale(scale),
            );

            entities.push(
                decal(DecalType::PantsFrontRight, PANTS_RIGHT_ID, scale.x, scale.y)
                    .with_position(position)
                    .with_rotation(rotation),
            );

            let radians = rotation.to_radians();
            let forward = Vector3::forward(radians.x, radians.y, radians.z);
            entities.push(
                Entity::block()
                    .with_position(position + forward * (scale.z / 2.0))
                    .with_rotation(rotation)
                    .with_scale(Vector3::new(0.1, 0.1, scale.z))
                    .with_color(Color::rgb(255, 0, 0)),
            );
        }
    }

    let notes = [
        "Every decal here should line up with its transparent reference block.".to_owned(),
        "The red ray shows the reference block's forward direction.".to_owned(),
        format!("Time to generate: {} ms", stopwatch.elapsed_ms()),
    ];
    for (line, note) in notes.into_iter().enumerate() {
        let mut block = Block::default();
        block.collision_enabled = false;
        block.set_transparency(0)?;
        entities.push(
            Entity::new(block)
                .with_name(note)
                .with_nametag(true)
                .with_position(origin + Vector3::new(0.0, -0.5 * line as f64, 70.0)),
        );
    }

    Ok(entities)
}
