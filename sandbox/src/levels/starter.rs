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

//! An obstacle course in three sections. Each section starts where the
//! previous one ended and walks a cursor along +Z.

use anyhow::Result;
use bopforge_core::catalog::{Music, Pattern, Shape, Sky};
use bopforge_core::{Color, Int32Array, Vector3};
use bopforge_data::entity::kind::{Block, Cannon, DisappearingBlock, Magma, SpeedPanel, Spring};
use bopforge_data::Entity;
use bopforge_io::Level;

const PLATFORM_HEIGHT: f64 = 2.0;

fn platform(color: Color, position: Vector3, width: f64, length: f64) -> Entity {
    Entity::block()
        .with_color(color)
        .with_position(position)
        .with_scale(Vector3::new(width, PLATFORM_HEIGHT, length))
}

/// Returns a copy of `entity` placed at `position`.
fn moved(entity: &Entity, position: Vector3) -> Entity {
    entity.clone().with_position(position)
}

/// The point just past the far edge of `entity` along Z.
fn far_edge(entity: &Entity) -> Vector3 {
    entity.position + Vector3::new(0.0, 0.0, entity.scale.z / 2.0)
}

pub(super) fn build(level: &mut Level) -> Result<()> {
    level.death_plane = -100.0;
    level.sky = Sky::SUNSET;
    level.music = Int32Array::from(vec![
        Music::SERENE,
        Music::SICILIAN_STREET,
        Music::LATE_NIGHT_FIREWORKS,
    ]);

    let mut base = Block::new(Shape::CYLINDER);
    base.tiling.pattern = Pattern::WAVES;
    let baseplate = Entity::new(base)
        .with_position(Vector3::new(0.0, -6.0, 0.0))
        .with_scale(Vector3::new(32.0, PLATFORM_HEIGHT, 32.0))
        .with_color(Color::rgb(232, 182, 118));
    let spawn_offset = Vector3::new(0.0, baseplate.scale.y / 2.0 + 0.5, 0.0);
    level.add(Entity::spawn().with_position(baseplate.position + spawn_offset))?;

    let first = stepping_stones(far_edge(&baseplate));
    level.add(baseplate)?;
    let mut last = first.last().cloned().unwrap_or_else(Entity::block);
    level.add_all(first)?;

    let second = moving_platforms(far_edge(&last))?;
    last = second.last().cloned().unwrap_or_else(Entity::block);
    level.add_all(second)?;

    let checkpoint_offset = Vector3::new(0.0, last.scale.y / 2.0 + 2.0, 0.0);
    level.add(Entity::checkpoint().with_position(last.position + checkpoint_offset))?;

    level.add_all(hazards(&last))?;
    Ok(())
}

/// Five static platforms separated by jumpable gaps.
fn stepping_stones(start: Vector3) -> Vec<Entity> {
    const SIZE: f64 = 15.0;
    const GAP: f64 = 25.0;
    let color = Color::rgb(132, 65, 35);
    let start = start + Vector3::new(0.0, 0.0, SIZE / 2.0 + GAP);

    (0..5)
        .map(|i| {
            let offset = Vector3::new(0.0, 0.0, (SIZE + GAP) * f64::from(i));
            platform(color, start + offset, SIZE, SIZE)
        })
        .collect()
}

/// Platforms orbiting a pivot, then platforms moving at constant speed, then
/// one long ride with explicit times and pauses at both ends.
fn moving_platforms(start: Vector3) -> Result<Vec<Entity>> {
    const COUNT: u32 = 3;
    const SIZE: f64 = 20.0;
    const PIVOT_RADIUS: f64 = 30.0;
    const GAP: f64 = 10.0;
    let color = Color::rgb(255, 155, 155);
    let mut entities = Vec::new();
    let mut cursor = start + Vector3::new(0.0, 0.0, SIZE / 2.0 + PIVOT_RADIUS + GAP);

    for i in 0..COUNT {
        let rotation = Vector3::new(0.0, 180.0 * f64::from(i % 2), 0.0);
        let mut orbiting = Entity::new(Block::new(Shape::CYLINDER))
            .with_color(color)
            .with_position(cursor)
            .with_rotation(rotation)
            .with_scale(Vector3::new(SIZE, PLATFORM_HEIGHT, SIZE));
        let radians = rotation.to_radians();
        let spin = &mut orbiting.rotation_kinematics;
        spin.enabled = true;
        spin.set_axis_from_euler(radians.x, radians.y, radians.z);
        spin.pivot_offset = Vector3::new(0.0, 0.0, PIVOT_RADIUS);
        spin.speed = 45.0;
        entities.push(orbiting);

        cursor += Vector3::new(0.0, 0.0, PIVOT_RADIUS * 2.0 + SIZE + GAP);
    }

    let rest = platform(color, cursor, SIZE, SIZE);
    entities.push(rest.clone());
    cursor += Vector3::new(0.0, 0.0, GAP + SIZE * 1.5);

    let travel = 50.0;
    for i in 0..COUNT {
        let mut mover = moved(&rest, cursor);
        let path = &mut mover.position_kinematics;
        path.enabled = true;
        path.set_travel_speed(10.0);
        let mut points = vec![Vector3::ZERO, Vector3::new(0.0, 0.0, travel)];
        if i % 2 == 1 {
            points.reverse();
        }
        path.add_position_points(points)?;
        entities.push(mover);

        cursor += Vector3::new(0.0, 0.0, travel + SIZE + GAP);
    }

    cursor += Vector3::new(0.0, 0.0, SIZE / 2.0);
    entities.push(moved(&rest, cursor));
    cursor += Vector3::new(0.0, 0.0, SIZE + GAP);

    const DELAY: f64 = 4.0;
    const RIDE: f64 = 6.0;
    let travel = 250.0;
    let far = Vector3::new(0.0, 0.0, travel);
    let mut ferry = moved(&rest, cursor);
    ferry.position_kinematics.enabled = true;
    ferry.position_kinematics.add_position_points(vec![
        (Vector3::ZERO, DELAY),
        (Vector3::ZERO, RIDE),
        (far, DELAY),
        (far, 0.0),
    ])?;
    entities.push(ferry);

    cursor += Vector3::new(0.0, 0.0, travel + SIZE + GAP);
    entities.push(moved(&rest, cursor));
    Ok(entities)
}

/// Magma pillars on ice, a spring up to grates, disappearing platforms,
/// spinning bridges and a cannon shot to the star.
fn hazards(start: &Entity) -> Vec<Entity> {
    const SIZE: f64 = 20.0;
    const GAP: f64 = 15.0;
    let mut entities = Vec::new();

    let ice_length = 200.0;
    let mut cursor = far_edge(start) + Vector3::new(0.0, 0.0, ice_length / 2.0);
    entities.push(
        Entity::ice()
            .with_position(cursor)
            .with_scale(Vector3::new(SIZE, PLATFORM_HEIGHT, ice_length)),
    );
    cursor -= Vector3::new(0.0, 0.0, ice_length / 2.0);

    let pillar_height = 50.0;
    for i in 1..4 {
        let offset = Vector3::new(0.0, pillar_height / 2.0 + 1.0, ice_length * f64::from(i) / 4.0);
        entities.push(
            Entity::new(Magma::default().with_damage_amount(50.0))
                .with_position(cursor + offset)
                .with_scale(Vector3::new(SIZE, pillar_height, SIZE)),
        );
    }
    cursor += Vector3::new(0.0, 0.0, ice_length);

    let red_carpet = Color::rgb(144, 31, 31);
    let length = 50.0;
    entities.push(platform(
        red_carpet,
        cursor + Vector3::new(0.0, 0.0, length / 2.0),
        SIZE,
        length,
    ));

    let spring = Spring {
        bounce_force: 150.0,
        ..Spring::default()
    };
    let climb = spring.bounce_force * 2.0 / 3.0;
    entities.push(
        Entity::new(spring)
            .with_position(cursor + Vector3::new(0.0, 2.0, length - SIZE / 2.0))
            .with_scale(Vector3::new(SIZE / 4.0, 2.0, SIZE / 4.0)),
    );

    cursor += Vector3::new(0.0, climb, length);
    entities.push(
        Entity::grates()
            .with_position(cursor)
            .with_scale(Vector3::new(SIZE, PLATFORM_HEIGHT, length)),
    );
    cursor += Vector3::new(0.0, -25.0, length / 2.0 - SIZE / 2.0);

    for _ in 0..5 {
        let vanishing = DisappearingBlock {
            disappears_after: 0.5,
            ..DisappearingBlock::default()
        };
        entities.push(
            Entity::new(vanishing)
                .with_color(red_carpet)
                .with_position(cursor)
                .with_scale(Vector3::new(SIZE / 2.0, PLATFORM_HEIGHT, SIZE / 2.0)),
        );
        cursor += Vector3::new(0.0, 0.0, SIZE / 2.0 + GAP);
    }
    cursor += Vector3::new(0.0, 25.0 - climb, 114.0);

    let landing = platform(red_carpet, cursor, SIZE, SIZE);
    entities.push(
        Entity::new(SpeedPanel {
            new_speed: 50.0,
            duration: 15.0,
        })
        .with_position(landing.position + Vector3::new(0.0, 1.5, 0.0))
        .with_scale(Vector3::new(5.0, 1.0, 5.0)),
    );
    entities.push(landing);

    let bridge = 150.0;
    cursor += Vector3::new(0.0, 0.0, SIZE / 2.0 + bridge / 2.0 + GAP);
    for i in 0..5 {
        let rotation = Vector3::new(0.0, 90.0 * f64::from(i), 0.0);
        let mut spinner = platform(red_carpet, cursor, SIZE, bridge).with_rotation(rotation);
        let radians = rotation.to_radians();
        spinner.rotation_kinematics.enabled = true;
        spinner
            .rotation_kinematics
            .set_axis_from_euler(radians.x, radians.y, radians.z);
        spinner.rotation_kinematics.speed = 45.0;
        entities.push(spinner);
        cursor += Vector3::new(0.0, 0.0, bridge + GAP);
    }
    cursor -= Vector3::new(0.0, 0.0, bridge / 2.0);

    let cannon = Entity::new(Cannon { power: 150.0 })
        .with_position(cursor)
        .with_rotation(Vector3::new(45.0, 0.0, 0.0))
        .with_scale(Vector3::splat(SIZE / 3.0));
    entities.push(
        Entity::completion_star()
            .with_position(cannon.position + Vector3::new(0.0, 56.0, 109.0))
            .with_scale(Vector3::splat(7.0)),
    );

    let plate = Entity::new(Block::new(Shape::CYLINDER))
        .with_position(cannon.position + Vector3::new(0.0, 0.0, 250.0))
        .with_scale(Vector3::new(75.0, PLATFORM_HEIGHT, 75.0));
    entities.push(Entity::pine_tree().with_position(plate.position + Vector3::new(0.0, 6.0, 0.0)));
    entities.push(plate);
    entities.push(cannon);
    entities
}
