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
use bopforge_core::{Diagnostics, Vector3, Vector3Array};
use bopforge_data::Entity;
use bopforge_io::Level;

pub(super) fn build(level: &mut Level, diagnostics: &mut Diagnostics) -> Result<()> {
    level.add(super::baseplate(250.0))?;

    let triangle = vec![
        Vector3::ZERO,
        Vector3::new(0.0, 0.0, 10.0),
        Vector3::new(10.0, 0.0, 10.0),
    ];

    // Times derived from a constant speed.
    let mut constant = Entity::block()
        .with_name("Constant Speed")
        .with_nametag(true)
        .with_position(Vector3::new(0.0, 10.0, 0.0));
    constant.position_kinematics.enabled = true;
    constant.position_kinematics.set_travel_speed(10.0);
    constant
        .position_kinematics
        .add_position_points(triangle.clone())?;
    level.add(constant)?;

    // Explicit times, with a pause back at the start.
    let mut timed = Entity::block()
        .with_name("Explicit Times")
        .with_nametag(true)
        .with_position(Vector3::new(0.0, 5.0, 0.0));
    timed.position_kinematics.enabled = true;
    timed.position_kinematics.add_position_points(vec![
        (triangle[0], 0.2),
        (triangle[1], 0.2),
        (triangle[2], 0.2 * 2f64.sqrt()),
        (Vector3::ZERO, 5.0),
    ])?;
    level.add(timed)?;

    // The path as older levels declared it: no origin and no times.
    let mut legacy = Entity::block()
        .with_name("Legacy Path")
        .with_nametag(true)
        .with_position(Vector3::new(20.0, 5.0, 0.0));
    legacy.position_kinematics.enabled = true;
    legacy
        .position_kinematics
        .set_position_points_legacy(Vector3Array::from(triangle[1..].to_vec()), diagnostics);
    level.add(legacy)?;

    level.add(Entity::rose().with_position(Vector3::new(-10.0, 0.0, 0.0)))?;
    Ok(())
}
