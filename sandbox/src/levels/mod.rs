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

//! The demo levels.

mod decals;
mod kinematics;
mod starter;

use anyhow::Result;
use bopforge_core::catalog::Shape;
use bopforge_core::{Diagnostics, Vector3};
use bopforge_data::entity::kind::Block;
use bopforge_data::Entity;
use bopforge_io::Level;
use clap::ValueEnum;

/// A demo level the sandbox can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Moving platforms with constant speed, explicit times and the legacy path.
    Kinematics,
    /// Shirt and pants decals, including a rotating one and a stress grid.
    Decals,
    /// A short obstacle course touring the common mechanics.
    Starter,
}

impl Demo {
    /// Every demo, in build order.
    pub const ALL: [Demo; 3] = [Demo::Kinematics, Demo::Decals, Demo::Starter];

    /// The exported file name, without extension.
    pub fn file_stem(self) -> &'static str {
        match self {
            Demo::Kinematics => "new_kinematics",
            Demo::Decals => "bopforge_decals",
            Demo::Starter => "starter_guide",
        }
    }

    /// Builds the level. A seed makes its UIDs reproducible.
    pub fn build(self, seed: Option<u64>, diagnostics: &mut Diagnostics) -> Result<Level> {
        let (name, description) = match self {
            Demo::Kinematics => (
                "New Kinematics Test",
                "A quick demonstration of time-based kinematics.",
            ),
            Demo::Decals => (
                "Bopforge Decal Demonstration",
                "Shirt and pants decals placed without hand-tuned transforms.",
            ),
            Demo::Starter => (
                "Starter's Guide Level",
                "A simple obstacle course that goes over various mechanics.",
            ),
        };

        let mut level = Level::new(name, description);
        if let Some(seed) = seed {
            level = level.with_seed(seed);
        }

        match self {
            Demo::Kinematics => kinematics::build(&mut level, diagnostics)?,
            Demo::Decals => decals::build(&mut level)?,
            Demo::Starter => starter::build(&mut level)?,
        }
        log::debug!("Built the {self:?} demo with {} entities", level.len());
        Ok(level)
    }
}

/// A flat cylinder centered below the origin.
fn baseplate(size: f64) -> Entity {
    Entity::new(Block::new(Shape::CYLINDER))
        .with_name("Baseplate")
        .with_position(Vector3::new(0.0, -6.0, 0.0))
        .with_scale(Vector3::new(size, 6.0, size))
}
