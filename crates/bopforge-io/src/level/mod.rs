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

//! The level: metadata, the entities keyed by UID, and document assembly.

mod error;
mod export;

pub use error::LevelError;
pub use export::{ExportConfig, DEFAULT_EXTENSION, SERVER_BLOCK_LIMIT};

use std::collections::HashMap;

use bopforge_core::catalog::{Music, Sky, Weather};
use bopforge_core::wire::envelope;
use bopforge_core::{Color, GameVersion, Int32Array, WireMap, WireMapExt};
use bopforge_data::{Entity, WireContext};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::Value;

/// The format of `TIME_OF_SAVE`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A whole level: its settings and every placed entity.
///
/// Entities are owned by the level once added and are addressed by the UID
/// returned from [`Level::add`]. Iteration and the written document follow
/// insertion order.
#[derive(Debug, Clone)]
pub struct Level {
    /// The game version written in the header. Entities needing a newer
    /// version are rejected.
    pub game_version: GameVersion,
    /// When the level was created, written as `TIME_OF_SAVE`.
    pub time_of_save: DateTime<Utc>,

    /// The level name.
    pub name: String,
    /// The level description.
    pub description: String,
    /// The tracks played in the level.
    pub music: Int32Array,
    /// Lives per attempt. Zero means infinite lives.
    pub lives: i64,
    /// Whether players can damage each other.
    pub players_damage_players: bool,

    /// The skybox.
    pub sky: Sky,
    /// Brightness of the level.
    pub sky_energy: f64,
    /// Color of the shadows.
    pub ambient_color: Color,
    /// The weather particles.
    pub weather: Weather,
    /// Whether fog limits the view distance.
    pub fog_enabled: bool,
    /// Where the fog ends.
    pub fog_distance: i64,
    /// Color of the fog.
    pub fog_color: Color,
    /// Strength of gravity.
    pub gravity: f64,
    /// Players below this height die.
    pub death_plane: f64,

    entities: IndexMap<u32, Entity>,
    rng: StdRng,
}

impl Default for Level {
    fn default() -> Self {
        Self::new("My Bopimo Level", "Autogenerated with bopforge!")
    }
}

impl Level {
    /// Creates an empty level with the default settings.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            game_version: GameVersion::LATEST,
            time_of_save: Utc::now(),
            name: name.into(),
            description: description.into(),
            music: Int32Array::from(vec![
                Music::SERENE,
                Music::SWAYING_DREAMS,
                Music::PLAYFUL_WALTZ,
            ]),
            lives: 0,
            players_damage_players: true,
            sky: Sky::DAY,
            sky_energy: 1.0,
            ambient_color: Color::BLACK,
            weather: Weather::CLEAR,
            fog_enabled: false,
            fog_distance: 0,
            fog_color: Color::rgb(128, 128, 128),
            gravity: 105.0,
            death_plane: -1000.0,
            entities: IndexMap::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Makes UID allocation deterministic.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Sets the game version.
    #[inline]
    pub fn with_game_version(mut self, version: GameVersion) -> Self {
        self.game_version = version;
        self
    }

    // --- Entities ---

    /// Adds an entity and returns its new UID.
    ///
    /// Fails if the entity's kind needs a newer game version, or if a portal
    /// points at a UID that is missing or not a portal. A failed add leaves
    /// the level unchanged.
    pub fn add(&mut self, entity: Entity) -> Result<u32, LevelError> {
        let uid = self.next_uid();
        self.sanity_check(&entity)?;
        log::debug!("Assigned uid {uid} to \"{}\"", entity.name);
        self.entities.insert(uid, entity);
        Ok(uid)
    }

    /// Adds several entities in order and returns their UIDs.
    ///
    /// Stops at the first rejected entity. Entities added before it stay in
    /// the level.
    pub fn add_all(
        &mut self,
        entities: impl IntoIterator<Item = Entity>,
    ) -> Result<Vec<u32>, LevelError> {
        entities.into_iter().map(|entity| self.add(entity)).collect()
    }

    /// Removes an entity and hands it back.
    ///
    /// Removing a star renumbers the stars added after it.
    pub fn remove(&mut self, uid: u32) -> Result<Entity, LevelError> {
        self.entities
            .shift_remove(&uid)
            .ok_or(LevelError::UnknownUid { uid })
    }

    /// The entity with this UID, if any.
    #[inline]
    pub fn get(&self, uid: u32) -> Option<&Entity> {
        self.entities.get(&uid)
    }

    /// Mutable access to the entity with this UID, if any.
    ///
    /// Changes are validated again when the level is written.
    #[inline]
    pub fn get_mut(&mut self, uid: u32) -> Option<&mut Entity> {
        self.entities.get_mut(&uid)
    }

    /// Whether an entity has this UID.
    #[inline]
    pub fn contains(&self, uid: u32) -> bool {
        self.entities.contains_key(&uid)
    }

    /// Iterates over the entities in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Entity)> + '_ {
        self.entities.iter().map(|(uid, entity)| (*uid, entity))
    }

    /// The number of entities.
    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the level has no entities.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// The number of completion stars.
    pub fn star_amount(&self) -> usize {
        self.stars().count()
    }

    /// The star id a completion star is written with: its position among
    /// the stars still in the level.
    pub fn star_id(&self, uid: u32) -> Option<usize> {
        self.stars().position(|star| star == uid)
    }

    /// UIDs of the completion stars, in insertion order.
    fn stars(&self) -> impl Iterator<Item = u32> + '_ {
        self.iter()
            .filter(|(_, entity)| entity.is_star())
            .map(|(uid, _)| uid)
    }

    fn next_uid(&mut self) -> u32 {
        loop {
            let uid = self.rng.gen_range(1..=u32::MAX);
            if !self.entities.contains_key(&uid) {
                return uid;
            }
        }
    }

    fn sanity_check(&self, entity: &Entity) -> Result<(), LevelError> {
        let required = entity.min_version();
        if required > self.game_version {
            return Err(LevelError::VersionTooLow {
                name: entity.name.clone(),
                kind: entity.kind.kind_name(),
                required,
                declared: self.game_version,
            });
        }

        let Some(portal) = entity.as_portal() else {
            return Ok(());
        };
        for destination in portal.destinations.iter() {
            let target = u32::try_from(destination)
                .ok()
                .and_then(|uid| self.entities.get(&uid).map(|target| (uid, target)));
            let Some((uid, target)) = target else {
                return Err(LevelError::MissingDestination {
                    portal: entity.name.clone(),
                    destination,
                });
            };
            if target.as_portal().is_none() {
                return Err(LevelError::DestinationNotPortal {
                    portal: entity.name.clone(),
                    destination: uid,
                    name: target.name.clone(),
                    kind: target.kind.kind_name(),
                });
            }
        }
        Ok(())
    }

    // --- Document ---

    /// Assembles the whole level document.
    ///
    /// Every entity is validated again, since entities may have changed
    /// through [`Level::get_mut`] after they were added.
    pub fn to_wire(&self) -> Result<WireMap, LevelError> {
        if self.game_version < GameVersion::MINIMUM_SUPPORTED {
            return Err(LevelError::UnsupportedGameVersion {
                version: self.game_version,
            });
        }

        let mut out = WireMap::new();
        out.put("GAME_VERSION", self.game_version.to_string());
        out.put("TIME_OF_SAVE", self.time_of_save.format(TIME_FORMAT).to_string());
        out.put("level_name", self.name.as_str());
        out.put("level_description", self.description.as_str());
        out.put_wire("level_music", &self.music)?;
        out.put("level_lives", self.lives);
        out.put("level_players_damage_players", self.players_damage_players);
        out.put("level_sky", self.sky);
        out.put("level_sky_energy", self.sky_energy);
        out.put_wire("level_ambient_color", &self.ambient_color)?;
        out.put("level_weather", self.weather);
        out.put("level_fog_enabled", self.fog_enabled);
        out.put("level_fog_distance", self.fog_distance);
        out.put_wire("level_fog_color", &self.fog_color)?;
        out.put("level_gravity", self.gravity);
        out.put("level_death_plane", self.death_plane);

        let star_ids: HashMap<u32, usize> = self
            .stars()
            .enumerate()
            .map(|(star_id, uid)| (uid, star_id))
            .collect();

        let mut blocks = Vec::with_capacity(self.entities.len());
        for (&uid, entity) in &self.entities {
            self.sanity_check(entity)?;
            let ctx = WireContext {
                star_id: star_ids.get(&uid).copied().unwrap_or_default(),
            };
            let mut block = WireMap::new();
            block.put("uid", uid);
            block.extend(entity.to_wire_with(&ctx)?);
            blocks.push(Value::Object(block));
        }
        out.insert(
            "level_blocks".to_owned(),
            envelope("Container_Array", Value::Array(blocks)),
        );
        Ok(out)
    }
}

// --- Tests ---
