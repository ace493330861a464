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

//! Errors raised by the level container and its export.

use bopforge_core::{GameVersion, WireError};
use thiserror::Error;

/// An error raised while building, assembling or exporting a level.
#[derive(Debug, Error)]
pub enum LevelError {
    /// An entity needs a newer game version than the level declares.
    #[error(
        "\"{name}\" is a {kind}, which requires game version {required}; \
         the level declares {declared}"
    )]
    VersionTooLow {
        /// Name of the rejected entity.
        name: String,
        /// Kind of the rejected entity.
        kind: &'static str,
        /// The minimum version of the kind.
        required: GameVersion,
        /// The level's game version.
        declared: GameVersion,
    },

    /// The level declares a game version older than the format supports.
    #[error(
        "game version {version} is not supported; levels must target {} or newer",
        GameVersion::MINIMUM_SUPPORTED
    )]
    UnsupportedGameVersion {
        /// The declared version.
        version: GameVersion,
    },

    /// No entity of the level has this UID.
    #[error("the level has no entity with uid {uid}")]
    UnknownUid {
        /// The requested UID.
        uid: u32,
    },

    /// A portal points at a UID that is not in the level.
    #[error(
        "portal \"{portal}\" has a destination ({destination}) that does not exist in the level"
    )]
    MissingDestination {
        /// Name of the portal.
        portal: String,
        /// The dangling destination.
        destination: i128,
    },

    /// A portal points at an entity that is not a portal.
    #[error(
        "portal \"{portal}\" has a destination ({name}, uid {destination}) that is a {kind}, not a portal"
    )]
    DestinationNotPortal {
        /// Name of the portal.
        portal: String,
        /// UID of the destination.
        destination: u32,
        /// Name of the destination entity.
        name: String,
        /// Kind of the destination entity.
        kind: &'static str,
    },

    /// A value could not be written.
    #[error(transparent)]
    Wire(#[from] WireError),

    /// The file could not be read or written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A document could not be encoded or decoded.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
