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

//! Writing a level to a `.bopjson` file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use bopforge_core::{Diagnostics, Stopwatch, Warning};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Level, LevelError};

/// The number of entities an online server accepts in one level.
pub const SERVER_BLOCK_LIMIT: usize = 2048;

/// The extension appended to exported files.
pub const DEFAULT_EXTENSION: &str = "bopjson";

/// Settings of the export step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Entity count above which a [`Warning::ServerBlockLimit`] is reported.
    pub server_block_limit: usize,
    /// Extension appended to the exported path, without the dot.
    pub extension: String,
    /// Indents the written document.
    pub pretty: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            server_block_limit: SERVER_BLOCK_LIMIT,
            extension: DEFAULT_EXTENSION.to_owned(),
            pretty: false,
        }
    }
}

impl ExportConfig {
    /// Load the export configuration from a JSON string. Missing keys keep
    /// their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load the export configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// The file written for `path`: the path with the extension appended.
    pub fn output_path(&self, path: impl AsRef<Path>) -> PathBuf {
        let mut file = path.as_ref().as_os_str().to_owned();
        file.push(".");
        file.push(&self.extension);
        PathBuf::from(file)
    }
}

impl Level {
    /// Writes the level document to `writer`.
    pub fn write_to(&self, writer: impl Write, pretty: bool) -> Result<(), LevelError> {
        let document = Value::Object(self.to_wire()?);
        write_document(&document, writer, pretty)
    }

    /// Exports the level to `{path}.{extension}` and returns the written path.
    ///
    /// Advisories, such as exceeding the server block limit or a decal with
    /// depth, go to `diagnostics` and do not stop the export. The document is
    /// assembled before the file is created, so a level that fails to
    /// assemble leaves any previous export untouched.
    pub fn export(
        &self,
        path: impl AsRef<Path>,
        config: &ExportConfig,
        diagnostics: &mut Diagnostics,
    ) -> Result<PathBuf, LevelError> {
        let stopwatch = Stopwatch::new();

        if self.len() > config.server_block_limit {
            diagnostics.report(Warning::ServerBlockLimit {
                count: self.len(),
                limit: config.server_block_limit,
            });
        }
        for (_, entity) in self.iter() {
            entity.check(diagnostics);
        }

        let document = Value::Object(self.to_wire()?);

        let file = config.output_path(path);
        let mut writer = BufWriter::new(File::create(&file)?);
        write_document(&document, &mut writer, config.pretty)?;
        writer.flush()?;

        log::info!(
            "\"{}\" exported to {} in {} ms",
            self.name,
            file.display(),
            stopwatch.elapsed_ms()
        );
        Ok(file)
    }
}

fn write_document(document: &Value, writer: impl Write, pretty: bool) -> Result<(), LevelError> {
    if pretty {
        serde_json::to_writer_pretty(writer, document)?;
    } else {
        serde_json::to_writer(writer, document)?;
    }
    Ok(())
}
