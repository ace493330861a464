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

//! Builds the demo levels and exports them as `.bopjson` files.
//!
//! Usage:
//!   sandbox                       # every demo into the current directory
//!   sandbox kinematics decals     # a selection
//!   sandbox --out-dir levels --config export.json --seed 7

mod levels;

use std::path::PathBuf;

use anyhow::{Context, Result};
use bopforge_core::Diagnostics;
use bopforge_io::ExportConfig;
use clap::Parser;

use levels::Demo;

#[derive(Parser)]
#[command(name = "sandbox")]
#[command(about = "Builds the bopforge demo levels")]
struct Cli {
    /// Demos to build. Builds all of them when omitted.
    #[arg(value_enum)]
    demos: Vec<Demo>,

    /// Directory receiving the exported files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// JSON file with export settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for UID allocation, for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ExportConfig::from_file(path)
            .with_context(|| format!("Failed to load export config {}", path.display()))?,
        None => ExportConfig::default(),
    };
    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("Failed to create {}", cli.out_dir.display()))?;

    let demos = if cli.demos.is_empty() {
        Demo::ALL.to_vec()
    } else {
        cli.demos
    };

    let mut diagnostics = Diagnostics::new();
    for demo in demos {
        let level = demo.build(cli.seed, &mut diagnostics)?;
        level
            .export(cli.out_dir.join(demo.file_stem()), &config, &mut diagnostics)
            .with_context(|| format!("Failed to export the {demo:?} demo"))?;
    }

    if !diagnostics.is_empty() {
        log::info!("Finished with {} warning(s)", diagnostics.warnings().len());
    }
    Ok(())
}
