//! Run configuration.
//!
//! One `SimulationConfig` describes a complete run: which input files to read,
//! the simulated year span, the seed and which reports to write. It is read
//! either from a legacy `.sim` parameter file or from TOML:
//!
//! ```toml
//! geography = "island.geo"
//! species = ["herbivore.par", "carnivore.par"]
//! populations = ["start.pop"]
//! year_begin = 0
//! year_end = 100
//! seed = 42
//! output_stem = "out/island"
//!
//! [terrain]
//! kind = "builtin"
//! params = "cells.par"
//!
//! [reports]
//! animals = 10
//! population = 50
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where the terrain table comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TerrainSource {
    /// The fixed five-letter table, tuned by a cell parameter file.
    Builtin { params: PathBuf },
    /// A file listing every terrain letter explicitly.
    Spec { path: PathBuf },
}

/// Report intervals in years. 0 disables a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportIntervals {
    /// Per-cell animal counts (`.dyr`).
    pub animals: u32,
    /// Per-cell food (`.for`).
    pub feed: u32,
    /// Full population dump (`.pop`).
    pub population: u32,
    /// JSON world snapshot (`.json`).
    pub snapshot: u32,
}

impl ReportIntervals {
    /// Whether a report with `interval` is due at `year`.
    pub fn due(interval: u32, year: u32) -> bool {
        interval > 0 && year % interval == 0
    }
}

fn default_output_stem() -> PathBuf {
    PathBuf::from("biosim")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub geography: PathBuf,
    pub terrain: TerrainSource,
    /// Species parameter files, in registration order.
    #[serde(default)]
    pub species: Vec<PathBuf>,
    #[serde(default)]
    pub populations: Vec<PathBuf>,
    #[serde(default)]
    pub year_begin: u32,
    #[serde(default)]
    pub year_end: u32,
    #[serde(default)]
    pub seed: u64,
    #[serde(default = "default_output_stem")]
    pub output_stem: PathBuf,
    #[serde(default)]
    pub reports: ReportIntervals,
}

impl SimulationConfig {
    /// A run of a single year from `year_begin` 0 with nothing but a map.
    pub fn new<P: Into<PathBuf>>(geography: P, terrain: TerrainSource) -> Self {
        Self {
            geography: geography.into(),
            terrain,
            species: Vec::new(),
            populations: Vec::new(),
            year_begin: 0,
            year_end: 0,
            seed: 0,
            output_stem: default_output_stem(),
            reports: ReportIntervals::default(),
        }
    }

    /// Checks the configuration as a whole before any file is read.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.geography.as_os_str().is_empty(),
            "Geography file must be given"
        );
        let terrain_path = match &self.terrain {
            TerrainSource::Builtin { params } => params,
            TerrainSource::Spec { path } => path,
        };
        anyhow::ensure!(
            !terrain_path.as_os_str().is_empty(),
            "Terrain parameter file must be given"
        );
        anyhow::ensure!(
            !self.species.is_empty(),
            "At least one species parameter file must be given"
        );
        anyhow::ensure!(
            self.species.iter().all(|p| !p.as_os_str().is_empty()),
            "Species parameter file names must not be empty"
        );
        anyhow::ensure!(
            self.year_end >= self.year_begin,
            "End year {} precedes start year {}",
            self.year_end,
            self.year_begin
        );
        anyhow::ensure!(
            !self.output_stem.as_os_str().is_empty(),
            "Output stem must not be empty"
        );
        Ok(())
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Makes every relative path relative to `base` instead of the working directory.
    #[must_use]
    pub fn resolve_paths(mut self, base: &Path) -> Self {
        let resolve = |p: &mut PathBuf| {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        };
        resolve(&mut self.geography);
        match &mut self.terrain {
            TerrainSource::Builtin { params } => resolve(params),
            TerrainSource::Spec { path } => resolve(path),
        }
        self.species.iter_mut().for_each(resolve);
        self.populations.iter_mut().for_each(resolve);
        resolve(&mut self.output_stem);
        self
    }

    /// SHA-256 over everything that influences the simulated outcome.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.geography).as_bytes());
        hasher.update(format!("{:?}", self.terrain).as_bytes());
        hasher.update(format!("{:?}", self.species).as_bytes());
        hasher.update(format!("{:?}", self.populations).as_bytes());
        hasher.update(format!("{}..{}", self.year_begin, self.year_end).as_bytes());
        hasher.update(self.seed.to_le_bytes());
        hex::encode(hasher.finalize())
    }
}
