//! Run files: the legacy `.sim` parameter format and TOML.

use crate::error::{IoError, Result};
use crate::params::ParamFile;
use biosim_core::{ConfigError, ReportIntervals, SimulationConfig, TerrainSource};
use std::path::{Path, PathBuf};

pub const SIM_KEYS: &[&str] = &[
    "Geografi",
    "CelleParameter",
    "CelleSpec",
    "BytteParameter",
    "RovdyrParameter",
    "ArtParameter",
    "Populasjon",
    "StartAar",
    "SluttAar",
    "SlumptallFroe",
    "UtdataStamme",
    "DumpDyrInterval",
    "DumpPopInterval",
    "DumpForInterval",
    "DumpSnapshotInterval",
    "DumpPNGInterval",
];

/// Loads a run file, TOML for a `.toml` extension and `.sim` otherwise.
/// Relative paths inside it are resolved against its directory.
pub fn load_config(path: &Path) -> Result<SimulationConfig> {
    let content = crate::error::read_to_string(path)?;
    let config = if path.extension().is_some_and(|e| e == "toml") {
        toml::from_str::<SimulationConfig>(&content)?
    } else {
        parse_sim(path, &content)?
    };
    config
        .validate()
        .map_err(|e| IoError::from(ConfigError::InvalidConfig(e.to_string())))
        .map_err(|e| e.with_context(path.display().to_string()))?;
    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.resolve_paths(base))
}

/// Parses the `.sim` key/value format into an unvalidated configuration.
///
/// `CelleParameter` wins over `CelleSpec` when both are given. Species are
/// registered in the order: every `ArtParameter`, then `BytteParameter`,
/// then `RovdyrParameter`.
pub fn parse_sim(path: &Path, content: &str) -> Result<SimulationConfig> {
    let file = ParamFile::parse(path, content, SIM_KEYS)?;

    let non_empty = |key: &str| file.text(key).filter(|v| !v.is_empty()).map(PathBuf::from);

    let terrain = match (non_empty("CelleParameter"), non_empty("CelleSpec")) {
        (Some(params), _) => TerrainSource::Builtin { params },
        (None, Some(path)) => TerrainSource::Spec { path },
        (None, None) => {
            return Err(ConfigError::InvalidConfig(format!(
                "{}: neither CelleParameter nor CelleSpec given",
                path.display()
            ))
            .into())
        }
    };

    let mut species: Vec<PathBuf> = file.all("ArtParameter").into_iter().map(PathBuf::from).collect();
    species.extend(non_empty("BytteParameter"));
    species.extend(non_empty("RovdyrParameter"));

    if file.text("DumpPNGInterval").is_some() {
        tracing::debug!(path = %path.display(), "DumpPNGInterval is ignored");
    }

    Ok(SimulationConfig {
        geography: PathBuf::from(
            file.text("Geografi")
                .ok_or_else(|| IoError::missing(path, "Geografi"))?,
        ),
        terrain,
        species,
        populations: file.all("Populasjon").into_iter().map(PathBuf::from).collect(),
        year_begin: file.require("StartAar")?,
        year_end: file.require("SluttAar")?,
        seed: file.value("SlumptallFroe")?.unwrap_or(0),
        output_stem: PathBuf::from(
            file.text("UtdataStamme")
                .ok_or_else(|| IoError::missing(path, "UtdataStamme"))?,
        ),
        reports: ReportIntervals {
            animals: file.value("DumpDyrInterval")?.unwrap_or(0),
            feed: file.value("DumpForInterval")?.unwrap_or(0),
            population: file.value("DumpPopInterval")?.unwrap_or(0),
            snapshot: file.value("DumpSnapshotInterval")?.unwrap_or(0),
        },
    })
}
