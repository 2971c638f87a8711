//! Terrain tables: the tunable built-in table and explicit `.spec` lists.

use crate::error::{IoError, Result};
use crate::params::{ParamFile, TokenStream};
use biosim_core::{TerrainSource, TerrainTable};
use biosim_data::{Rgb, TerrainArchetype};
use std::path::Path;

pub const CELL_KEYS: &[&str] = &["alpha", "fmax_sav", "fmax_jngl"];

/// Reads whichever terrain description the run names.
pub fn load_terrain(source: &TerrainSource) -> Result<TerrainTable> {
    match source {
        TerrainSource::Builtin { params } => read_cell_params(params),
        TerrainSource::Spec { path } => read_terrain_spec(path),
    }
}

/// Builds the built-in table from a cell parameter file.
pub fn read_cell_params(path: &Path) -> Result<TerrainTable> {
    let content = crate::error::read_to_string(path)?;
    parse_cell_params(path, &content)
}

pub fn parse_cell_params(path: &Path, content: &str) -> Result<TerrainTable> {
    let file = ParamFile::parse(path, content, CELL_KEYS)?;
    let table = TerrainTable::builtin(
        file.require("alpha")?,
        file.require("fmax_sav")?,
        file.require("fmax_jngl")?,
    )?;
    tracing::info!(path = %path.display(), "loaded built-in terrain");
    Ok(table)
}

pub fn read_terrain_spec(path: &Path) -> Result<TerrainTable> {
    let content = crate::error::read_to_string(path)?;
    parse_terrain_spec(path, &content)
}

/// Parses `letter alpha max_food live color` records, one terrain per record.
pub fn parse_terrain_spec(path: &Path, content: &str) -> Result<TerrainTable> {
    let archetypes = parse_archetypes(path, content)?;
    let table = TerrainTable::from_archetypes(&archetypes)?;
    tracing::info!(path = %path.display(), letters = table.len(), "loaded terrain spec");
    Ok(table)
}

pub fn parse_archetypes(path: &Path, content: &str) -> Result<Vec<TerrainArchetype>> {
    let mut stream = TokenStream::new(path, content);
    let mut archetypes = Vec::new();
    while let Some(name) = stream.next_key() {
        let mut chars = name.text.chars();
        let letter = match (chars.next(), chars.next()) {
            (Some(letter), None) => letter,
            _ => {
                return Err(IoError::parse(
                    path,
                    name.line,
                    format!("terrain name must be one letter, found '{}'", name.text),
                ))
            }
        };
        let alpha: f64 = stream.expect_value("a regrowth coefficient")?;
        let max_food: f64 = stream.expect_value("a food capacity")?;
        let live: u8 = stream.expect_value("a live flag")?;
        let color = stream.expect("a color")?;
        let color = Rgb::from_hex(&color.text)
            .map_err(|e| IoError::parse(path, color.line, e.to_string()))?;
        archetypes.push(TerrainArchetype {
            letter,
            alpha,
            max_food,
            live: live != 0,
            color,
        });
    }
    Ok(archetypes)
}
