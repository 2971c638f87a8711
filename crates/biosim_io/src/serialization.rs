//! JSON helpers for world snapshots.

use crate::error::{IoError, Result};
use biosim_core::{RandomSource, World, WorldSnapshot};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializes data to pretty-printed JSON.
pub fn to_json_pretty<T>(data: &T) -> Result<String>
where
    T: Serialize,
{
    Ok(serde_json::to_string_pretty(data)?)
}

/// Deserializes data from a JSON string. An empty string is rejected with a
/// parse error rather than a serde message.
pub fn from_json<T>(json: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    if json.trim().is_empty() {
        return Err(IoError::parse(Path::new("<json>"), 1, "empty JSON document"));
    }
    Ok(serde_json::from_str(json)?)
}

pub fn read_json_file<T>(path: &Path) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = crate::error::read_to_string(path)?;
    from_json(&content).map_err(|e| e.with_context(format!("Could not parse {}", path.display())))
}

pub fn write_json_file<T>(path: &Path, data: &T) -> Result<()>
where
    T: Serialize,
{
    let json = to_json_pretty(data)?;
    std::fs::write(path, json + "\n")
        .map_err(|e| IoError::from(e).with_context(format!("Could not write {}", path.display())))
}

/// Captures `world` and writes it as JSON.
pub fn write_snapshot<R: RandomSource>(path: &Path, world: &World<R>) -> Result<()> {
    write_json_file(path, &WorldSnapshot::capture(world))
}
