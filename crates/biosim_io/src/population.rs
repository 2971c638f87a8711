//! `.pop` population files, read as seeds and written as dumps.

use crate::error::{IoError, Result};
use crate::params::TokenStream;
use biosim_core::{RandomSource, World};
use biosim_data::{AnimalRecord, PopulationRecord};
use std::io::Write;
use std::path::Path;

/// Population records plus the map name given in the optional header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopulationFile {
    pub geography: Option<String>,
    pub records: Vec<PopulationRecord>,
}

pub fn read_population(path: &Path) -> Result<PopulationFile> {
    let content = crate::error::read_to_string(path)?;
    parse_population(path, &content)
}

/// Parses an optional `Geografi <name>` header followed by records of
/// `species x y count` and `count` lines of `age weight`.
pub fn parse_population(path: &Path, content: &str) -> Result<PopulationFile> {
    let mut stream = TokenStream::new(path, content);
    let mut file = PopulationFile::default();

    stream.skip_comments();
    if stream.peek().is_some_and(|t| t.text == "Geografi") {
        stream.next_token();
        file.geography = Some(stream.expect("a geography name")?.text);
    }

    while let Some(species) = stream.next_key() {
        let x: u32 = stream.expect_value("an x coordinate")?;
        let y: u32 = stream.expect_value("a y coordinate")?;
        let count: usize = stream.expect_value("an animal count")?;
        let mut record = PopulationRecord::new(species.text, x, y);
        for _ in 0..count {
            stream.skip_comments();
            let age: u32 = stream.expect_value("an age")?;
            let weight: f64 = stream.expect_value("a weight")?;
            if !weight.is_finite() {
                return Err(IoError::parse(
                    path,
                    stream.line(),
                    format!("weight must be finite, found {weight}"),
                ));
            }
            record.animals.push(AnimalRecord { age, weight });
        }
        file.records.push(record);
    }
    Ok(file)
}

/// Dumps every living animal in the `.pop` input format, cell by cell in
/// reading order and species by species in registration order.
pub fn write_population<R: RandomSource, W: Write>(
    out: &mut W,
    world: &World<R>,
    geography: &str,
) -> std::io::Result<()> {
    writeln!(out, "# populasjon")?;
    writeln!(out, "Geografi     {geography}")?;
    for cell in world.grid().cells() {
        for species in world.species() {
            let mates = world.cell_mates(cell.id(), species.id(), false);
            if mates.is_empty() {
                continue;
            }
            writeln!(
                out,
                "{} {} {} {}",
                species.name(),
                cell.x(),
                cell.y(),
                mates.len()
            )?;
            for animal in mates.iter().filter_map(|id| world.animal(*id)) {
                writeln!(out, "{:3} {:7.3}", animal.age(), animal.weight())?;
            }
            writeln!(out)?;
        }
    }
    Ok(())
}
