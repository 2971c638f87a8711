//! Plain-text reports: the yearly `.dat` table and the per-cell `.dyr` and
//! `.for` dumps.

use crate::error::{IoError, Result};
use biosim_core::{RandomSource, World};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Terrain letters counted in the `.dat` table, in column order.
pub const DAT_TERRAINS: [char; 3] = ['J', 'S', 'O'];

/// The yearly population table, one row per year.
pub struct DatReport<W: Write> {
    out: W,
}

impl DatReport<BufWriter<File>> {
    pub fn create(path: &Path, geography: &str, fingerprint: &str) -> Result<Self> {
        let file = File::create(path).map_err(|e| {
            IoError::from(e).with_context(format!("Could not create {}", path.display()))
        })?;
        Self::new(BufWriter::new(file), geography, fingerprint).map_err(IoError::from)
    }
}

impl<W: Write> DatReport<W> {
    /// Writes the header and returns a report ready for rows.
    pub fn new(mut out: W, geography: &str, fingerprint: &str) -> std::io::Result<Self> {
        writeln!(out, "#")?;
        writeln!(out, "Geografi     {geography}")?;
        writeln!(out, "# fingerprint {fingerprint}")?;
        writeln!(out, "#Year     B/J     R/J     B/S     R/S     B/O     R/O")?;
        Ok(Self { out })
    }

    /// Appends the current year's prey and predator counts per terrain.
    pub fn write_year<R: RandomSource>(&mut self, world: &World<R>) -> std::io::Result<()> {
        let counts = world.population_by_terrain();
        write!(self.out, "{:5}", world.year())?;
        for letter in DAT_TERRAINS {
            let c = counts.get(&letter).copied().unwrap_or_default();
            write!(self.out, "{:8}{:8}", c.prey, c.predators)?;
        }
        writeln!(self.out)
    }

    pub fn finish(mut self) -> std::io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Prey and predator counts for every cell, in reading order with a blank
/// line after each map row.
pub fn write_animals<R: RandomSource, W: Write>(
    out: &mut W,
    world: &World<R>,
    geography: &str,
) -> std::io::Result<()> {
    writeln!(out, "#")?;
    writeln!(out, "Geografi     {geography}")?;
    writeln!(out, "#  Bytte  Rovdyr")?;
    let cols = world.grid().cols();
    let mut n = 0;
    for cell in world.grid().cells() {
        let predators = world.occupants(cell.id()).filter(|a| a.is_predator()).count();
        let prey = cell.occupants().len() - predators;
        writeln!(out, "{prey:8}{predators:8}")?;
        n += 1;
        if n % cols == 0 {
            writeln!(out)?;
        }
    }
    writeln!(out, "# antall celler: {n}")
}

/// Food on every cell, laid out like `write_animals`.
pub fn write_food<R: RandomSource, W: Write>(
    out: &mut W,
    world: &World<R>,
    geography: &str,
) -> std::io::Result<()> {
    writeln!(out, "#")?;
    writeln!(out, "Geografi     {geography}")?;
    writeln!(out, "# Fôr")?;
    let cols = world.grid().cols();
    let mut n = 0;
    for cell in world.grid().cells() {
        writeln!(out, "{:>5}", general(cell.graze_available()))?;
        n += 1;
        if n % cols == 0 {
            writeln!(out)?;
        }
    }
    writeln!(out, "# antall celler: {n}")
}

/// Renders `value` the way C's `%g` does: six significant digits, trailing
/// zeros dropped, exponent form below `1e-4` and from `1e6` on.
pub fn general(value: f64) -> String {
    const PRECISION: i32 = 6;
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    // The exponent after rounding to the target precision decides the form.
    let digits = (PRECISION - 1) as usize;
    let scientific = format!("{value:.digits$e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    if (-4..PRECISION).contains(&exponent) {
        let decimals = (PRECISION - 1 - exponent) as usize;
        strip_zeros(format!("{value:.decimals$}"))
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", strip_zeros(mantissa.to_string()), exponent.abs())
    }
}

fn strip_zeros(digits: String) -> String {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        digits
    }
}

/// Writes `contents` through a fresh file, naming the file on failure.
pub fn write_file<F>(path: &Path, contents: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let wrap = |e: std::io::Error| IoError::from(e).with_context(format!("Could not write {}", path.display()));
    let mut out = BufWriter::new(File::create(path).map_err(wrap)?);
    contents(&mut out).map_err(wrap)?;
    out.flush().map_err(wrap)
}
