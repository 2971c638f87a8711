use anyhow::Result;
use biosim_core::{ReportIntervals, World};
use biosim_io::{naming, reports, DatReport};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Writes every report of one run: the `.dat` table each year and the
/// per-cell dumps whenever their interval divides the year.
pub struct Reporter {
    stem: PathBuf,
    geography: String,
    intervals: ReportIntervals,
    dat: DatReport<BufWriter<File>>,
    written: usize,
}

impl Reporter {
    /// Creates the output directory and the `.dat` file with its header.
    pub fn create(
        stem: PathBuf,
        geography: String,
        intervals: ReportIntervals,
        fingerprint: &str,
    ) -> Result<Self> {
        naming::create_output_dir(&stem)?;
        let dat = DatReport::create(&naming::with_extension(&stem, "dat"), &geography, fingerprint)?;
        Ok(Self {
            stem,
            geography,
            intervals,
            dat,
            written: 0,
        })
    }

    /// Appends the current year to the `.dat` table.
    pub fn record(&mut self, world: &World) -> Result<()> {
        self.dat.write_year(world)?;
        Ok(())
    }

    /// Writes whichever per-cell reports are due at the world's current year.
    pub fn dump_due(&mut self, world: &World) -> Result<()> {
        let year = world.year();
        let due = |interval| ReportIntervals::due(interval, year);
        let geography = self.geography.as_str();

        if due(self.intervals.animals) {
            let path = naming::numbered(&self.stem, year, "dyr");
            reports::write_file(&path, |out| reports::write_animals(out, world, geography))?;
            self.written += 1;
        }
        if due(self.intervals.feed) {
            let path = naming::numbered(&self.stem, year, "for");
            reports::write_file(&path, |out| reports::write_food(out, world, geography))?;
            self.written += 1;
        }
        if due(self.intervals.population) {
            let path = naming::numbered(&self.stem, year, "pop");
            reports::write_file(&path, |out| biosim_io::write_population(out, world, geography))?;
            self.written += 1;
        }
        if due(self.intervals.snapshot) {
            let path = naming::numbered(&self.stem, year, "json");
            biosim_io::write_snapshot(&path, world)?;
            self.written += 1;
        }
        Ok(())
    }

    /// Flushes the `.dat` table and returns how many per-cell files were written.
    pub fn finish(self) -> Result<usize> {
        self.dat.finish()?;
        Ok(self.written)
    }
}
