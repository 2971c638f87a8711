use crate::app::reporter::Reporter;
use anyhow::{Context, Result};
use biosim_core::{Grid, Metrics, SimulationConfig, World, YearSummary};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// What a finished run did, in a form that can be printed as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub year_begin: u32,
    pub year_end: u32,
    pub years: u64,
    pub births: u64,
    pub deaths: u64,
    pub eaten: u64,
    pub files_written: usize,
    pub fingerprint: String,
    /// The last simulated year, if any year ran.
    pub last_year: Option<YearSummary>,
}

/// A world built from a run configuration, ready to be stepped year by year.
pub struct Simulation {
    config: SimulationConfig,
    world: World,
    metrics: Metrics,
}

impl Simulation {
    /// Reads every input file named by `config` and seeds the world.
    pub fn load(config: SimulationConfig) -> Result<Self> {
        config.validate()?;

        let terrain = biosim_io::load_terrain(&config.terrain)?;
        let layout = biosim_io::read_geography(&config.geography)?;
        let grid = Grid::new(&layout, &terrain)
            .with_context(|| format!("Invalid map in {}", config.geography.display()))?;

        let mut world = World::new(grid, config.seed);
        for path in &config.species {
            let params = biosim_io::read_species(path)?;
            world
                .add_species(&params)
                .with_context(|| format!("Invalid species in {}", path.display()))?;
        }

        for path in &config.populations {
            let population = biosim_io::read_population(path)?;
            let load = world.load_population(&population.records);
            tracing::info!(
                file = %path.display(),
                placed = load.placed,
                skipped = load.skipped,
                "loaded population"
            );
        }

        world.set_year(config.year_begin);
        tracing::info!(
            rows = world.grid().rows(),
            cols = world.grid().cols(),
            species = world.species().len(),
            animals = world.animal_count(),
            year_begin = config.year_begin,
            year_end = config.year_end,
            "simulation loaded"
        );

        Ok(Self {
            config,
            world,
            metrics: Metrics::new(),
        })
    }

    /// Loads the run file at `path`, `.toml` or `.sim`.
    pub fn from_run_file(path: &Path) -> Result<Self> {
        let config = biosim_io::load_config(path)?;
        Self::load(config).with_context(|| format!("Could not set up {}", path.display()))
    }

    /// Steps from the start year through the end year, writing every report.
    pub fn run(&mut self) -> Result<RunSummary> {
        let fingerprint = self.config.fingerprint();
        tracing::info!(
            fingerprint = %fingerprint,
            stem = %self.config.output_stem.display(),
            "starting run"
        );
        let mut reporter = Reporter::create(
            self.config.output_stem.clone(),
            self.geography_name(),
            self.config.reports,
            &fingerprint,
        )?;

        reporter.record(&self.world)?;
        let mut last_year = None;
        while self.world.year() <= self.config.year_end {
            let started = Instant::now();
            let summary = self.world.step();
            self.metrics.record_year(&summary, started.elapsed());
            reporter.dump_due(&self.world)?;
            reporter.record(&self.world)?;
            last_year = Some(summary);
        }
        let files_written = reporter.finish()?;

        tracing::info!(
            years = self.metrics.years(),
            animals = self.metrics.animals(),
            elapsed_ms = self.metrics.elapsed().as_millis() as u64,
            "simulation finished"
        );

        Ok(RunSummary {
            year_begin: self.config.year_begin,
            year_end: self.config.year_end,
            years: self.metrics.years(),
            births: self.metrics.births(),
            deaths: self.metrics.deaths(),
            eaten: self.metrics.eaten(),
            files_written,
            fingerprint,
            last_year,
        })
    }

    /// The map's file name as written into report headers.
    fn geography_name(&self) -> String {
        self.config
            .geography
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
