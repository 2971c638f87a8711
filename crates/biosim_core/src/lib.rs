//! # BioSim Core
//!
//! A deterministic predator/prey simulation on a grid of terrain cells.
//!
//! Each simulated year runs four phases in a fixed order: aging and death,
//! wandering with food regrowth, breeding, and feeding. All randomness comes
//! from one seeded stream owned by the [`World`], so a seed and a set of
//! inputs reproduce a run exactly.
//!
//! ## Example
//!
//! ```
//! use biosim_core::{Grid, TerrainTable, World};
//! use biosim_data::{GeographyLayout, SpeciesParams};
//!
//! let layout = GeographyLayout::from_lines(&["HHH", "HJH", "HHH"]);
//! let terrain = TerrainTable::builtin(0.3, 300.0, 800.0).unwrap();
//! let mut world = World::new(Grid::new(&layout, &terrain).unwrap(), 42);
//!
//! let herbivore = SpeciesParams {
//!     birthweight: Some(8.0),
//!     beta: Some(0.9),
//!     sigma: Some(0.05),
//!     min_weight: Some(0.0),
//!     age_half: Some(40),
//!     phi_age: Some(0.2),
//!     weight_half_low: Some(10.0),
//!     phi_under: Some(0.1),
//!     weight_half_high: Some(60.0),
//!     phi_over: Some(0.1),
//!     mu: Some(0.25),
//!     gamma: Some(0.8),
//!     zeta: Some(1.5),
//!     omega: Some(0.4),
//!     food_desire: Some(10.0),
//!     ..SpeciesParams::default()
//! };
//! world.add_species(&herbivore).unwrap();
//! world.insert_animal("B", 3, 20.0, 1, 1).unwrap();
//!
//! let summary = world.step();
//! assert_eq!(summary.year, 1);
//! ```

/// Run configuration and report intervals
pub mod config;
/// Setup errors
pub mod error;
/// Logistic fitness curve
pub mod fitness;
/// Run metrics and logging setup
pub mod metrics;
/// The shared random stream
pub mod rng;
/// Serializable world snapshots
pub mod snapshot;
/// Species archetypes and behavior formulas
pub mod species;
/// Terrain archetypes
pub mod terrain;
/// Grid cells
pub mod cell;
/// The cell arena with adjacency
pub mod grid;
/// Individual animals
pub mod animal;
/// The simulation engine and its yearly step
pub mod world;

pub use animal::{Animal, AnimalId};
pub use cell::{Cell, CellId};
pub use config::{ReportIntervals, SimulationConfig, TerrainSource};
pub use error::ConfigError;
pub use fitness::FitnessCurve;
pub use grid::{coord_pack, coord_unpack, Grid};
pub use metrics::{init_logging, Metrics};
pub use rng::{RandomSource, ScriptedDraws};
pub use snapshot::WorldSnapshot;
pub use species::{Diet, Species, SpeciesId};
pub use terrain::{TerrainTable, TerrainType};
pub use world::{Census, FeedOutcome, PopulationLoad, TerrainPopulation, World, YearSummary};
