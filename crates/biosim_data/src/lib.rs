//! Plain data records shared by the BioSim engine and its file collaborators.
//!
//! Nothing in here simulates anything: these are the already-typed values the
//! readers in `biosim_io` produce and the engine in `biosim_core` consumes.

pub mod data;

pub use data::geography::GeographyLayout;
pub use data::population::{AnimalRecord, PopulationRecord};
pub use data::species::SpeciesParams;
pub use data::terrain::{Rgb, TerrainArchetype};
