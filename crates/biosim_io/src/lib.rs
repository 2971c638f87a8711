//! # BioSim IO
//!
//! File collaborators of the BioSim engine.
//!
//! This crate provides:
//! - Structured error handling with file and line context
//! - Readers for run files (`.sim`, TOML), species and cell parameter files,
//!   terrain specs, `.geo` maps and `.pop` populations
//! - Writers for the `.dat`, `.dyr`, `.for` and `.pop` reports and JSON
//!   world snapshots

/// Error types and result aliases for file operations
pub mod error;
/// `.geo` map reader
pub mod geography;
/// Numbered output file names
pub mod naming;
/// Comment-aware tokenizer and key/value parameter files
pub mod params;
/// `.pop` reader and population dumps
pub mod population;
/// Plain-text yearly and per-cell reports
pub mod reports;
/// JSON helpers and world snapshot dumps
pub mod serialization;
/// Run files
pub mod sim_file;
/// Species parameter files
pub mod species;
/// Terrain tables
pub mod terrain;

pub use error::{IoError, Result};
pub use geography::read_geography;
pub use naming::{create_output_dir, numbered, with_extension};
pub use population::{read_population, write_population, PopulationFile};
pub use reports::{write_animals, write_file, write_food, DatReport};
pub use serialization::{read_json_file, write_json_file, write_snapshot};
pub use sim_file::load_config;
pub use species::read_species;
pub use terrain::load_terrain;
