//! Core data structures for the BioSim simulation.

pub mod geography;
pub mod population;
pub mod species;
pub mod terrain;
