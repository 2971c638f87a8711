//! # BioSim
//!
//! Runs predator/prey simulations described by run files and writes their
//! reports. The engine lives in `biosim_core` and the file formats in
//! `biosim_io`; this crate ties them together for the `biosim` binary.

pub mod app;

pub use app::{Reporter, RunSummary, Simulation};
pub use biosim_core::{SimulationConfig, World};
