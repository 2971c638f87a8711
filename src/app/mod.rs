//! Running complete simulations from run files.

pub mod reporter;
pub mod simulation;

pub use reporter::Reporter;
pub use simulation::{RunSummary, Simulation};
