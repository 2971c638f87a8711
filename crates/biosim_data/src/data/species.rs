use serde::{Deserialize, Serialize};

/// Raw species parameters as read from a species parameter file.
///
/// Every field is optional here; `biosim_core::Species::from_params` validates
/// the record as a whole and reports every problem at once.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SpeciesParams {
    pub name: Option<String>,
    /// Weight of every newborn.
    pub birthweight: Option<f64>,
    /// Metabolic efficiency: fraction of eaten mass turned into weight.
    pub beta: Option<f64>,
    /// Yearly fractional weight loss.
    pub sigma: Option<f64>,
    pub min_weight: Option<f64>,
    pub age_half: Option<i32>,
    pub phi_age: Option<f64>,
    pub weight_half_low: Option<f64>,
    pub phi_under: Option<f64>,
    pub weight_half_high: Option<f64>,
    pub phi_over: Option<f64>,
    /// Wandering probability coefficient.
    pub mu: Option<f64>,
    /// Breeding probability coefficient.
    pub gamma: Option<f64>,
    /// Breeding weight-loss coefficient.
    pub zeta: Option<f64>,
    /// Death probability coefficient.
    pub omega: Option<f64>,
    /// Herbivore food desire.
    pub food_desire: Option<f64>,
    /// Predator fitness difference guaranteeing a catch.
    pub delta_phi_max: Option<f64>,
}
