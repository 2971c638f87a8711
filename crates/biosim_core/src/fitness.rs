//! Fitness model: the product of three logistic terms over age and weight.

use serde::{Deserialize, Serialize};

/// `1 / (1 + exp(sign * steepness * (x - midpoint)))`.
///
/// `positive` selects sign +1, which makes the term fall as `x` grows past the
/// midpoint; sign -1 makes it rise.
#[inline]
pub fn logistic(x: f64, midpoint: f64, steepness: f64, positive: bool) -> f64 {
    let sign = if positive { 1.0 } else { -1.0 };
    1.0 / (1.0 + (sign * steepness * (x - midpoint)).exp())
}

/// Constants of a species' fitness curve.
///
/// Pure and stateless: animals cache the result themselves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessCurve {
    pub min_weight: f64,
    pub age_half: f64,
    pub phi_age: f64,
    pub weight_half_low: f64,
    pub phi_under: f64,
    pub weight_half_high: f64,
    pub phi_over: f64,
}

impl FitnessCurve {
    /// Fitness Φ in `[0, 1]`; exactly 0 below the minimum viable weight.
    pub fn evaluate(&self, weight: f64, age: u32) -> f64 {
        if weight < self.min_weight {
            return 0.0;
        }
        logistic(f64::from(age), self.age_half, self.phi_age, true)
            * logistic(weight, self.weight_half_low, self.phi_under, false)
            * logistic(weight, self.weight_half_high, self.phi_over, true)
    }
}
