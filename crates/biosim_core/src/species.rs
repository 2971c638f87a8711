//! Species archetypes: physiology constants and the behavior formulas built on them.

use crate::error::{ConfigError, Result};
use crate::fitness::FitnessCurve;
use crate::rng::RandomSource;
use biosim_data::SpeciesParams;
use serde::{Deserialize, Serialize};

/// Index of a species in the world's species table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpeciesId(pub usize);

/// How a species feeds. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Diet {
    /// Grazes up to `food_desire` units from its cell every year.
    Herbivore { food_desire: f64 },
    /// Hunts other species in its cell.
    Predator { delta_phi_max: f64 },
}

/// Immutable per-run species archetype, shared by all its animals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    id: SpeciesId,
    name: String,
    diet: Diet,
    birthweight: f64,
    beta: f64,
    sigma: f64,
    mu: f64,
    gamma: f64,
    zeta: f64,
    omega: f64,
    curve: FitnessCurve,
}

impl Species {
    /// Validates a complete parameter record.
    ///
    /// Every missing or out-of-range field is collected into one
    /// `ConfigError::InvalidSpecies`. When both `F` and `ΔΦmax` are given the
    /// species is a herbivore and `ΔΦmax` is ignored.
    pub fn from_params(id: SpeciesId, params: &SpeciesParams) -> Result<Self> {
        let mut problems = Vec::new();

        let mut required = |field: Option<f64>, key: &str| -> f64 {
            field.unwrap_or_else(|| {
                problems.push(format!("missing {key}"));
                f64::NAN
            })
        };
        let birthweight = required(params.birthweight, "v_fod");
        let beta = required(params.beta, "beta");
        let sigma = required(params.sigma, "sigma");
        let min_weight = required(params.min_weight, "v_min");
        let age_half = required(params.age_half.map(f64::from), "a_halv");
        let phi_age = required(params.phi_age, "phi_alder");
        let weight_half_low = required(params.weight_half_low, "v_halv_under");
        let phi_under = required(params.phi_under, "phi_under");
        let weight_half_high = required(params.weight_half_high, "v_halv_over");
        let phi_over = required(params.phi_over, "phi_over");
        let mu = required(params.mu, "mu");
        let gamma = required(params.gamma, "gamma");
        let zeta = required(params.zeta, "zeta");
        let omega = required(params.omega, "omega");

        let diet = match (params.food_desire, params.delta_phi_max) {
            (Some(food_desire), ignored) => {
                if ignored.is_some() {
                    tracing::warn!(
                        species = params.name.as_deref().unwrap_or("B"),
                        "both F and DeltaPhiMax given; DeltaPhiMax is ignored"
                    );
                }
                if food_desire.is_nan() || food_desire < 0.0 {
                    problems.push(format!("F must be non-negative, got {food_desire}"));
                }
                Some(Diet::Herbivore { food_desire })
            }
            (None, Some(delta_phi_max)) => {
                if delta_phi_max.is_nan() || delta_phi_max <= 0.0 {
                    problems.push(format!("DeltaPhiMax must be positive, got {delta_phi_max}"));
                }
                Some(Diet::Predator { delta_phi_max })
            }
            (None, None) => {
                problems.push("neither F nor DeltaPhiMax given".to_string());
                None
            }
        };

        let mut check = |ok: bool, message: String| {
            if !ok {
                problems.push(message);
            }
        };
        if !birthweight.is_nan() {
            check(birthweight > 0.0, format!("v_fod must be positive, got {birthweight}"));
        }
        for (key, value) in [
            ("beta", beta),
            ("sigma", sigma),
            ("zeta", zeta),
            ("omega", omega),
            ("mu", mu),
            ("gamma", gamma),
            ("v_min", min_weight),
        ] {
            if !value.is_nan() {
                check(value >= 0.0, format!("{key} must be non-negative, got {value}"));
            }
        }
        if !sigma.is_nan() {
            check(sigma < 1.0, format!("sigma must be below 1, got {sigma}"));
        }

        let name = params.name.clone().unwrap_or_else(|| {
            match diet {
                Some(Diet::Predator { .. }) => "R",
                _ => "B",
            }
            .to_string()
        });

        match diet {
            Some(diet) if problems.is_empty() => Ok(Self {
                id,
                name,
                diet,
                birthweight,
                beta,
                sigma,
                mu,
                gamma,
                zeta,
                omega,
                curve: FitnessCurve {
                    min_weight,
                    age_half,
                    phi_age,
                    weight_half_low,
                    phi_under,
                    weight_half_high,
                    phi_over,
                },
            }),
            _ => Err(ConfigError::InvalidSpecies { name, problems }),
        }
    }

    pub fn id(&self) -> SpeciesId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn diet(&self) -> Diet {
        self.diet
    }

    pub fn is_predator(&self) -> bool {
        matches!(self.diet, Diet::Predator { .. })
    }

    pub fn birthweight(&self) -> f64 {
        self.birthweight
    }

    pub fn fitness_curve(&self) -> &FitnessCurve {
        &self.curve
    }

    pub fn fitness(&self, weight: f64, age: u32) -> f64 {
        self.curve.evaluate(weight, age)
    }

    /// Weight a parent gives up per offspring: `ζ · birthweight`.
    pub fn birth_loss(&self) -> f64 {
        self.zeta * self.birthweight
    }

    pub fn can_breed(&self, weight: f64) -> bool {
        weight >= self.curve.min_weight + self.birth_loss()
    }

    /// Yearly weight loss: `σ · weight`.
    pub fn weight_loss(&self, weight: f64) -> f64 {
        self.sigma * weight
    }

    /// Weight gained from eating `mass`.
    pub fn gain(&self, mass: f64) -> f64 {
        self.beta * mass
    }

    /// `Φ · γ · (N − 1)`; zero or negative when the animal is alone.
    pub fn birth_chance(&self, fitness: f64, same_species_in_cell: usize) -> f64 {
        fitness * self.gamma * (same_species_in_cell as f64 - 1.0)
    }

    /// `ω · (1 − Φ)`, or certain death when Φ is not positive.
    pub fn death_chance(&self, fitness: f64) -> f64 {
        if fitness <= 0.0 {
            1.0
        } else {
            self.omega * (1.0 - fitness)
        }
    }

    /// Draws for death. No draw is taken when death is certain.
    pub fn will_die<R: RandomSource>(&self, fitness: f64, rng: &mut R) -> bool {
        if fitness <= 0.0 {
            return true;
        }
        rng.uniform() < self.death_chance(fitness)
    }

    /// `μ · Φ`.
    pub fn wander_chance(&self, fitness: f64) -> f64 {
        self.mu * fitness
    }

    pub fn will_wander<R: RandomSource>(&self, fitness: f64, rng: &mut R) -> bool {
        rng.uniform() < self.wander_chance(fitness)
    }

    /// Probability that an animal of this species catches prey of fitness
    /// `prey`, given its own fitness `hunter`. Always 0 for herbivores.
    pub fn catch_chance(&self, hunter: f64, prey: f64) -> f64 {
        let Diet::Predator { delta_phi_max } = self.diet else {
            return 0.0;
        };
        let delta = hunter - prey;
        if delta <= 0.0 {
            0.0
        } else if delta < delta_phi_max {
            delta / delta_phi_max
        } else {
            1.0
        }
    }

    /// One catch attempt; always consumes exactly one draw.
    pub fn attempt_catch<R: RandomSource>(&self, hunter: f64, prey: f64, rng: &mut R) -> bool {
        rng.uniform() < self.catch_chance(hunter, prey)
    }
}
