//! Individual agents.

use crate::cell::CellId;
use crate::species::Species;
use serde::{Deserialize, Serialize};
use std::cell::OnceCell;
use std::fmt;
use std::sync::Arc;

/// Stable handle of an animal, unique for the lifetime of a world.
///
/// Ids grow monotonically, so ordering by id is ordering by creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnimalId(pub u64);

impl fmt::Display for AnimalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Animal {
    id: AnimalId,
    species: Arc<Species>,
    age: u32,
    weight: f64,
    fitness: OnceCell<f64>,
    cell: Option<CellId>,
}

impl Animal {
    /// An unplaced animal with explicit age and weight, as loaded from a seed file.
    pub fn new(id: AnimalId, species: Arc<Species>, age: u32, weight: f64) -> Self {
        Self {
            id,
            species,
            age,
            weight,
            fitness: OnceCell::new(),
            cell: None,
        }
    }

    /// An unplaced animal of age 0 at its species' birthweight.
    pub fn newborn(id: AnimalId, species: Arc<Species>) -> Self {
        let weight = species.birthweight();
        Self::new(id, species, 0, weight)
    }

    pub fn id(&self) -> AnimalId {
        self.id
    }

    pub fn species(&self) -> &Arc<Species> {
        &self.species
    }

    pub fn is_predator(&self) -> bool {
        self.species.is_predator()
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Cell the animal lives in, `None` while unplaced.
    pub fn cell(&self) -> Option<CellId> {
        self.cell
    }

    pub(crate) fn set_cell(&mut self, cell: Option<CellId>) {
        self.cell = cell;
    }

    /// Fitness Φ, recomputed only after age or weight changed.
    pub fn fitness(&self) -> f64 {
        *self
            .fitness
            .get_or_init(|| self.species.fitness(self.weight, self.age))
    }

    /// Mature enough to count towards and take part in breeding.
    pub fn is_breeder(&self) -> bool {
        self.age >= 1
    }

    /// One year older and `σ · weight` lighter.
    pub fn grow_older(&mut self) {
        self.age += 1;
        self.weight -= self.species.weight_loss(self.weight);
        self.invalidate();
    }

    /// Adds `β · mass` to the weight.
    pub fn fatten(&mut self, mass: f64) {
        self.weight += self.species.gain(mass);
        self.invalidate();
    }

    /// Pays the birth loss if the species allows breeding at this weight.
    pub(crate) fn give_birth(&mut self) -> bool {
        if !self.species.can_breed(self.weight) {
            return false;
        }
        self.weight -= self.species.birth_loss();
        self.invalidate();
        true
    }

    fn invalidate(&mut self) {
        self.fitness.take();
    }
}
