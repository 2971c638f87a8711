//! The simulation engine: grid, species table, living animals and the one
//! random stream every decision draws from.

use crate::animal::{Animal, AnimalId};
use crate::cell::CellId;
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::species::{Species, SpeciesId};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

pub mod init;
pub mod logic;
pub mod update;

pub use init::PopulationLoad;
pub use logic::FeedOutcome;

/// Head counts and food stock over the whole map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Census {
    pub prey: usize,
    pub predators: usize,
    pub food: f64,
}

/// Herbivores and predators living on one terrain letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerrainPopulation {
    pub prey: usize,
    pub predators: usize,
}

/// What one call to `World::step` did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    /// The year the world is in after the step.
    pub year: u32,
    pub births: usize,
    pub deaths: usize,
    pub eaten: usize,
    pub census: Census,
}

pub struct World<R: RandomSource = ChaCha8Rng> {
    year: u32,
    grid: Grid,
    species: Vec<Arc<Species>>,
    animals: BTreeMap<AnimalId, Animal>,
    next_id: u64,
    rng: R,
}

impl<R: RandomSource> World<R> {
    pub fn year(&self) -> u32 {
        self.year
    }

    pub fn set_year(&mut self, year: u32) {
        self.year = year;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Direct cell access for seeding food stocks. Occupancy stays owned by the world.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Species in registration order.
    pub fn species(&self) -> &[Arc<Species>] {
        &self.species
    }

    pub fn species_by_name(&self, name: &str) -> Option<&Arc<Species>> {
        self.species.iter().find(|s| s.name() == name)
    }

    pub fn species_by_id(&self, id: SpeciesId) -> Option<&Arc<Species>> {
        self.species.get(id.0)
    }

    /// Living animals in creation order.
    pub fn animals(&self) -> impl Iterator<Item = &Animal> {
        self.animals.values()
    }

    pub fn animal(&self, id: AnimalId) -> Option<&Animal> {
        self.animals.get(&id)
    }

    pub fn animal_count(&self) -> usize {
        self.animals.len()
    }

    pub fn fitness_of(&self, id: AnimalId) -> Option<f64> {
        self.animals.get(&id).map(Animal::fitness)
    }

    /// Residents of `cell` in id order.
    pub fn occupants(&self, cell: CellId) -> impl Iterator<Item = &Animal> {
        self.grid
            .cell(cell)
            .occupants()
            .iter()
            .filter_map(|id| self.animals.get(id))
    }

    /// Residents of `cell` belonging to `species`; with `breeders_only`, only
    /// those at least one year old.
    pub fn cell_mates(&self, cell: CellId, species: SpeciesId, breeders_only: bool) -> Vec<AnimalId> {
        self.occupants(cell)
            .filter(|a| a.species().id() == species && (!breeders_only || a.is_breeder()))
            .map(Animal::id)
            .collect()
    }

    pub fn census(&self) -> Census {
        let predators = self.animals.values().filter(|a| a.is_predator()).count();
        Census {
            prey: self.animals.len() - predators,
            predators,
            food: self.grid.live_cells().map(|c| c.graze_available()).sum(),
        }
    }

    /// Head counts per terrain letter. Letters nobody lives on are absent.
    pub fn population_by_terrain(&self) -> BTreeMap<char, TerrainPopulation> {
        let mut counts: BTreeMap<char, TerrainPopulation> = BTreeMap::new();
        for animal in self.animals.values() {
            let Some(cell) = animal.cell() else {
                continue;
            };
            let entry = counts
                .entry(self.grid.cell(cell).terrain().letter())
                .or_default();
            if animal.is_predator() {
                entry.predators += 1;
            } else {
                entry.prey += 1;
            }
        }
        counts
    }

    /// The random stream, for callers that need to script or inspect it.
    pub fn rng(&self) -> &R {
        &self.rng
    }
}
