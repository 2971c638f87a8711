use crate::animal::{Animal, AnimalId};
use crate::error::{ConfigError, Result};
use crate::grid::Grid;
use crate::rng::RandomSource;
use crate::species::{Species, SpeciesId};
use crate::world::World;
use biosim_data::{PopulationRecord, SpeciesParams};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Outcome of seeding a world from population records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PopulationLoad {
    pub placed: usize,
    pub skipped: usize,
}

impl World<ChaCha8Rng> {
    /// An empty world on `grid` whose random stream is seeded with `seed`.
    pub fn new(grid: Grid, seed: u64) -> Self {
        Self::with_rng(grid, ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RandomSource> World<R> {
    pub fn with_rng(grid: Grid, rng: R) -> Self {
        Self {
            year: 0,
            grid,
            species: Vec::new(),
            animals: BTreeMap::new(),
            next_id: 0,
            rng,
        }
    }

    /// Validates and registers a species. Registration order is breeding order.
    pub fn add_species(&mut self, params: &SpeciesParams) -> Result<SpeciesId> {
        let id = SpeciesId(self.species.len());
        let species = Species::from_params(id, params)?;
        if self.species_by_name(species.name()).is_some() {
            return Err(ConfigError::DuplicateSpecies(species.name().to_string()));
        }
        tracing::debug!(
            species = species.name(),
            predator = species.is_predator(),
            "registered species"
        );
        self.species.push(Arc::new(species));
        Ok(id)
    }

    /// Places an animal of the named species with explicit age and weight.
    ///
    /// Returns `None` for an unknown species, a position off the map or on
    /// non-live terrain, or a weight that is negative or not finite.
    pub fn insert_animal(
        &mut self,
        species: &str,
        age: u32,
        weight: f64,
        x: usize,
        y: usize,
    ) -> Option<AnimalId> {
        let species = self.species_by_name(species)?.clone();
        if !weight.is_finite() || weight < 0.0 {
            return None;
        }
        let cell = self.grid.cell_at(x, y)?;
        let animal = Animal::new(self.next_animal_id(), species, age, weight);
        self.place(animal, cell)
    }

    /// Places a newborn of `species` at `(x, y)`.
    pub fn spawn(&mut self, species: SpeciesId, x: usize, y: usize) -> Option<AnimalId> {
        let species = self.species_by_id(species)?.clone();
        let cell = self.grid.cell_at(x, y)?;
        let animal = Animal::newborn(self.next_animal_id(), species);
        self.place(animal, cell)
    }

    /// The id of the species registered as `name`.
    pub fn species_id(&self, name: &str) -> Result<SpeciesId> {
        self.species_by_name(name)
            .map(|species| species.id())
            .ok_or_else(|| ConfigError::UnknownSpecies(name.to_string()))
    }

    /// Seeds every animal of every record, skipping the ones that cannot be
    /// placed with a warning.
    pub fn load_population(&mut self, records: &[PopulationRecord]) -> PopulationLoad {
        let mut load = PopulationLoad::default();
        for record in records {
            if let Err(e) = self.species_id(&record.species) {
                load.skipped += record.animals.len();
                tracing::warn!(
                    x = record.x,
                    y = record.y,
                    animals = record.animals.len(),
                    "skipped population record: {e}"
                );
                continue;
            }
            for animal in &record.animals {
                let placed = self.insert_animal(
                    &record.species,
                    animal.age,
                    animal.weight,
                    record.x as usize,
                    record.y as usize,
                );
                if placed.is_some() {
                    load.placed += 1;
                } else {
                    load.skipped += 1;
                    tracing::warn!(
                        species = %record.species,
                        x = record.x,
                        y = record.y,
                        age = animal.age,
                        weight = animal.weight,
                        "skipped population entry"
                    );
                }
            }
        }
        tracing::debug!(placed = load.placed, skipped = load.skipped, "population loaded");
        load
    }
}
