//! Per-animal operations. Each keeps the animal map and cell occupancy in step.

use crate::animal::{Animal, AnimalId};
use crate::cell::CellId;
use crate::rng::RandomSource;
use crate::species::Diet;
use crate::world::World;

/// What an animal got out of its feeding turn.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedOutcome {
    /// Food a herbivore took from its cell.
    Grazed(f64),
    /// Prey a predator caught and ate, in the order caught.
    Hunted(Vec<AnimalId>),
}

impl<R: RandomSource> World<R> {
    pub(crate) fn next_animal_id(&mut self) -> AnimalId {
        let id = AnimalId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Registers `animal` in `cell`. Fails if the cell is not live.
    pub(crate) fn place(&mut self, mut animal: Animal, cell: CellId) -> Option<AnimalId> {
        let id = animal.id();
        if !self.grid.cell_mut(cell).add_animal(id) {
            return None;
        }
        animal.set_cell(Some(cell));
        self.animals.insert(id, animal);
        Some(id)
    }

    /// Moves an animal to `to`. A non-live target leaves it where it is.
    pub fn relocate(&mut self, id: AnimalId, to: CellId) -> bool {
        let Some(from) = self.animals.get(&id).and_then(Animal::cell) else {
            return false;
        };
        if from == to {
            return true;
        }
        if !self.grid.cell_mut(to).add_animal(id) {
            return false;
        }
        self.grid.cell_mut(from).remove_animal(id);
        if let Some(animal) = self.animals.get_mut(&id) {
            animal.set_cell(Some(to));
        }
        true
    }

    /// Takes an animal out of its cell and out of the world.
    pub fn remove(&mut self, id: AnimalId) -> Option<Animal> {
        let mut animal = self.animals.remove(&id)?;
        if let Some(cell) = animal.cell() {
            self.grid.cell_mut(cell).remove_animal(id);
        }
        animal.set_cell(None);
        Some(animal)
    }

    /// Lets a parent pay its birth loss and places the newborn in the parent's cell.
    ///
    /// Returns `None` when the parent is too light to breed.
    pub fn breed(&mut self, parent: AnimalId) -> Option<AnimalId> {
        let animal = self.animals.get_mut(&parent)?;
        let cell = animal.cell()?;
        if !animal.give_birth() {
            return None;
        }
        let species = animal.species().clone();
        let child = Animal::newborn(self.next_animal_id(), species);
        self.place(child, cell)
    }

    /// One feeding turn.
    ///
    /// Herbivores graze up to their food desire. Predators try every other
    /// resident of a different species with nonzero weight, one draw each,
    /// and eat every catch on the spot.
    pub fn feed(&mut self, id: AnimalId) -> FeedOutcome {
        let Some(animal) = self.animals.get(&id) else {
            return FeedOutcome::Hunted(Vec::new());
        };
        let Some(cell) = animal.cell() else {
            return FeedOutcome::Hunted(Vec::new());
        };
        let species = animal.species().clone();

        match species.diet() {
            Diet::Herbivore { food_desire } => {
                let granted = self.grid.cell_mut(cell).graze(food_desire);
                if let Some(animal) = self.animals.get_mut(&id) {
                    animal.fatten(granted);
                }
                FeedOutcome::Grazed(granted)
            }
            Diet::Predator { .. } => {
                let residents: Vec<AnimalId> =
                    self.grid.cell(cell).occupants().iter().copied().collect();
                let mut eaten = Vec::new();
                for prey_id in residents {
                    if prey_id == id {
                        continue;
                    }
                    let Some(prey) = self.animals.get(&prey_id) else {
                        continue;
                    };
                    if prey.species().id() == species.id() || prey.weight() == 0.0 {
                        continue;
                    }
                    let prey_fitness = prey.fitness();
                    let hunter_fitness = self.animals.get(&id).map_or(0.0, Animal::fitness);
                    if species.attempt_catch(hunter_fitness, prey_fitness, &mut self.rng) {
                        if let Some(prey) = self.remove(prey_id) {
                            if let Some(hunter) = self.animals.get_mut(&id) {
                                hunter.fatten(prey.weight());
                            }
                            eaten.push(prey_id);
                        }
                    }
                }
                FeedOutcome::Hunted(eaten)
            }
        }
    }
}
