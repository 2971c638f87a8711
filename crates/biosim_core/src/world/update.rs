use crate::animal::AnimalId;
use crate::cell::CellId;
use crate::rng::RandomSource;
use crate::world::{FeedOutcome, World, YearSummary};

impl<R: RandomSource> World<R> {
    /// Advances the world by one year.
    ///
    /// Phases run in a fixed order, each completing before the next:
    /// - aging and death for every animal
    /// - wandering then regrowth, cell by cell in a freshly shuffled live order
    /// - breeding, over the same cell order
    /// - feeding: herbivores fittest first, then predators fittest first
    ///
    /// Every draw is taken from the world's single random stream, so a seed
    /// and a set of inputs fix the outcome exactly.
    pub fn step(&mut self) -> YearSummary {
        let deaths = self.age_and_cull();
        let order = self.grid.traversal_order(true, &mut self.rng).to_vec();
        let moves = self.wander_and_regrow(&order);
        let births = self.breed_all(&order);
        let eaten = self.feed_all();
        self.year += 1;

        let census = self.census();
        tracing::debug!(
            year = self.year,
            deaths,
            moves,
            births,
            eaten,
            "year complete"
        );
        YearSummary {
            year: self.year,
            births,
            deaths,
            eaten,
            census,
        }
    }

    /// Ages every animal, then kills it if it weighs nothing or loses its
    /// death draw. Returns the number of deaths.
    fn age_and_cull(&mut self) -> usize {
        let ids: Vec<AnimalId> = self.animals.keys().copied().collect();
        let mut dead = Vec::new();
        for id in ids {
            let Some(animal) = self.animals.get_mut(&id) else {
                continue;
            };
            animal.grow_older();
            let dies = animal.weight() == 0.0
                || animal.species().will_die(animal.fitness(), &mut self.rng);
            if dies {
                dead.push(id);
            }
        }
        for id in &dead {
            self.remove(*id);
        }
        tracing::debug!(deaths = dead.len(), "aging done");
        dead.len()
    }

    /// Gives every animal present in a cell when the cell is visited one wander
    /// attempt, then regrows the cell. Returns the number of animals that moved.
    fn wander_and_regrow(&mut self, order: &[CellId]) -> usize {
        let mut moves = 0;
        for &cell in order {
            let residents: Vec<AnimalId> =
                self.grid.cell(cell).occupants().iter().copied().collect();
            let neighbours = *self.grid.cell(cell).neighbours();
            for id in residents {
                let Some(animal) = self.animals.get(&id) else {
                    continue;
                };
                let fitness = animal.fitness();
                let species = animal.species().clone();
                if species.will_wander(fitness, &mut self.rng) {
                    let target = neighbours[self.rng.below(neighbours.len())];
                    if target != cell && self.relocate(id, target) {
                        moves += 1;
                    }
                }
            }
            self.grid.cell_mut(cell).regrow();
        }
        tracing::debug!(moves, "wandering done");
        moves
    }

    /// Breeds cell by cell, species by species in registration order.
    /// Returns the number of newborns.
    fn breed_all(&mut self, order: &[CellId]) -> usize {
        let mut births = 0;
        for &cell in order {
            for species in self.species.clone() {
                let breeders = self.cell_mates(cell, species.id(), true);
                let n = breeders.len();
                for parent in breeders {
                    let Some(fitness) = self.fitness_of(parent) else {
                        continue;
                    };
                    let chance = species.birth_chance(fitness, n);
                    if self.rng.uniform() < chance && self.breed(parent).is_some() {
                        births += 1;
                    }
                }
            }
        }
        tracing::debug!(births, "breeding done");
        births
    }

    /// Feeds herbivores then predators, each group fittest first. Animals
    /// eaten before their own turn are skipped. Returns the number eaten.
    fn feed_all(&mut self) -> usize {
        let mut queue: Vec<(AnimalId, f64, bool)> = self
            .animals
            .values()
            .map(|a| (a.id(), a.fitness(), a.is_predator()))
            .collect();
        queue.sort_by(|a, b| b.1.total_cmp(&a.1));
        queue.sort_by_key(|&(_, _, predator)| predator);

        let mut eaten = 0;
        for (id, _, _) in queue {
            if !self.animals.contains_key(&id) {
                continue;
            }
            if let FeedOutcome::Hunted(prey) = self.feed(id) {
                eaten += prey.len();
            }
        }
        tracing::debug!(eaten, "feeding done");
        eaten
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::Grid;
    use crate::rng::ScriptedDraws;
    use crate::species::tests::{carnivore_params, herbivore_params};
    use crate::terrain::TerrainTable;
    use crate::world::World;
    use biosim_data::{GeographyLayout, SpeciesParams};

    fn calm(mut params: SpeciesParams) -> SpeciesParams {
        params.mu = Some(0.0);
        params.gamma = Some(0.0);
        params.omega = Some(0.0);
        params
    }

    fn world(draws: ScriptedDraws, rows: &[&str]) -> World<ScriptedDraws> {
        let layout = GeographyLayout::from_lines(rows);
        let grid = Grid::new(&layout, &TerrainTable::builtin(0.3, 300.0, 800.0).unwrap()).unwrap();
        World::with_rng(grid, draws)
    }

    #[test]
    fn test_calm_herbivore_year() {
        let mut w = world(ScriptedDraws::constant(0.5), &["HHH", "HJH", "HHH"]);
        w.add_species(&calm(herbivore_params())).unwrap();
        let id = w.insert_animal("Herbivore", 5, 20.0, 1, 1).unwrap();
        let summary = w.step();
        assert_eq!(summary.year, 1);
        assert_eq!(summary.deaths, 0);
        assert_eq!(summary.births, 0);
        let a = w.animal(id).unwrap();
        assert_eq!(a.age(), 6);
        assert!((a.weight() - 28.0).abs() < 1e-9);
        let jungle = w.grid().cell_at(1, 1).unwrap();
        assert_eq!(w.grid().cell(jungle).graze_available(), 790.0);
    }

    fn wanderer() -> SpeciesParams {
        let mut params = calm(herbivore_params());
        params.mu = Some(1.0);
        params
    }

    #[test]
    fn test_wanderer_moves_to_picked_neighbour() {
        // shuffle swaps the two live cells, then the wander pick is "right"
        let draws = ScriptedDraws::constant(0.0).with_indices([0, 2]);
        let mut w = world(draws, &["HHHH", "HJJH", "HHHH"]);
        w.add_species(&wanderer()).unwrap();
        let id = w.insert_animal("Herbivore", 5, 20.0, 1, 1).unwrap();
        let home = w.grid().cell_at(1, 1).unwrap();
        let east = w.grid().cell_at(2, 1).unwrap();
        assert_eq!(w.grid().cell(home).neighbours()[2], east);
        w.grid_mut().cell_mut(home).set_food(100.0);

        w.step();
        assert_eq!(w.animal(id).unwrap().cell(), Some(east));
        assert!(w.grid().cell(east).contains(id));
        assert!(!w.grid().cell(home).contains(id));
        // the vacated cell still regrew; the animal grazed where it landed
        assert_eq!(w.grid().cell(home).graze_available(), 800.0);
        assert_eq!(w.grid().cell(east).graze_available(), 790.0);
        // aging, wandering and breeding take one uniform each
        assert_eq!(w.rng().uniform_draws(), 3);
        assert_eq!(w.rng().index_draws(), 2);
    }

    #[test]
    fn test_wander_off_the_edge_stays_put() {
        // no swap in the shuffle, then the pick is "up" from the top row
        let draws = ScriptedDraws::constant(0.0).with_indices([1, 1]);
        let mut w = world(draws, &["JJ"]);
        w.add_species(&wanderer()).unwrap();
        let id = w.insert_animal("Herbivore", 5, 20.0, 0, 0).unwrap();
        let home = w.grid().cell_at(0, 0).unwrap();
        assert_eq!(w.grid().cell(home).neighbours()[1], home);

        w.step();
        assert_eq!(w.animal(id).unwrap().cell(), Some(home));
        assert_eq!(w.grid().cell(home).occupants().len(), 1);
        assert_eq!(w.grid().cell(home).graze_available(), 790.0);
        assert_eq!(w.rng().uniform_draws(), 3);
        assert_eq!(w.rng().index_draws(), 2);
    }

    #[test]
    fn test_zero_weight_dies_without_a_draw() {
        let mut w = world(ScriptedDraws::constant(0.99), &["J"]);
        w.add_species(&calm(herbivore_params())).unwrap();
        w.insert_animal("Herbivore", 5, 0.0, 0, 0).unwrap();
        let summary = w.step();
        assert_eq!(summary.deaths, 1);
        assert_eq!(w.animal_count(), 0);
        assert_eq!(w.rng().uniform_draws(), 0);
    }

    #[test]
    fn test_newborns_feed_in_their_birth_year() {
        let mut params = calm(herbivore_params());
        params.gamma = Some(10.0);
        let mut w = world(ScriptedDraws::constant(0.0), &["J"]);
        w.add_species(&params).unwrap();
        w.insert_animal("Herbivore", 5, 40.0, 0, 0).unwrap();
        w.insert_animal("Herbivore", 5, 40.0, 0, 0).unwrap();
        let summary = w.step();
        assert_eq!(summary.births, 2);
        let newborns: Vec<_> = w.animals().filter(|a| a.age() == 0).collect();
        assert_eq!(newborns.len(), 2);
        for child in newborns {
            assert!((child.weight() - (8.0 + 0.9 * 10.0)).abs() < 1e-9);
        }
        let cell = w.grid().cell_at(0, 0).unwrap();
        assert_eq!(w.grid().cell(cell).graze_available(), 800.0 - 40.0);
    }

    #[test]
    fn test_fitter_herbivore_grazes_first() {
        let mut glutton = calm(herbivore_params());
        glutton.name = Some("Glutton".into());
        glutton.food_desire = Some(85.0);
        let mut w = world(ScriptedDraws::constant(0.5), &["S"]);
        w.add_species(&calm(herbivore_params())).unwrap();
        w.add_species(&glutton).unwrap();
        let weak = w.insert_animal("Herbivore", 5, 5.0, 0, 0).unwrap();
        let strong = w.insert_animal("Herbivore", 10, 40.0, 0, 0).unwrap();
        let first = w.insert_animal("Glutton", 1, 40.0, 0, 0).unwrap();
        let cell = w.grid().cell_at(0, 0).unwrap();
        w.grid_mut().cell_mut(cell).set_food(0.0);

        // regrowth leaves 0.3 * 300 = 90 units for the whole cell
        w.step();
        let gain = |id, before: f64| w.animal(id).unwrap().weight() - before * 0.95;
        assert!((gain(first, 40.0) - 0.9 * 85.0).abs() < 1e-9);
        assert!((gain(strong, 40.0) - 0.9 * 5.0).abs() < 1e-9);
        assert!(gain(weak, 5.0).abs() < 1e-9);
        assert_eq!(w.grid().cell(cell).graze_available(), 0.0);
    }

    #[test]
    fn test_predators_feed_after_herbivores() {
        let mut carn = calm(carnivore_params());
        carn.delta_phi_max = Some(1e-9);
        let mut w = world(ScriptedDraws::constant(0.5), &["J"]);
        w.add_species(&calm(herbivore_params())).unwrap();
        w.add_species(&carn).unwrap();
        w.insert_animal("Carnivore", 5, 20.0, 0, 0).unwrap();
        w.insert_animal("Herbivore", 90, 2.0, 0, 0).unwrap();
        let summary = w.step();
        assert_eq!(summary.eaten, 1);
        assert_eq!(summary.census.prey, 0);
        assert_eq!(summary.census.predators, 1);
        let cell = w.grid().cell_at(0, 0).unwrap();
        assert_eq!(w.grid().cell(cell).graze_available(), 790.0);
    }
}
