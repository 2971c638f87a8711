use crate::rng::RandomSource;
use crate::world::World;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CellSnapshot {
    pub x: usize,
    pub y: usize,
    pub terrain: char,
    pub food: f64,
    pub prey: usize,
    pub predators: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnimalSnapshot {
    pub species: String,
    pub predator: bool,
    pub x: usize,
    pub y: usize,
    pub age: u32,
    pub weight: f64,
    pub fitness: f64,
}

/// Read-only copy of a world for renderers and JSON dumps.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WorldSnapshot {
    pub year: u32,
    pub rows: usize,
    pub cols: usize,
    /// Every cell in reading order.
    pub cells: Vec<CellSnapshot>,
    /// Living animals in creation order.
    pub animals: Vec<AnimalSnapshot>,
}

impl WorldSnapshot {
    pub fn capture<R: RandomSource>(world: &World<R>) -> Self {
        let cells = world
            .grid()
            .cells()
            .map(|cell| {
                let predators = world.occupants(cell.id()).filter(|a| a.is_predator()).count();
                CellSnapshot {
                    x: cell.x(),
                    y: cell.y(),
                    terrain: cell.terrain().letter(),
                    food: cell.graze_available(),
                    prey: cell.occupants().len() - predators,
                    predators,
                }
            })
            .collect();
        let animals = world
            .animals()
            .filter_map(|a| {
                let cell = world.grid().cell(a.cell()?);
                Some(AnimalSnapshot {
                    species: a.species().name().to_string(),
                    predator: a.is_predator(),
                    x: cell.x(),
                    y: cell.y(),
                    age: a.age(),
                    weight: a.weight(),
                    fitness: a.fitness(),
                })
            })
            .collect();
        Self {
            year: world.year(),
            rows: world.grid().rows(),
            cols: world.grid().cols(),
            cells,
            animals,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::species::tests::{carnivore_params, herbivore_params};
    use crate::terrain::TerrainTable;
    use biosim_data::GeographyLayout;

    #[test]
    fn test_capture_counts_per_cell() {
        let layout = GeographyLayout::from_lines(&["HJS"]);
        let grid = Grid::new(&layout, &TerrainTable::builtin(0.3, 300.0, 800.0).unwrap()).unwrap();
        let mut world = World::new(grid, 3);
        world.add_species(&herbivore_params()).unwrap();
        world.add_species(&carnivore_params()).unwrap();
        world.insert_animal("Herbivore", 1, 10.0, 1, 0).unwrap();
        world.insert_animal("Herbivore", 1, 12.0, 1, 0).unwrap();
        world.insert_animal("Carnivore", 2, 9.0, 1, 0).unwrap();

        let snap = WorldSnapshot::capture(&world);
        assert_eq!(snap.cells.len(), 3);
        assert_eq!(snap.cells[1].terrain, 'J');
        assert_eq!(snap.cells[1].prey, 2);
        assert_eq!(snap.cells[1].predators, 1);
        assert_eq!(snap.cells[0].food, 0.0);
        assert_eq!(snap.animals.len(), 3);
        assert!(snap.animals[2].predator);

        let json = snap.to_json().unwrap();
        let back: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snap);
    }
}
