//! One location of the grid: terrain, food stock and residents.

use crate::animal::AnimalId;
use crate::terrain::TerrainType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

/// Index of a cell in the grid's row-major cell arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub usize);

#[derive(Debug, Clone)]
pub struct Cell {
    id: CellId,
    x: usize,
    y: usize,
    terrain: Arc<TerrainType>,
    food: f64,
    occupants: BTreeSet<AnimalId>,
    /// Left, up, right, down. The cell itself stands in for a missing neighbour.
    neighbours: [CellId; 4],
}

impl Cell {
    /// A cell starting with a full food stock and no neighbours but itself.
    pub fn new(id: CellId, x: usize, y: usize, terrain: Arc<TerrainType>) -> Self {
        let food = terrain.max_food();
        Self {
            id,
            x,
            y,
            terrain,
            food,
            occupants: BTreeSet::new(),
            neighbours: [id; 4],
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn terrain(&self) -> &Arc<TerrainType> {
        &self.terrain
    }

    pub fn is_live(&self) -> bool {
        self.terrain.is_live()
    }

    pub fn neighbours(&self) -> &[CellId; 4] {
        &self.neighbours
    }

    pub(crate) fn set_neighbours(&mut self, neighbours: [CellId; 4]) {
        self.neighbours = neighbours;
    }

    /// Food currently on the cell.
    pub fn graze_available(&self) -> f64 {
        self.food
    }

    /// Hands out `min(food, requested)` and removes it from the stock.
    pub fn graze(&mut self, requested: f64) -> f64 {
        let granted = self.food.min(requested.max(0.0));
        self.food -= granted;
        granted
    }

    /// `food += α · (max_food − food)`.
    pub fn regrow(&mut self) {
        self.food += self.terrain.alpha() * (self.terrain.max_food() - self.food);
    }

    /// Overrides the food stock, clamped to `[0, max_food]`.
    pub fn set_food(&mut self, food: f64) {
        self.food = food.clamp(0.0, self.terrain.max_food());
    }

    /// Residents in id order.
    pub fn occupants(&self) -> &BTreeSet<AnimalId> {
        &self.occupants
    }

    pub fn contains(&self, animal: AnimalId) -> bool {
        self.occupants.contains(&animal)
    }

    /// Fails without touching the cell when the terrain is not live.
    pub(crate) fn add_animal(&mut self, animal: AnimalId) -> bool {
        if !self.is_live() {
            return false;
        }
        self.occupants.insert(animal);
        true
    }

    pub(crate) fn remove_animal(&mut self, animal: AnimalId) -> bool {
        self.occupants.remove(&animal)
    }
}
