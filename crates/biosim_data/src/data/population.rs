use serde::{Deserialize, Serialize};

/// Age and weight of one seeded animal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub age: u32,
    pub weight: f64,
}

/// A group of animals of one species placed in one cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationRecord {
    pub species: String,
    pub x: u32,
    pub y: u32,
    pub animals: Vec<AnimalRecord>,
}

impl PopulationRecord {
    pub fn new<S: Into<String>>(species: S, x: u32, y: u32) -> Self {
        Self {
            species: species.into(),
            x,
            y,
            animals: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_animal(mut self, age: u32, weight: f64) -> Self {
        self.animals.push(AnimalRecord { age, weight });
        self
    }
}
