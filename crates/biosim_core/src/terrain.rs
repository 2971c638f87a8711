//! Terrain archetypes and the per-run letter table.

use crate::error::{ConfigError, Result};
use biosim_data::{Rgb, TerrainArchetype};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Immutable description of one map letter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainType {
    letter: char,
    alpha: f64,
    max_food: f64,
    live: bool,
    color: Rgb,
}

impl TerrainType {
    /// Builds a terrain type, rejecting α outside `[0, 1]` and negative capacity.
    ///
    /// Non-live terrain is normalized to α = 0 and no food so it can never
    /// hold or regrow anything.
    pub fn new(letter: char, alpha: f64, max_food: f64, live: bool, color: Rgb) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ConfigError::InvalidTerrain {
                letter,
                problem: format!("alpha must lie in [0, 1], got {alpha}"),
            });
        }
        if max_food.is_nan() || max_food < 0.0 {
            return Err(ConfigError::InvalidTerrain {
                letter,
                problem: format!("max food must be non-negative, got {max_food}"),
            });
        }
        let (alpha, max_food) = if live { (alpha, max_food) } else { (0.0, 0.0) };
        Ok(Self {
            letter,
            alpha,
            max_food,
            live,
            color,
        })
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn max_food(&self) -> f64 {
        self.max_food
    }

    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn color(&self) -> Rgb {
        self.color
    }
}

impl TryFrom<&TerrainArchetype> for TerrainType {
    type Error = ConfigError;

    fn try_from(a: &TerrainArchetype) -> Result<Self> {
        Self::new(a.letter, a.alpha, a.max_food, a.live, a.color)
    }
}

/// Letter to terrain lookup, shared by every cell of one grid.
#[derive(Debug, Clone, Default)]
pub struct TerrainTable {
    types: BTreeMap<char, Arc<TerrainType>>,
}

impl TerrainTable {
    /// The fixed five-letter table: ocean, savannah, jungle, mountain, desert.
    ///
    /// Only savannah regrowth and the savannah and jungle capacities are tunable.
    pub fn builtin(alpha: f64, max_food_savannah: f64, max_food_jungle: f64) -> Result<Self> {
        Self::from_archetypes(&[
            TerrainArchetype {
                letter: 'H',
                alpha: 0.0,
                max_food: 0.0,
                live: false,
                color: Rgb::new(0x00, 0x00, 0xff),
            },
            TerrainArchetype {
                letter: 'S',
                alpha,
                max_food: max_food_savannah,
                live: true,
                color: Rgb::new(0xad, 0xff, 0x2f),
            },
            TerrainArchetype {
                letter: 'J',
                alpha: 1.0,
                max_food: max_food_jungle,
                live: true,
                color: Rgb::new(0x00, 0x80, 0x00),
            },
            TerrainArchetype {
                letter: 'F',
                alpha: 0.0,
                max_food: 0.0,
                live: false,
                color: Rgb::new(0x80, 0x80, 0x80),
            },
            TerrainArchetype {
                letter: 'O',
                alpha: 0.0,
                max_food: 0.0,
                live: true,
                color: Rgb::new(0xff, 0xd7, 0x00),
            },
        ])
    }

    /// Later duplicates of a letter replace earlier ones.
    pub fn from_archetypes(archetypes: &[TerrainArchetype]) -> Result<Self> {
        let mut types = BTreeMap::new();
        for archetype in archetypes {
            let terrain = TerrainType::try_from(archetype)?;
            types.insert(terrain.letter(), Arc::new(terrain));
        }
        Ok(Self { types })
    }

    pub fn get(&self, letter: char) -> Option<&Arc<TerrainType>> {
        self.types.get(&letter)
    }

    /// Terrain types in letter order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<TerrainType>> {
        self.types.values()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
