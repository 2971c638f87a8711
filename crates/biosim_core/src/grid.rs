//! The map: a fixed arena of cells with precomputed adjacency.

use crate::cell::{Cell, CellId};
use crate::error::{ConfigError, Result};
use crate::rng::RandomSource;
use crate::terrain::TerrainTable;
use biosim_data::GeographyLayout;
use std::collections::BTreeMap;

/// Largest row or column count a packed coordinate can address.
pub const MAX_EXTENT: usize = 1 << 16;

/// Packs `(x, y)` into `(x << 16) | y`. Both must be below 2^16.
#[inline]
pub fn coord_pack(x: u32, y: u32) -> u32 {
    (x << 16) | (y & 0xFFFF)
}

#[inline]
pub fn coord_unpack(key: u32) -> (u32, u32) {
    (key >> 16, key & 0xFFFF)
}

#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Reading order: `y * cols + x`.
    cells: Vec<Cell>,
    index: BTreeMap<u32, CellId>,
    all: Vec<CellId>,
    /// Live cells; reshuffled in place on every randomized traversal.
    live: Vec<CellId>,
}

impl Grid {
    /// Builds every cell from a rectangular letter map.
    ///
    /// Fails on a ragged or empty map, on extents beyond 2^16, and on any
    /// letter missing from `terrain`.
    pub fn new(layout: &GeographyLayout, terrain: &TerrainTable) -> Result<Self> {
        let (rows, cols) = (layout.rows, layout.cols);
        if rows == 0 || cols == 0 {
            return Err(ConfigError::MalformedGeography(format!(
                "map must have at least one row and column, got {rows}x{cols}"
            )));
        }
        if rows >= MAX_EXTENT || cols >= MAX_EXTENT {
            return Err(ConfigError::MalformedGeography(format!(
                "map of {rows}x{cols} exceeds the addressable extent"
            )));
        }
        if !layout.is_rectangular() {
            return Err(ConfigError::MalformedGeography(format!(
                "expected {rows} rows of {cols} letters"
            )));
        }

        let mut cells = Vec::with_capacity(rows * cols);
        let mut index = BTreeMap::new();
        let mut live = Vec::new();
        for y in 0..rows {
            for x in 0..cols {
                let letter = layout.letter(x, y).unwrap_or(' ');
                let kind = terrain
                    .get(letter)
                    .ok_or(ConfigError::UnknownTerrain { letter, x, y })?;
                let id = CellId(cells.len());
                if kind.is_live() {
                    live.push(id);
                }
                index.insert(coord_pack(x as u32, y as u32), id);
                cells.push(Cell::new(id, x, y, kind.clone()));
            }
        }

        let mut grid = Self {
            rows,
            cols,
            all: (0..cells.len()).map(CellId).collect(),
            cells,
            index,
            live,
        };
        grid.link_neighbours();
        tracing::debug!(rows, cols, live = grid.live.len(), "grid built");
        Ok(grid)
    }

    fn link_neighbours(&mut self) {
        let (rows, cols) = (self.rows, self.cols);
        for i in 0..self.cells.len() {
            let (x, y) = (self.cells[i].x(), self.cells[i].y());
            let me = CellId(i);
            let at = |x: usize, y: usize| CellId(y * cols + x);
            let neighbours = [
                if x == 0 { me } else { at(x - 1, y) },
                if y == 0 { me } else { at(x, y - 1) },
                if x + 1 == cols { me } else { at(x + 1, y) },
                if y + 1 == rows { me } else { at(x, y + 1) },
            ];
            self.cells[i].set_neighbours(neighbours);
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.0]
    }

    pub fn cell_mut(&mut self, id: CellId) -> &mut Cell {
        &mut self.cells[id.0]
    }

    /// Cell at column `x`, row `y`.
    pub fn cell_at(&self, x: usize, y: usize) -> Option<CellId> {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        self.index.get(&coord_pack(x as u32, y as u32)).copied()
    }

    /// Cells in reading order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Live cells in reading order.
    pub fn live_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|c| c.is_live())
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// With `live_only`, reshuffles the cached live list and returns it;
    /// otherwise returns every cell in reading order.
    pub fn traversal_order<R: RandomSource>(&mut self, live_only: bool, rng: &mut R) -> &[CellId] {
        if live_only {
            rng.shuffle(&mut self.live);
            &self.live
        } else {
            &self.all
        }
    }
}
