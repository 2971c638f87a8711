use serde::{Deserialize, Serialize};

/// A rectangular map of terrain letters, row by row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeographyLayout {
    pub rows: usize,
    pub cols: usize,
    /// `rows` strings of exactly `cols` letters each.
    pub lines: Vec<Vec<char>>,
}

impl GeographyLayout {
    /// Builds a layout from text lines, one line per row.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let lines: Vec<Vec<char>> = lines
            .iter()
            .map(|l| l.as_ref().chars().filter(|c| !c.is_whitespace()).collect())
            .collect();
        Self {
            rows: lines.len(),
            cols: lines.first().map_or(0, Vec::len),
            lines,
        }
    }

    /// Terrain letter at `(x, y)`, where `x` is the column.
    pub fn letter(&self, x: usize, y: usize) -> Option<char> {
        self.lines.get(y).and_then(|row| row.get(x)).copied()
    }

    pub fn is_rectangular(&self) -> bool {
        self.lines.len() == self.rows && self.lines.iter().all(|row| row.len() == self.cols)
    }
}
