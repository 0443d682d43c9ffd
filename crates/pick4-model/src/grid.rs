//! The 4×4 input box.
//!
//! Each cell holds at most one character. The box serializes as a 4×4 array
//! of strings with `""` for an empty cell, which is also the grid file format.

use serde::{Deserialize, Serialize};

use crate::error::{Pick4Error, Result};

/// Number of rows and columns in the box.
pub const GRID_SIZE: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")]
pub struct BoxGrid {
    cells: [[Option<char>; GRID_SIZE]; GRID_SIZE],
}

impl BoxGrid {
    /// Creates a box with every cell empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a box from four row strings, one character per cell.
    ///
    /// A row shorter than four characters leaves its trailing cells empty.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != GRID_SIZE {
            return Err(Pick4Error::InvalidShape { rows: rows.len() });
        }
        let mut grid = Self::new();
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.as_ref().chars().collect();
            if chars.len() > GRID_SIZE {
                return Err(Pick4Error::InvalidRow {
                    row,
                    len: chars.len(),
                });
            }
            for (col, value) in chars.into_iter().enumerate() {
                grid.cells[row][col] = Some(value);
            }
        }
        Ok(grid)
    }

    /// Builds a box from per-cell text, as typed into the input fields.
    pub fn from_cells<S: AsRef<str>>(cells: &[[S; GRID_SIZE]; GRID_SIZE]) -> Result<Self> {
        let mut grid = Self::new();
        for (row, values) in cells.iter().enumerate() {
            for (col, text) in values.iter().enumerate() {
                grid.set_text(row, col, text.as_ref())?;
            }
        }
        Ok(grid)
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..4`.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells[row][col]
    }

    /// Replaces the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..4`.
    pub fn set(&mut self, row: usize, col: usize, value: Option<char>) {
        self.cells[row][col] = value;
    }

    /// Sets a cell from field text holding zero or one character.
    pub fn set_text(&mut self, row: usize, col: usize, text: &str) -> Result<()> {
        let mut chars = text.chars();
        let value = chars.next();
        let extra = chars.count();
        if extra > 0 {
            return Err(Pick4Error::InvalidCell {
                row,
                col,
                len: extra + 1,
            });
        }
        self.set(row, col, value);
        Ok(())
    }

    /// Returns one row of cells.
    pub fn row(&self, row: usize) -> &[Option<char>; GRID_SIZE] {
        &self.cells[row]
    }

    /// Returns every empty cell as `(row, col)` in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::new();
        for (row, values) in self.cells.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                if value.is_none() {
                    empty.push((row, col));
                }
            }
        }
        empty
    }

    pub fn is_complete(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Returns the filled characters, or `IncompleteInput` naming every gap.
    pub fn filled(&self) -> Result<[[char; GRID_SIZE]; GRID_SIZE]> {
        let empty = self.empty_cells();
        if !empty.is_empty() {
            return Err(Pick4Error::IncompleteInput { empty });
        }
        let mut out = [[' '; GRID_SIZE]; GRID_SIZE];
        for (row, values) in self.cells.iter().enumerate() {
            for (col, value) in values.iter().enumerate() {
                if let Some(value) = value {
                    out[row][col] = *value;
                }
            }
        }
        Ok(out)
    }

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.cells = [[None; GRID_SIZE]; GRID_SIZE];
    }
}

impl TryFrom<Vec<Vec<String>>> for BoxGrid {
    type Error = Pick4Error;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self> {
        if rows.len() != GRID_SIZE {
            return Err(Pick4Error::InvalidShape { rows: rows.len() });
        }
        let mut grid = Self::new();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != GRID_SIZE {
                return Err(Pick4Error::InvalidRow {
                    row,
                    len: values.len(),
                });
            }
            for (col, text) in values.iter().enumerate() {
                grid.set_text(row, col, text)?;
            }
        }
        Ok(grid)
    }
}

impl From<BoxGrid> for Vec<Vec<String>> {
    fn from(grid: BoxGrid) -> Self {
        grid.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(String::from).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_empty() {
        let grid = BoxGrid::new();
        assert_eq!(grid.empty_cells().len(), 16);
        assert!(!grid.is_complete());
    }

    #[test]
    fn from_rows_leaves_short_rows_open() {
        let grid = BoxGrid::from_rows(&["ABCD", "12", "XYZW", "9876"]).unwrap();
        assert_eq!(grid.get(1, 1), Some('2'));
        assert_eq!(grid.empty_cells(), vec![(1, 2), (1, 3)]);
    }

    #[test]
    fn from_rows_rejects_long_rows_and_bad_shapes() {
        assert!(matches!(
            BoxGrid::from_rows(&["ABCDE", "1234", "XYZW", "9876"]),
            Err(Pick4Error::InvalidRow { row: 0, len: 5 })
        ));
        assert!(matches!(
            BoxGrid::from_rows(&["ABCD"]),
            Err(Pick4Error::InvalidShape { rows: 1 })
        ));
    }

    #[test]
    fn set_text_accepts_single_characters_only() {
        let mut grid = BoxGrid::new();
        grid.set_text(0, 0, "é").unwrap();
        assert_eq!(grid.get(0, 0), Some('é'));
        grid.set_text(0, 0, "").unwrap();
        assert_eq!(grid.get(0, 0), None);
        assert!(matches!(
            grid.set_text(2, 3, "12"),
            Err(Pick4Error::InvalidCell {
                row: 2,
                col: 3,
                len: 2
            })
        ));
    }

    #[test]
    fn filled_reports_every_gap() {
        let mut grid = BoxGrid::from_rows(&["ABCD", "1234", "XYZW", "9876"]).unwrap();
        assert!(grid.filled().is_ok());
        grid.set(0, 0, None);
        grid.set(3, 3, None);
        match grid.filled() {
            Err(Pick4Error::IncompleteInput { empty }) => {
                assert_eq!(empty, vec![(0, 0), (3, 3)]);
            }
            other => panic!("expected incomplete input, got {other:?}"),
        }
    }

    #[test]
    fn serde_uses_string_matrix() {
        let mut grid = BoxGrid::from_rows(&["ABCD", "1234", "XYZW", "9876"]).unwrap();
        grid.set(1, 2, None);
        let json = serde_json::to_value(&grid).unwrap();
        assert_eq!(json[1], serde_json::json!(["1", "2", "", "4"]));
        let back: BoxGrid = serde_json::from_value(json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn serde_rejects_ragged_rows() {
        let json = serde_json::json!([["A", "B"], ["1", "2", "3", "4"], [], []]);
        assert!(serde_json::from_value::<BoxGrid>(json).is_err());
    }

    #[test]
    fn clear_empties_every_cell() {
        let mut grid = BoxGrid::from_rows(&["ABCD", "1234", "XYZW", "9876"]).unwrap();
        grid.clear();
        assert_eq!(grid, BoxGrid::new());
    }
}
