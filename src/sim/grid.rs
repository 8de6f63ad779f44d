//! Bounds-checked storage for grid spheres
//!
//! Reads outside the grid return nothing and writes outside it are refused,
//! so traversals can probe past the edges freely.

use serde::{Deserialize, Serialize};

use super::hex::Cell;
use super::sphere::{Color, Sphere};

/// Row-major `rows x cols` cell store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Sphere>>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.rows
            && (cell.col as usize) < self.cols
    }

    #[inline]
    fn index(&self, cell: Cell) -> Option<usize> {
        self.in_bounds(cell)
            .then(|| cell.row as usize * self.cols + cell.col as usize)
    }

    /// Nearest in-bounds cell
    pub fn clamp(&self, cell: Cell) -> Cell {
        Cell::new(
            cell.row.clamp(0, self.rows as i32 - 1),
            cell.col.clamp(0, self.cols as i32 - 1),
        )
    }

    pub fn get(&self, cell: Cell) -> Option<&Sphere> {
        self.index(cell).and_then(|i| self.cells[i].as_ref())
    }

    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.get(cell).is_some()
    }

    pub fn color_at(&self, cell: Cell) -> Option<Color> {
        self.get(cell).map(|s| s.color)
    }

    /// Store a sphere in the cell it names
    ///
    /// The sphere is handed back if it has no cell, or its cell is out of
    /// bounds or already taken.
    pub fn place(&mut self, sphere: Sphere) -> Result<Cell, Sphere> {
        let Some(cell) = sphere.cell else {
            return Err(sphere);
        };
        match self.index(cell) {
            Some(i) if self.cells[i].is_none() => {
                self.cells[i] = Some(sphere);
                Ok(cell)
            }
            _ => Err(sphere),
        }
    }

    /// Remove and return a cell's sphere
    pub fn take(&mut self, cell: Cell) -> Option<Sphere> {
        self.index(cell).and_then(|i| self.cells[i].take())
    }

    /// Occupied spheres, row-major with columns ascending
    pub fn iter(&self) -> impl Iterator<Item = &Sphere> {
        self.cells.iter().flatten()
    }

    /// Occupied cells, row-major with columns ascending
    pub fn occupied(&self) -> impl Iterator<Item = Cell> + '_ {
        self.iter().filter_map(|s| s.cell)
    }

    /// Number of occupied cells
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Move every row down by one, leaving row 0 empty
    ///
    /// Shifted spheres gain one row in their cell and `row_height` in y.
    /// Spheres in the last row have nowhere to go and are returned.
    pub fn shift_down(&mut self, row_height: f32) -> Vec<Sphere> {
        if self.rows == 0 {
            return Vec::new();
        }
        let last_row = (self.rows - 1) * self.cols;
        let dropped: Vec<Sphere> = self.cells[last_row..]
            .iter_mut()
            .filter_map(Option::take)
            .collect();

        // The emptied last row wraps around to become row 0
        self.cells.rotate_right(self.cols);

        for sphere in self.cells.iter_mut().flatten() {
            if let Some(cell) = sphere.cell.as_mut() {
                cell.row += 1;
            }
            sphere.pos.y += row_height;
        }

        dropped
    }
}
