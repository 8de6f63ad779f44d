//! Offset-row hex grid geometry
//!
//! Rows are stacked `radius * sqrt(3)` apart and every other row is shifted
//! right by one radius, so each sphere touches six neighbors. Which rows are
//! shifted is decided by the layout's parity phase: with phase `false` the odd
//! rows are shifted, and the phase flips whenever the whole grid moves down one
//! row so that already-placed spheres keep their pixel x.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Grid address. Signed so neighbor probes past the edges are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Pixel layout of the hex grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexLayout {
    /// Sphere radius; sets both column spacing and row height
    pub radius: f32,
    /// Parity phase (see module docs)
    phase: bool,
}

impl HexLayout {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            phase: false,
        }
    }

    #[inline]
    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }

    /// Vertical distance between row centers
    #[inline]
    pub fn row_height(&self) -> f32 {
        self.radius * 3.0_f32.sqrt()
    }

    pub fn phase(&self) -> bool {
        self.phase
    }

    /// Swap which rows are shifted. Called when every row moves down by one.
    pub fn flip_phase(&mut self) {
        self.phase = !self.phase;
    }

    /// Whether this row is shifted right by one radius
    #[inline]
    pub fn is_offset_row(&self, row: i32) -> bool {
        (row.rem_euclid(2) == 1) != self.phase
    }

    #[inline]
    fn row_offset(&self, row: i32) -> f32 {
        if self.is_offset_row(row) {
            self.radius
        } else {
            0.0
        }
    }

    /// Canonical center of a cell
    pub fn cell_to_pixel(&self, cell: Cell) -> Vec2 {
        Vec2::new(
            cell.col as f32 * self.diameter() + self.radius + self.row_offset(cell.row),
            cell.row as f32 * self.row_height() + self.radius,
        )
    }

    /// Cell whose center is nearest to `pos`
    ///
    /// Not clamped to any grid: positions near the edges can resolve to rows or
    /// columns outside it.
    pub fn pixel_to_cell(&self, pos: Vec2) -> Cell {
        let approx_row = ((pos.y - self.radius) / self.row_height()).round() as i32;

        let mut best: Option<(Cell, f32)> = None;
        for row in [approx_row, approx_row - 1, approx_row + 1] {
            let col = ((pos.x - self.radius - self.row_offset(row)) / self.diameter()).round() as i32;
            let cell = Cell::new(row, col);
            let dist = self.cell_to_pixel(cell).distance_squared(pos);
            if best.is_none_or(|(_, best_dist)| dist < best_dist) {
                best = Some((cell, dist));
            }
        }

        best.map(|(cell, _)| cell).unwrap_or(Cell::new(approx_row, 0))
    }

    /// The six touching cells: left, right, two above, two below
    pub fn neighbors(&self, cell: Cell) -> [Cell; 6] {
        let Cell { row, col } = cell;
        let (left, right) = if self.is_offset_row(row) {
            (col, col + 1)
        } else {
            (col - 1, col)
        };
        [
            Cell::new(row, col - 1),
            Cell::new(row, col + 1),
            Cell::new(row - 1, left),
            Cell::new(row - 1, right),
            Cell::new(row + 1, left),
            Cell::new(row + 1, right),
        ]
    }
}
