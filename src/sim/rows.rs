//! Row injection and the lose check

use rand::Rng;

use super::grid::Grid;
use super::hex::{Cell, HexLayout};
use super::sphere::{Color, Sphere};

/// Fill every empty cell of `row` with a random-colored sphere
pub fn fill_row<R: Rng>(grid: &mut Grid, layout: &HexLayout, row: i32, rng: &mut R) {
    for col in 0..grid.cols() as i32 {
        let cell = Cell::new(row, col);
        if grid.in_bounds(cell) && !grid.is_occupied(cell) {
            let _ = grid.place(Sphere::in_cell(layout, cell, Color::random(rng)));
        }
    }
}

/// Fill the top `count` rows for a fresh board
pub fn seed_rows<R: Rng>(grid: &mut Grid, layout: &HexLayout, count: usize, rng: &mut R) {
    for row in 0..count.min(grid.rows()) {
        fill_row(grid, layout, row as i32, rng);
    }
}

/// Push every row down by one and fill row 0 with new spheres
///
/// Flips the layout's parity phase so shifted spheres stay on their canonical
/// centers. Returns the spheres pushed out of the last row.
pub fn inject_row<R: Rng>(
    grid: &mut Grid,
    layout: &mut HexLayout,
    rng: &mut R,
) -> Vec<Sphere> {
    let dropped = grid.shift_down(layout.row_height());
    layout.flip_phase();
    fill_row(grid, layout, 0, rng);

    if !dropped.is_empty() {
        log::debug!("Row injection pushed {} spheres off the grid", dropped.len());
    }
    dropped
}

/// Any grid sphere touching or past the bottom edge
pub fn reached_bottom(grid: &Grid, height: f32) -> bool {
    grid.iter().any(|sphere| sphere.bottom() >= height)
}
