//! Cluster search over hex adjacency
//!
//! Two flood fills share the same worklist traversal: one collects the
//! same-colored group around a placement, the other marks everything still
//! hanging from the ceiling row so unsupported spheres can be dropped.

use std::collections::HashSet;

use super::grid::Grid;
use super::hex::{Cell, HexLayout};
use super::sphere::{Color, Sphere};

/// Cells reachable from `seeds` through cells accepted by `include`
fn flood<F>(grid: &Grid, layout: &HexLayout, seeds: &[Cell], include: F) -> Vec<Cell>
where
    F: Fn(Cell) -> bool,
{
    let mut found = Vec::new();
    let mut visited = HashSet::new();
    let mut stack: Vec<Cell> = seeds.to_vec();

    while let Some(cell) = stack.pop() {
        if !visited.insert(cell) {
            continue;
        }
        if !grid.in_bounds(cell) || !include(cell) {
            continue;
        }
        found.push(cell);
        stack.extend(layout.neighbors(cell));
    }

    found
}

/// Connected group of `color` cells containing `start`
///
/// Empty if `start` itself is not a `color` sphere.
pub fn find_matches(grid: &Grid, layout: &HexLayout, start: Cell, color: Color) -> Vec<Cell> {
    flood(grid, layout, &[start], |cell| grid.color_at(cell) == Some(color))
}

/// Occupied cells with a path of occupied cells back to row 0
pub fn find_supported(grid: &Grid, layout: &HexLayout) -> HashSet<Cell> {
    let ceiling: Vec<Cell> = grid.occupied().take_while(|cell| cell.row == 0).collect();
    flood(grid, layout, &ceiling, |cell| grid.is_occupied(cell))
        .into_iter()
        .collect()
}

/// Clear the given cells, returning the spheres that were there
pub fn remove_cells(grid: &mut Grid, cells: &[Cell]) -> Vec<Sphere> {
    cells.iter().filter_map(|&cell| grid.take(cell)).collect()
}

/// Clear every sphere with no path to the ceiling
pub fn remove_floating(grid: &mut Grid, layout: &HexLayout) -> Vec<Sphere> {
    let supported = find_supported(grid, layout);
    let floating: Vec<Cell> = grid
        .occupied()
        .filter(|cell| !supported.contains(cell))
        .collect();
    remove_cells(grid, &floating)
}
