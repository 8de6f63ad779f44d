//! Collision detection and snapping
//!
//! Turns a moving projectile into a grid placement: find the first grid sphere
//! it touches, pick the free cell nearest to where it stopped, and commit it
//! there on the cell's canonical center.

use std::collections::HashSet;

use glam::Vec2;

use super::grid::Grid;
use super::hex::{Cell, HexLayout};
use super::sphere::Sphere;

/// First grid sphere overlapping the projectile
///
/// Cells are scanned row-major with columns ascending and the first overlap
/// wins, even if a later sphere is closer.
pub fn find_collision(grid: &Grid, projectile: &Sphere) -> Option<Cell> {
    grid.iter()
        .find(|sphere| {
            sphere.pos.distance(projectile.pos) < sphere.radius + projectile.radius
        })
        .and_then(|sphere| sphere.cell)
}

/// Free cell a projectile stopping at `pos` should occupy
///
/// Normally the cell nearest to `pos`. When that cell is taken or off the
/// grid, the search widens ring by ring over hex adjacency from the (clamped)
/// target, and the free cell of the first ring that has one is chosen by
/// distance to `pos`, ties going to the earlier cell. `None` only when the
/// grid is full.
pub fn resolve_snap_cell(grid: &Grid, layout: &HexLayout, pos: Vec2) -> Option<Cell> {
    let target = layout.pixel_to_cell(pos);
    if grid.in_bounds(target) && !grid.is_occupied(target) {
        return Some(target);
    }
    if grid.rows() == 0 || grid.cols() == 0 {
        return None;
    }

    let start = grid.clamp(target);
    let mut visited = HashSet::from([start]);
    let mut ring = vec![start];

    while !ring.is_empty() {
        let nearest = ring
            .iter()
            .copied()
            .filter(|&cell| !grid.is_occupied(cell))
            .min_by(|a, b| {
                let da = layout.cell_to_pixel(*a).distance_squared(pos);
                let db = layout.cell_to_pixel(*b).distance_squared(pos);
                da.total_cmp(&db)
            });
        if nearest.is_some() {
            return nearest;
        }

        let mut next = Vec::new();
        for cell in ring {
            for n in layout.neighbors(cell) {
                if grid.in_bounds(n) && visited.insert(n) {
                    next.push(n);
                }
            }
        }
        ring = next;
    }

    None
}

/// Commit a projectile into the grid
///
/// The sphere lands on its cell's canonical center with zero velocity. If
/// there is no free cell the projectile is handed back.
pub fn snap_projectile(
    grid: &mut Grid,
    layout: &HexLayout,
    mut projectile: Sphere,
) -> Result<Cell, Sphere> {
    let Some(cell) = resolve_snap_cell(grid, layout, projectile.pos) else {
        return Err(projectile);
    };
    projectile.pos = layout.cell_to_pixel(cell);
    projectile.vel = Vec2::ZERO;
    projectile.radius = layout.radius;
    projectile.cell = Some(cell);
    grid.place(projectile)
}
