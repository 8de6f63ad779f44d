//! Draw list generation
//!
//! Builds a flat triangle list from the current game state. Any backend can
//! upload the result as-is (`Vertex` is `Pod`); this module never mutates
//! the simulation.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, colors};

use crate::sim::{GameState, Sphere};

/// Triangle fan segments per sphere
pub const SPHERE_SEGMENTS: u32 = 24;
/// Aim line thickness (pixels)
pub const AIM_LINE_WIDTH: f32 = 1.5;

fn sphere_vertices(sphere: &Sphere) -> Vec<Vertex> {
    shapes::circle(
        sphere.pos,
        sphere.radius,
        colors::sphere(sphere.color),
        SPHERE_SEGMENTS,
    )
}

/// Grid spheres, then the projectile, then the aim line while at rest
pub fn build_scene(state: &GameState) -> Vec<Vertex> {
    let grid = state.grid();
    let mut vertices =
        Vec::with_capacity((grid.len() + 1) * (SPHERE_SEGMENTS as usize) * 3 + 6);

    for sphere in grid.iter() {
        vertices.extend(sphere_vertices(sphere));
    }
    vertices.extend(sphere_vertices(state.projectile()));

    if let Some((from, to)) = state.aim_line() {
        vertices.extend(shapes::line(from, to, AIM_LINE_WIDTH, colors::AIM_LINE));
    }

    vertices
}
