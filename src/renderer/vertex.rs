//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

use crate::sim::Color;

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const AIM_LINE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.02, 0.05, 1.0];

    /// Fill color for a sphere
    pub fn sphere(color: Color) -> [f32; 4] {
        match color {
            Color::Blue => [0.2, 0.4, 1.0, 1.0],
            Color::Green => [0.2, 0.8, 0.3, 1.0],
            Color::Red => [1.0, 0.2, 0.2, 1.0],
            Color::Pink => [1.0, 0.6, 0.8, 1.0],
            Color::Yellow => [1.0, 0.9, 0.2, 1.0],
            Color::Orange => [1.0, 0.55, 0.1, 1.0],
        }
    }
}
