//! Sphere entity and color palette

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::hex::{Cell, HexLayout};

/// Fixed sphere palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Green,
    Red,
    Pink,
    Yellow,
    Orange,
}

impl Color {
    /// Palette order, used for random draws
    pub const ALL: [Color; 6] = [
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Pink,
        Color::Yellow,
        Color::Orange,
    ];

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Pink => "pink",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
        }
    }
}

/// A sphere, either the live projectile or a grid occupant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Color,
    /// Grid cell this sphere occupies (`None` for the projectile)
    pub cell: Option<Cell>,
}

impl Sphere {
    /// A free sphere at rest
    pub fn new(pos: Vec2, radius: f32, color: Color) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            color,
            cell: None,
        }
    }

    /// A grid sphere sitting on its cell's canonical center
    pub fn in_cell(layout: &HexLayout, cell: Cell, color: Color) -> Self {
        Self {
            pos: layout.cell_to_pixel(cell),
            vel: Vec2::ZERO,
            radius: layout.radius,
            color,
            cell: Some(cell),
        }
    }

    /// Lowest y covered by the sphere
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_random_colors_cover_palette() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(Color::random(&mut rng));
        }
        assert_eq!(seen.len(), Color::ALL.len());
    }

    #[test]
    fn test_in_cell_uses_canonical_position() {
        let layout = HexLayout::new(20.0);
        let cell = Cell::new(1, 2);
        let sphere = Sphere::in_cell(&layout, cell, Color::Pink);
        assert_eq!(sphere.pos, layout.cell_to_pixel(cell));
        assert_eq!(sphere.cell, Some(cell));
        assert_eq!(sphere.vel, Vec2::ZERO);
        assert_eq!(sphere.radius, 20.0);
    }
}
