//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a line segment drawn as a thin quad
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    // Two triangles
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(50.0, 60.0);
        let verts = circle(center, 20.0, [1.0; 4], 16);
        assert_eq!(verts.len(), 16 * 3);
        for v in verts {
            let p = Vec2::from(v.position);
            assert!(p.distance(center) <= 20.0 + 1e-3);
        }
    }

    #[test]
    fn test_line_quad() {
        let verts = line(Vec2::ZERO, Vec2::new(0.0, 10.0), 2.0, [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().all(|v| v.position[0].abs() <= 1.0 + 1e-5));

        assert!(line(Vec2::ONE, Vec2::ONE, 2.0, [1.0; 4]).is_empty());
    }
}
