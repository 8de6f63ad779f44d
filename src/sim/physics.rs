//! Projectile motion
//!
//! The projectile flies in a straight line, bounces off the side walls and is
//! stopped only by the ceiling or by touching a grid sphere.

use glam::Vec2;

use super::sphere::Sphere;

impl Sphere {
    #[inline]
    pub fn is_at_rest(&self) -> bool {
        self.vel == Vec2::ZERO
    }

    /// Launch toward `target` at `speed`
    ///
    /// Only a resting sphere can be fired, and a target on top of the sphere
    /// gives no direction. Returns whether the shot went off.
    pub fn fire(&mut self, target: Vec2, speed: f32) -> bool {
        if !self.is_at_rest() {
            return false;
        }
        let dir = (target - self.pos).normalize_or_zero();
        if dir == Vec2::ZERO {
            return false;
        }
        self.vel = dir * speed;
        true
    }

    /// Move one step, reflecting off the side walls
    ///
    /// Returns true if a wall was hit this step.
    pub fn advance(&mut self, dt: f32, width: f32) -> bool {
        self.pos += self.vel * dt;

        let min_x = self.radius;
        let max_x = (width - self.radius).max(min_x);
        if self.pos.x < min_x || self.pos.x > max_x {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.clamp(min_x, max_x);
            return true;
        }
        false
    }

    /// Top edge reached the ceiling
    #[inline]
    pub fn hit_ceiling(&self) -> bool {
        self.pos.y - self.radius <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{SHOT_SPEED, SIM_DT};
    use crate::sim::sphere::Color;

    fn projectile() -> Sphere {
        Sphere::new(Vec2::new(240.0, 610.0), 20.0, Color::Blue)
    }

    #[test]
    fn test_fire_straight_up_is_vertical() {
        let mut p = projectile();
        assert!(p.fire(Vec2::new(240.0, 100.0), SHOT_SPEED));
        assert_eq!(p.vel.x, 0.0);
        assert!((p.vel.y + SHOT_SPEED).abs() < 1e-2);
    }

    #[test]
    fn test_fire_at_45_degrees() {
        let mut p = projectile();
        assert!(p.fire(Vec2::new(340.0, 510.0), SHOT_SPEED));
        assert!((p.vel.x.abs() - p.vel.y.abs()).abs() < 1e-3);
        assert!(p.vel.x > 0.0 && p.vel.y < 0.0);
        assert!((p.vel.length() - SHOT_SPEED).abs() < 1e-2);
    }

    #[test]
    fn test_fire_requires_rest_and_direction() {
        let mut p = projectile();
        assert!(!p.fire(p.pos, SHOT_SPEED));
        assert!(p.is_at_rest());

        assert!(p.fire(Vec2::new(0.0, 0.0), SHOT_SPEED));
        let vel = p.vel;
        assert!(!p.fire(Vec2::new(480.0, 0.0), SHOT_SPEED));
        assert_eq!(p.vel, vel);
    }

    #[test]
    fn test_advance_moves_one_step() {
        let mut p = projectile();
        p.fire(Vec2::new(240.0, 0.0), SHOT_SPEED);
        assert!(!p.advance(SIM_DT, 480.0));
        assert!((p.pos.y - 590.0).abs() < 1e-3);
        assert_eq!(p.pos.x, 240.0);
    }

    #[test]
    fn test_wall_bounce_reflects_dx_only() {
        let mut p = Sphere::new(Vec2::new(25.0, 300.0), 20.0, Color::Red);
        p.vel = Vec2::new(-600.0, -600.0);

        assert!(p.advance(SIM_DT, 480.0));
        assert_eq!(p.vel, Vec2::new(600.0, -600.0));
        assert_eq!(p.pos.x, 20.0);
        assert!((p.pos.y - 290.0).abs() < 1e-3);

        // Moving away from the wall again does not re-trigger the bounce
        assert!(!p.advance(SIM_DT, 480.0));
        assert_eq!(p.vel.x, 600.0);

        let mut right = Sphere::new(Vec2::new(455.0, 300.0), 20.0, Color::Red);
        right.vel = Vec2::new(600.0, 0.0);
        assert!(right.advance(SIM_DT, 480.0));
        assert_eq!(right.vel.x, -600.0);
        assert_eq!(right.pos.x, 460.0);
    }

    #[test]
    fn test_no_vertical_bounce() {
        let mut p = Sphere::new(Vec2::new(240.0, 25.0), 20.0, Color::Red);
        p.vel = Vec2::new(0.0, -1200.0);
        p.advance(SIM_DT, 480.0);
        assert!(p.hit_ceiling());
        assert_eq!(p.vel.y, -1200.0);
    }
}
