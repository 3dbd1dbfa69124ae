//! Collision detection
//!
//! Everything in this game is a circle as far as physics is concerned, so the
//! whole predicate is one Euclidean distance test. Detection is discrete (no
//! sweep): a fast projectile can tunnel through a thin target between ticks,
//! an accepted approximation at 60 Hz.

use super::state::Movable;

/// Circle-circle overlap test between any two collidable entities.
///
/// Strict inequality: exactly touching circles do not collide. Lasers have
/// radius 0, which reduces this to the point-in-circle test they need.
pub fn overlaps<A: Movable + ?Sized, B: Movable + ?Sized>(a: &A, b: &B) -> bool {
    a.position().distance(b.position()) < a.radius() + b.radius()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::ship::Ship;
    use crate::sim::state::{Asteroid, Laser};
    use crate::tuning::Tunables;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn asteroid_at(pos: Vec2, radius: f32) -> Asteroid {
        let mut asteroid = Asteroid::new(pos, &mut Pcg32::seed_from_u64(1));
        asteroid.radius = radius;
        asteroid.vel = Vec2::ZERO;
        asteroid
    }

    #[test]
    fn test_laser_asteroid_uses_asteroid_radius_only() {
        let asteroid = asteroid_at(Vec2::new(100.0, 100.0), 20.0);

        let mut laser = Laser::new(Vec2::new(119.0, 100.0), 0.0);
        assert!(overlaps(&asteroid, &laser));

        laser.pos.x = 121.0;
        assert!(!overlaps(&asteroid, &laser));
    }

    #[test]
    fn test_touching_circles_do_not_collide() {
        let asteroid = asteroid_at(Vec2::new(100.0, 100.0), 20.0);
        let laser = Laser::new(Vec2::new(120.0, 100.0), 0.0);
        assert!(!overlaps(&asteroid, &laser));
    }

    #[test]
    fn test_ship_asteroid_sums_radii() {
        let tunables = Tunables::default();
        let ship = Ship::new(Vec2::new(100.0, 100.0), &tunables);
        // Ship radius 15 + asteroid radius 20: overlap threshold is 35
        let near = asteroid_at(Vec2::new(134.0, 100.0), 20.0);
        let far = asteroid_at(Vec2::new(136.0, 100.0), 20.0);
        assert!(overlaps(&ship, &near));
        assert!(!overlaps(&ship, &far));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = asteroid_at(Vec2::new(50.0, 50.0), 30.0);
        let b = asteroid_at(Vec2::new(90.0, 50.0), 25.0);
        assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        assert!(overlaps(&a, &b));
    }
}
