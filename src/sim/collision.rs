//! Collision tests between the things that can touch
//!
//! Bullets hit debris on a center-distance threshold, the rocket loses on
//! plain AABB overlap with a debris bounding box. Both comparisons are
//! strict `<`/`>` with no epsilon.

use super::state::{Bullet, Debris, Rocket};

/// Bullet center strictly inside the debris radius?
pub fn bullet_hits_debris(bullet: &Bullet, debris: &Debris) -> bool {
    let half = debris.size / 2.0;
    bullet.pos.distance_squared(debris.pos) < half * half
}

/// Axis-aligned overlap between the rocket hull and the debris bounding box
pub fn rocket_hits_debris(rocket: &Rocket, debris: &Debris) -> bool {
    let half = debris.size / 2.0;
    let min = debris.pos - half;
    let max = debris.pos + half;
    rocket.x < max.x
        && rocket.x + rocket.width > min.x
        && rocket.y < max.y
        && rocket.y + rocket.height > min.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn debris_at(pos: Vec2, size: f32) -> Debris {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut d = Debris::spawn(&mut rng, 1.0);
        d.pos = pos;
        d.size = size;
        d
    }

    #[test]
    fn bullet_inside_radius_hits() {
        // the above-the-arena geometry from the hit rule: debris center
        // (100, -15) with size 30, bullet one pixel above the center
        let d = debris_at(Vec2::new(100.0, -15.0), 30.0);
        let b = Bullet::new(Vec2::new(100.0, -16.0));
        assert!(bullet_hits_debris(&b, &d));
    }

    #[test]
    fn bullet_exactly_on_the_radius_misses() {
        let d = debris_at(Vec2::new(100.0, 100.0), 30.0);
        let b = Bullet::new(Vec2::new(100.0, 115.0));
        // strict threshold: distance == size/2 is not a hit
        assert!(!bullet_hits_debris(&b, &d));
    }

    #[test]
    fn bullet_outside_radius_misses() {
        let d = debris_at(Vec2::new(100.0, 100.0), 30.0);
        let b = Bullet::new(Vec2::new(120.0, 120.0));
        assert!(!bullet_hits_debris(&b, &d));
    }

    #[test]
    fn overlapping_boxes_end_the_run() {
        // rocket rect (380, 480, 40x100) against a size-30 bounding box
        // whose top-left corner sits at (390, 500)
        let rocket = Rocket::new();
        assert_eq!((rocket.x, rocket.y), (380.0, 480.0));
        let d = debris_at(Vec2::new(405.0, 515.0), 30.0);
        assert!(rocket_hits_debris(&rocket, &d));
    }

    #[test]
    fn touching_edges_do_not_overlap() {
        let rocket = Rocket::new();
        // debris box left edge exactly at the rocket's right edge
        let d = debris_at(Vec2::new(rocket.x + rocket.width + 15.0, 500.0), 30.0);
        assert!(!rocket_hits_debris(&rocket, &d));
    }

    #[test]
    fn debris_above_the_rocket_does_not_overlap() {
        let rocket = Rocket::new();
        let d = debris_at(Vec2::new(400.0, 100.0), 40.0);
        assert!(!rocket_hits_debris(&rocket, &d));
    }
}
