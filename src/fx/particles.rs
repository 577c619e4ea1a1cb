//! Drifting background particles
//!
//! A fixed set of points bouncing inside the canvas. Positions are integrated
//! once per display frame and mirrored back inside on boundary contact, so a
//! particle never leaves `[0, bounds]`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{PARTICLE_MAX_RADIUS, PARTICLE_MAX_SPEED, PARTICLE_MIN_RADIUS};

/// A single drifting point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    pub radius: f32,
}

/// Spawn parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spawn {
    pub count: usize,
    pub max_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
}

impl Default for Spawn {
    fn default() -> Self {
        Self {
            count: crate::consts::PARTICLE_COUNT,
            max_speed: PARTICLE_MAX_SPEED,
            min_radius: PARTICLE_MIN_RADIUS,
            max_radius: PARTICLE_MAX_RADIUS,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    pub fn new(spawn: Spawn, bounds: Vec2, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let bounds = bounds.max(Vec2::ZERO);
        let max_speed = spawn.max_speed.abs();
        let (min_r, max_r) = (spawn.min_radius, spawn.max_radius);

        let particles = (0..spawn.count)
            .map(|_| Particle {
                pos: Vec2::new(
                    rng.random::<f32>() * bounds.x,
                    rng.random::<f32>() * bounds.y,
                ),
                vel: Vec2::new(
                    (rng.random::<f32>() - 0.5) * 2.0 * max_speed,
                    (rng.random::<f32>() - 0.5) * 2.0 * max_speed,
                ),
                radius: if max_r > min_r {
                    rng.random_range(min_r..max_r)
                } else {
                    min_r
                },
            })
            .collect();

        Self { particles, bounds }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Adopt new canvas dimensions, pulling stragglers back inside
    pub fn resize(&mut self, bounds: Vec2) {
        let bounds = bounds.max(Vec2::ZERO);
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        for p in &mut self.particles {
            p.pos = p.pos.clamp(Vec2::ZERO, bounds);
        }
        log::debug!("particles: resized to {}x{}", bounds.x, bounds.y);
    }

    /// Integrate one display frame
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.pos += p.vel;
            let (x, vx) = reflect_axis(p.pos.x, p.vel.x, bounds.x);
            let (y, vy) = reflect_axis(p.pos.y, p.vel.y, bounds.y);
            p.pos = Vec2::new(x, y);
            p.vel = Vec2::new(vx, vy);
        }
    }
}

/// Mirror a coordinate back into `[0, max]`, flipping velocity on contact
#[inline]
fn reflect_axis(pos: f32, vel: f32, max: f32) -> (f32, f32) {
    if pos < 0.0 {
        ((-pos).min(max), vel.abs())
    } else if pos > max {
        ((2.0 * max - pos).max(0.0), -vel.abs())
    } else {
        (pos, vel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_spawn_inside_bounds() {
        let field = ParticleField::new(Spawn::default(), Vec2::new(800.0, 400.0), 42);
        assert_eq!(field.particles().len(), 70);
        for p in field.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 400.0);
            assert!(p.vel.x.abs() <= PARTICLE_MAX_SPEED);
            assert!(p.radius >= PARTICLE_MIN_RADIUS && p.radius < PARTICLE_MAX_RADIUS);
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = ParticleField::new(Spawn::default(), Vec2::splat(300.0), 7);
        let b = ParticleField::new(Spawn::default(), Vec2::splat(300.0), 7);
        assert_eq!(a.particles(), b.particles());
    }

    #[test]
    fn test_reflects_off_right_wall() {
        let mut field = ParticleField::new(
            Spawn {
                count: 1,
                ..Default::default()
            },
            Vec2::new(10.0, 10.0),
            1,
        );
        field.particles[0] = Particle {
            pos: Vec2::new(9.8, 5.0),
            vel: Vec2::new(0.5, 0.0),
            radius: 1.0,
        };
        field.step();
        let p = field.particles()[0];
        assert!((p.pos.x - 9.7).abs() < 1e-4);
        assert_eq!(p.vel.x, -0.5);
    }

    #[test]
    fn test_resize_clamps_positions() {
        let mut field = ParticleField::new(Spawn::default(), Vec2::new(1000.0, 1000.0), 3);
        field.resize(Vec2::new(100.0, 50.0));
        for p in field.particles() {
            assert!(p.pos.x <= 100.0 && p.pos.y <= 50.0);
        }
        field.step();
        for p in field.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 100.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 50.0);
        }
    }

    #[test]
    fn test_zero_sized_canvas() {
        let mut field = ParticleField::new(Spawn::default(), Vec2::ZERO, 9);
        field.step();
        for p in field.particles() {
            assert_eq!(p.pos, Vec2::ZERO);
        }
    }

    proptest! {
        #[test]
        fn prop_stays_in_bounds_and_keeps_speed(
            seed in any::<u64>(),
            w in 1.0f32..2000.0,
            h in 1.0f32..2000.0,
            steps in 1usize..400,
        ) {
            let mut field = ParticleField::new(Spawn { count: 16, ..Default::default() }, Vec2::new(w, h), seed);
            let speeds: Vec<Vec2> = field.particles().iter().map(|p| p.vel.abs()).collect();
            for _ in 0..steps {
                field.step();
            }
            for (p, speed) in field.particles().iter().zip(&speeds) {
                prop_assert!(p.pos.x >= 0.0 && p.pos.x <= w);
                prop_assert!(p.pos.y >= 0.0 && p.pos.y <= h);
                prop_assert_eq!(p.vel.abs(), *speed);
            }
        }
    }
}
