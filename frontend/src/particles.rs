use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::pointer::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f64,
}

/// A link between two particles, `strength` fades from 1 (touching) to 0
/// (at the link distance).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    pub strength: f64,
}

/// Slow drifting dots bouncing inside a box, the hero background.
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f64,
    height: f64,
}

impl ParticleField {
    pub fn new(count: usize, width: f64, height: f64, seed: u64) -> Self {
        let width = width.max(1.0);
        let height = height.max(1.0);
        let mut rng = SmallRng::seed_from_u64(seed);
        let particles = (0..count)
            .map(|_| Particle {
                pos: Vec2::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height)),
                vel: Vec2::new(rng.gen_range(-18.0..18.0), rng.gen_range(-18.0..18.0)),
                radius: rng.gen_range(0.8..2.2),
            })
            .collect();
        Self {
            particles,
            width,
            height,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Changes the box and pulls any particle left outside back in.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        for p in &mut self.particles {
            p.pos.x = p.pos.x.clamp(0.0, self.width);
            p.pos.y = p.pos.y.clamp(0.0, self.height);
        }
    }

    pub fn step(&mut self, dt: f64) {
        if !(dt > 0.0) {
            return;
        }
        let (w, h) = (self.width, self.height);
        for p in &mut self.particles {
            p.pos.x += p.vel.x * dt;
            p.pos.y += p.vel.y * dt;
            bounce(&mut p.pos.x, &mut p.vel.x, w);
            bounce(&mut p.pos.y, &mut p.vel.y, h);
        }
    }

    pub fn links(&self, max_distance: f64) -> Vec<Link> {
        let mut links = Vec::new();
        let max_sq = max_distance * max_distance;
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dx = a.pos.x - b.pos.x;
                let dy = a.pos.y - b.pos.y;
                let dist_sq = dx * dx + dy * dy;
                if dist_sq < max_sq {
                    links.push(Link {
                        from: a.pos,
                        to: b.pos,
                        strength: 1.0 - dist_sq.sqrt() / max_distance,
                    });
                }
            }
        }
        links
    }
}

fn bounce(pos: &mut f64, vel: &mut f64, limit: f64) {
    if *pos < 0.0 {
        *pos = (-*pos).min(limit);
        *vel = vel.abs();
    } else if *pos > limit {
        *pos = (2.0 * limit - *pos).max(0.0);
        *vel = -vel.abs();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inside(field: &ParticleField) -> bool {
        let (w, h) = field.size();
        field
            .particles()
            .iter()
            .all(|p| (0.0..=w).contains(&p.pos.x) && (0.0..=h).contains(&p.pos.y))
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = ParticleField::new(20, 800.0, 600.0, 7);
        let b = ParticleField::new(20, 800.0, 600.0, 7);
        assert_eq!(a.particles(), b.particles());
        assert_eq!(a.particles().len(), 20);
    }

    #[test]
    fn test_particles_stay_in_bounds() {
        let mut field = ParticleField::new(60, 320.0, 200.0, 42);
        for i in 0..2_000 {
            // Mix normal frames with a few very long ones.
            let dt = if i % 97 == 0 { 3.0 } else { 1.0 / 60.0 };
            field.step(dt);
            assert!(inside(&field), "escaped on step {}", i);
        }
    }

    #[test]
    fn test_resize_pulls_particles_in() {
        let mut field = ParticleField::new(40, 1000.0, 1000.0, 3);
        field.resize(100.0, 50.0);
        assert!(inside(&field));
        field.resize(0.0, -10.0);
        assert_eq!(field.size(), (1.0, 1.0));
        assert!(inside(&field));
    }

    #[test]
    fn test_links_only_between_close_particles() {
        let mut field = ParticleField::new(0, 100.0, 100.0, 1);
        field.particles = vec![
            Particle { pos: Vec2::new(0.0, 0.0), vel: Vec2::ZERO, radius: 1.0 },
            Particle { pos: Vec2::new(30.0, 40.0), vel: Vec2::ZERO, radius: 1.0 },
            Particle { pos: Vec2::new(90.0, 90.0), vel: Vec2::ZERO, radius: 1.0 },
        ];
        let links = field.links(100.0);
        assert_eq!(links.len(), 2);
        assert!((links[0].strength - 0.5).abs() < 1e-9);
        assert!(links.iter().all(|l| l.strength > 0.0 && l.strength <= 1.0));
    }
}
