use glam::Vec2;

use crate::renderer::{DrawSurface, Palette};
use crate::systems::rng::Rng;

/// A slow-drifting mote. Particles form a fixed pool: an expired particle is
/// respawned in place rather than removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Displacement per frame.
    pub vel: Vec2,
    /// Remaining life in (0, 1]; also the particle's alpha weight.
    pub life: f32,
}

impl Particle {
    pub const RADIUS: f32 = 1.5;
    /// Velocity components are drawn from [-MAX_VELOCITY, MAX_VELOCITY).
    pub const MAX_VELOCITY: f32 = 0.25;

    pub fn random(rng: &mut Rng, width: f32, height: f32) -> Self {
        Particle {
            pos: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
            vel: Vec2::new(
                rng.signed(Self::MAX_VELOCITY),
                rng.signed(Self::MAX_VELOCITY),
            ),
            life: rng.next_f32(),
        }
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, palette: &Palette) {
        surface.fill_circle(self.pos, Self::RADIUS, palette.particle_color(self.life));
    }

    /// Drift and decay. Returns true if the particle expired and was respawned.
    pub fn tick(&mut self, rng: &mut Rng, decay: f32, width: f32, height: f32) -> bool {
        self.pos += self.vel;
        self.life -= decay;

        if self.life <= 0.0 {
            self.pos = Vec2::new(rng.range(0.0, width), rng.range(0.0, height));
            self.life = 1.0;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_particle_within_ranges() {
        let mut rng = Rng::new(11);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 800.0, 600.0);
            assert!(p.pos.x >= 0.0 && p.pos.x < 800.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 600.0);
            assert!(p.vel.x >= -0.25 && p.vel.x < 0.25);
            assert!(p.vel.y >= -0.25 && p.vel.y < 0.25);
            assert!(p.life >= 0.0 && p.life < 1.0);
        }
    }

    #[test]
    fn particle_drifts_by_velocity() {
        let mut rng = Rng::new(12);
        let mut p = Particle { pos: Vec2::new(5.0, 5.0), vel: Vec2::new(0.125, -0.25), life: 0.5 };
        let respawned = p.tick(&mut rng, 0.002, 100.0, 100.0);
        assert!(!respawned);
        assert_eq!(p.pos, Vec2::new(5.125, 4.75));
        assert!((p.life - 0.498).abs() < 1e-6);
    }

    #[test]
    fn expired_particle_respawns_with_full_life() {
        let mut rng = Rng::new(13);
        let vel = Vec2::new(0.1, 0.1);
        let mut p = Particle { pos: Vec2::new(5.0, 5.0), vel, life: 0.001 };
        let respawned = p.tick(&mut rng, 0.002, 100.0, 100.0);
        assert!(respawned);
        assert_eq!(p.life, 1.0);
        assert_eq!(p.vel, vel);
        assert!(p.pos.x >= 0.0 && p.pos.x < 100.0);
    }

    #[test]
    fn particle_may_drift_off_surface() {
        // Particles have no bounds policy; only expiry relocates them.
        let mut rng = Rng::new(14);
        let mut p = Particle { pos: Vec2::new(0.0, 0.0), vel: Vec2::new(-0.2, -0.2), life: 1.0 };
        p.tick(&mut rng, 0.002, 100.0, 100.0);
        assert!(p.pos.x < 0.0 && p.pos.y < 0.0);
    }
}
