//! Scene simulator: the star, particle and comet populations plus the
//! per-frame step-and-draw.
//!
//! Frames are never cleared. Each step paints a translucent background
//! rectangle first, so earlier frames fade out gradually and moving
//! entities leave motion trails without any per-entity history.

use glam::Vec2;

use crate::api::config::SceneConfig;
use crate::api::types::Theme;
use crate::components::comet::Comet;
use crate::components::particle::Particle;
use crate::components::star::Star;
use crate::renderer::{DrawSurface, Palette};
use crate::systems::rng::Rng;

/// All simulated entities. Population sizes are fixed at `initialize`.
#[derive(Debug, Clone)]
pub struct SceneSimulator {
    pub stars: Vec<Star>,
    pub particles: Vec<Particle>,
    pub comets: Vec<Comet>,
    fade_alpha: f32,
    twinkle_step: f32,
    particle_decay: f32,
}

impl SceneSimulator {
    /// Seed every population uniformly over a `width` x `height` surface.
    pub fn initialize(width: f32, height: f32, config: &SceneConfig, rng: &mut Rng) -> Self {
        let stars = (0..config.star_count)
            .map(|_| Star::random(rng, width, height))
            .collect();
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        let comets = (0..config.comet_count)
            .map(|_| Comet::random(rng, width, height))
            .collect();

        log::debug!(
            "scene seeded: {} stars, {} particles, {} comets on {}x{}",
            config.star_count, config.particle_count, config.comet_count, width, height
        );

        Self {
            stars,
            particles,
            comets,
            fade_alpha: config.fade_alpha,
            twinkle_step: config.twinkle_step,
            particle_decay: config.particle_decay,
        }
    }

    /// Draw the current frame, then advance every entity by one frame.
    ///
    /// Layers are drawn back to front: fade, stars, particles, comets.
    /// `theme` is read on every call so a theme change shows up on the very
    /// next frame.
    pub fn step<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        width: f32,
        height: f32,
        theme: Theme,
        rng: &mut Rng,
    ) {
        let palette = Palette::for_theme(theme);

        surface.fill_rect(
            Vec2::ZERO,
            Vec2::new(width, height),
            palette.background.with_alpha(self.fade_alpha),
        );

        for star in &mut self.stars {
            star.draw(surface, &palette);
            star.tick(rng, self.twinkle_step, width, height);
        }

        for particle in &mut self.particles {
            particle.draw(surface, &palette);
            particle.tick(rng, self.particle_decay, width, height);
        }

        for comet in &mut self.comets {
            comet.draw(surface, &palette);
            comet.tick(rng, width, height);
        }
    }

    pub fn entity_count(&self) -> usize {
        self.stars.len() + self.particles.len() + self.comets.len()
    }
}
