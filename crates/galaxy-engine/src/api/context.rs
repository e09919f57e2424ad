use glam::Vec2;

use crate::api::config::BackgroundConfig;
use crate::api::error::EngineError;
use crate::api::types::{ArtifactId, Theme};
use crate::core::viewport::Viewport;
use crate::renderer::DrawSurface;
use crate::systems::rng::Rng;
use crate::systems::scene::SceneSimulator;
use crate::systems::trail::{PointerOutcome, TrailEmitter};

/// Everything that only exists while the background is mounted.
struct Mounted<S> {
    surface: S,
    scene: SceneSimulator,
    trail: TrailEmitter,
}

/// The background animation, owned by its host view.
///
/// Created by `mount`, driven by `frame` / `pointer_move` / `resize`, and
/// ended by `teardown`. After teardown every entry point is a silent no-op,
/// so callbacks that were already queued when the host went away are safe.
pub struct BackgroundAnimation<S: DrawSurface> {
    mounted: Option<Mounted<S>>,
    viewport: Viewport,
    rng: Rng,
}

impl<S: DrawSurface> BackgroundAnimation<S> {
    /// Size the surface to `viewport` and seed the scene.
    ///
    /// Fails with `MissingSurface` when the host has no drawing surface; the
    /// frame loop must not be started in that case.
    pub fn mount(
        surface: Option<S>,
        viewport: Viewport,
        config: BackgroundConfig,
        seed: u64,
    ) -> Result<Self, EngineError> {
        let mut surface = surface.ok_or(EngineError::MissingSurface)?;
        config.validate()?;

        viewport.apply(&mut surface);

        let mut rng = Rng::new(seed);
        let (width, height) = viewport.extent();
        let scene = SceneSimulator::initialize(width, height, &config.scene, &mut rng);
        let trail = TrailEmitter::new(&config.trail);

        log::info!(
            "background mounted at {}x{} ({} entities)",
            viewport.width, viewport.height, scene.entity_count()
        );

        Ok(Self {
            mounted: Some(Mounted { surface, scene, trail }),
            viewport,
            rng,
        })
    }

    /// Draw one frame and advance the simulation by one step.
    pub fn frame(&mut self, theme: Theme) {
        let Some(m) = self.mounted.as_mut() else {
            return;
        };
        let (width, height) = self.viewport.extent();
        m.scene.step(&mut m.surface, width, height, theme, &mut self.rng);
    }

    /// Forward a pointer move. Returns an empty outcome after teardown.
    pub fn pointer_move(&mut self, x: f32, y: f32, now_ms: f64) -> PointerOutcome {
        match self.mounted.as_mut() {
            Some(m) => m.trail.pointer_move(Vec2::new(x, y), now_ms, &mut self.rng),
            None => PointerOutcome::default(),
        }
    }

    /// Remove a trail artifact whose timer fired. False if it was already
    /// gone or the animation is torn down.
    pub fn expire_artifact(&mut self, id: ArtifactId) -> bool {
        self.mounted.as_mut().is_some_and(|m| m.trail.expire(id))
    }

    /// Remove every trail artifact due by `now_ms`.
    pub fn expire_due(&mut self, now_ms: f64) -> Vec<ArtifactId> {
        match self.mounted.as_mut() {
            Some(m) => m.trail.expire_due(now_ms),
            None => Vec::new(),
        }
    }

    /// Apply a new window size to the surface. Entity state is untouched.
    pub fn resize(&mut self, width: u32, height: u32) {
        let Some(m) = self.mounted.as_mut() else {
            return;
        };
        if self.viewport.resize(width, height, &mut m.surface) {
            log::debug!("background resized to {}x{}", width, height);
        }
    }

    /// Drop all simulation state and hand the surface back. Idempotent.
    pub fn teardown(&mut self) -> Option<S> {
        let m = self.mounted.take()?;
        log::info!("background torn down");
        Some(m.surface)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn scene(&self) -> Option<&SceneSimulator> {
        self.mounted.as_ref().map(|m| &m.scene)
    }

    pub fn trail(&self) -> Option<&TrailEmitter> {
        self.mounted.as_ref().map(|m| &m.trail)
    }

    pub fn surface(&self) -> Option<&S> {
        self.mounted.as_ref().map(|m| &m.surface)
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.mounted.as_mut().map(|m| &mut m.surface)
    }
}
