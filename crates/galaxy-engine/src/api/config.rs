use serde::{Deserialize, Serialize};

use super::error::EngineError;
use crate::components::trail::Glow;

/// Tunables for the star/particle/comet scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub star_count: usize,
    pub particle_count: usize,
    pub comet_count: usize,
    /// Alpha of the background rectangle painted each frame. Lower values
    /// leave longer motion trails.
    pub fade_alpha: f32,
    /// Stars' opacity random walk moves by at most this much per frame.
    pub twinkle_step: f32,
    /// Life lost by each particle per frame.
    pub particle_decay: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            star_count: 300,
            particle_count: 50,
            comet_count: 3,
            fade_alpha: 0.05,
            twinkle_step: 0.01,
            particle_decay: 0.002,
        }
    }
}

/// Tunables for the pointer trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Probability that a pointer move spawns an artifact.
    pub spawn_chance: f32,
    /// Artifact lifetime in milliseconds.
    pub ttl_ms: f64,
    /// Live artifact cap; the oldest is evicted on overflow.
    pub max_live: usize,
    /// Edge length of the ambient pointer glow in pixels.
    pub glow_size: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            spawn_chance: 0.2,
            ttl_ms: 1000.0,
            max_live: 256,
            glow_size: Glow::DEFAULT_SIZE,
        }
    }
}

/// Full background configuration. Every field has a default, so `{}` is a
/// valid document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    pub scene: SceneConfig,
    pub trail: TrailConfig,
}

impl BackgroundConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let scene = &self.scene;
        let trail = &self.trail;
        check_unit("scene.fade_alpha", scene.fade_alpha)?;
        check_unit("trail.spawn_chance", trail.spawn_chance)?;
        if !(scene.twinkle_step >= 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "scene.twinkle_step must be non-negative, got {}",
                scene.twinkle_step
            )));
        }
        if !(scene.particle_decay > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "scene.particle_decay must be positive, got {}",
                scene.particle_decay
            )));
        }
        if !(trail.ttl_ms > 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "trail.ttl_ms must be positive, got {}",
                trail.ttl_ms
            )));
        }
        if trail.max_live == 0 {
            return Err(EngineError::InvalidConfig("trail.max_live must be at least 1".into()));
        }
        Ok(())
    }
}

fn check_unit(name: &str, value: f32) -> Result<(), EngineError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(EngineError::InvalidConfig(format!("{} must be in [0, 1], got {}", name, value)))
    }
}
