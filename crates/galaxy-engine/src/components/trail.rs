use glam::Vec2;

use crate::api::types::ArtifactId;

/// A short-lived glow dot left behind the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailArtifact {
    pub id: ArtifactId,
    /// Pointer position at spawn time.
    pub pos: Vec2,
    /// Host clock time (ms) after which the artifact is removed.
    pub expires_at_ms: f64,
}

impl TrailArtifact {
    pub fn is_expired(&self, now_ms: f64) -> bool {
        now_ms >= self.expires_at_ms
    }
}

/// The large ambient glow that follows the pointer with no smoothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub center: Vec2,
    /// Edge length of the (square) glow element in pixels.
    pub size: f32,
}

impl Glow {
    pub const DEFAULT_SIZE: f32 = 400.0;

    pub fn new(size: f32) -> Self {
        Self { center: Vec2::ZERO, size }
    }

    /// Top-left corner of the glow element, which is centered on the pointer.
    pub fn top_left(&self) -> Vec2 {
        self.center - Vec2::splat(self.size * 0.5)
    }
}

impl Default for Glow {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_expiry_is_inclusive() {
        let a = TrailArtifact { id: ArtifactId(1), pos: Vec2::ZERO, expires_at_ms: 1000.0 };
        assert!(!a.is_expired(999.9));
        assert!(a.is_expired(1000.0));
    }

    #[test]
    fn glow_is_centered_on_pointer() {
        let mut glow = Glow::default();
        glow.center = Vec2::new(300.0, 250.0);
        assert_eq!(glow.top_left(), Vec2::new(100.0, 50.0));
    }
}
