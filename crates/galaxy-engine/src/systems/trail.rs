//! Pointer-trail emitter.
//!
//! Every pointer move snaps the ambient glow to the pointer and, with a fixed
//! probability, leaves a glow artifact behind that lives for a fixed time.
//! Live artifacts are capped; on overflow the oldest is evicted early.

use std::collections::VecDeque;

use glam::Vec2;

use crate::api::config::TrailConfig;
use crate::api::types::ArtifactId;
use crate::components::trail::{Glow, TrailArtifact};
use crate::systems::rng::Rng;

/// What a single pointer move did. Hosts mirror this onto their visuals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOutcome {
    /// New glow position; `None` only when the emitter is torn down.
    pub glow: Option<Glow>,
    pub spawned: Option<TrailArtifact>,
    /// Artifact dropped to stay within the live cap.
    pub evicted: Option<ArtifactId>,
}

pub struct TrailEmitter {
    artifacts: VecDeque<TrailArtifact>,
    glow: Glow,
    spawn_chance: f32,
    ttl_ms: f64,
    max_live: usize,
    next_id: u32,
}

impl TrailEmitter {
    pub fn new(config: &TrailConfig) -> Self {
        Self {
            artifacts: VecDeque::with_capacity(config.max_live.min(1024)),
            glow: Glow::new(config.glow_size),
            spawn_chance: config.spawn_chance,
            ttl_ms: config.ttl_ms,
            max_live: config.max_live.max(1),
            next_id: 1,
        }
    }

    /// Handle a pointer move at `pos` (surface pixels) at host time `now_ms`.
    pub fn pointer_move(&mut self, pos: Vec2, now_ms: f64, rng: &mut Rng) -> PointerOutcome {
        self.glow.center = pos;

        let mut outcome = PointerOutcome {
            glow: Some(self.glow),
            ..PointerOutcome::default()
        };

        if !rng.chance(self.spawn_chance) {
            return outcome;
        }

        if self.artifacts.len() >= self.max_live {
            if let Some(oldest) = self.artifacts.pop_front() {
                log::debug!("trail cap {} reached, evicting artifact {:?}", self.max_live, oldest.id);
                outcome.evicted = Some(oldest.id);
            }
        }

        let artifact = TrailArtifact {
            id: ArtifactId(self.next_id),
            pos,
            expires_at_ms: now_ms + self.ttl_ms,
        };
        self.next_id = self.next_id.wrapping_add(1);
        self.artifacts.push_back(artifact);
        outcome.spawned = Some(artifact);
        outcome
    }

    /// Remove one artifact. Unknown ids (already expired or evicted) are a
    /// no-op and return false.
    pub fn expire(&mut self, id: ArtifactId) -> bool {
        match self.artifacts.iter().position(|a| a.id == id) {
            Some(idx) => {
                self.artifacts.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Remove every artifact whose lifetime has elapsed by `now_ms`.
    pub fn expire_due(&mut self, now_ms: f64) -> Vec<ArtifactId> {
        // Artifacts are pushed in spawn order with a constant ttl, so
        // deadlines are non-decreasing from the front.
        let mut expired = Vec::new();
        while let Some(front) = self.artifacts.front() {
            if !front.is_expired(now_ms) {
                break;
            }
            expired.push(front.id);
            self.artifacts.pop_front();
        }
        expired
    }

    pub fn artifacts(&self) -> impl Iterator<Item = &TrailArtifact> {
        self.artifacts.iter()
    }

    pub fn live_count(&self) -> usize {
        self.artifacts.len()
    }

    pub fn glow(&self) -> Glow {
        self.glow
    }

    pub fn ttl_ms(&self) -> f64 {
        self.ttl_ms
    }

    /// Drop every live artifact.
    pub fn clear(&mut self) {
        self.artifacts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emitter() -> (TrailEmitter, Rng) {
        (TrailEmitter::new(&TrailConfig::default()), Rng::new(42))
    }

    #[test]
    fn glow_tracks_every_move_without_smoothing() {
        let (mut trail, mut rng) = emitter();
        for i in 0..20 {
            let pos = Vec2::new(i as f32 * 13.0, 400.0 - i as f32);
            let outcome = trail.pointer_move(pos, i as f64, &mut rng);
            assert_eq!(outcome.glow.map(|g| g.center), Some(pos));
            assert_eq!(trail.glow().center, pos);
        }
    }

    #[test]
    fn thousand_moves_spawn_about_a_fifth() {
        let (mut trail, mut rng) = emitter();
        let mut spawned = 0;
        for i in 0..1000 {
            if trail.pointer_move(Vec2::new(i as f32, 0.0), 0.0, &mut rng).spawned.is_some() {
                spawned += 1;
            }
        }
        assert!((150..=250).contains(&spawned), "spawned {}", spawned);
        assert_eq!(trail.live_count(), spawned);

        assert!(trail.expire_due(999.0).is_empty());
        let expired = trail.expire_due(1000.0 + 50.0);
        assert_eq!(expired.len(), spawned);
        assert_eq!(trail.live_count(), 0);
    }

    #[test]
    fn artifact_spawns_at_pointer_with_ttl() {
        let config = TrailConfig { spawn_chance: 1.0, ..TrailConfig::default() };
        let mut trail = TrailEmitter::new(&config);
        let mut rng = Rng::new(1);
        let outcome = trail.pointer_move(Vec2::new(12.0, 34.0), 500.0, &mut rng);
        let artifact = outcome.spawned.unwrap();
        assert_eq!(artifact.pos, Vec2::new(12.0, 34.0));
        assert_eq!(artifact.expires_at_ms, 1500.0);
    }

    #[test]
    fn expire_is_exactly_once() {
        let config = TrailConfig { spawn_chance: 1.0, ..TrailConfig::default() };
        let mut trail = TrailEmitter::new(&config);
        let mut rng = Rng::new(2);
        let id = trail.pointer_move(Vec2::ZERO, 0.0, &mut rng).spawned.unwrap().id;
        assert!(trail.expire(id));
        assert!(!trail.expire(id));
        assert_eq!(trail.live_count(), 0);
    }

    #[test]
    fn cap_evicts_oldest() {
        let config = TrailConfig { spawn_chance: 1.0, max_live: 3, ..TrailConfig::default() };
        let mut trail = TrailEmitter::new(&config);
        let mut rng = Rng::new(3);

        let ids: Vec<_> = (0..3)
            .map(|i| trail.pointer_move(Vec2::splat(i as f32), i as f64, &mut rng).spawned.unwrap().id)
            .collect();
        let outcome = trail.pointer_move(Vec2::splat(9.0), 3.0, &mut rng);

        assert_eq!(outcome.evicted, Some(ids[0]));
        assert_eq!(trail.live_count(), 3);
        // The evicted artifact's timer later fires into nothing.
        assert!(!trail.expire(ids[0]));
    }

    #[test]
    fn ids_are_unique() {
        let config = TrailConfig { spawn_chance: 1.0, max_live: 4, ..TrailConfig::default() };
        let mut trail = TrailEmitter::new(&config);
        let mut rng = Rng::new(4);
        let mut seen = std::collections::HashSet::new();
        for i in 0..100 {
            let id = trail.pointer_move(Vec2::ZERO, i as f64, &mut rng).spawned.unwrap().id;
            assert!(seen.insert(id));
        }
    }

    #[test]
    fn zero_chance_never_spawns() {
        let config = TrailConfig { spawn_chance: 0.0, ..TrailConfig::default() };
        let mut trail = TrailEmitter::new(&config);
        let mut rng = Rng::new(5);
        for _ in 0..500 {
            assert!(trail.pointer_move(Vec2::ZERO, 0.0, &mut rng).spawned.is_none());
        }
    }
}
