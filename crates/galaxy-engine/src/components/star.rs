use glam::Vec2;

use crate::renderer::{DrawSurface, Palette};
use crate::systems::rng::Rng;

/// A background star: twinkles and drifts slowly downward.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// Surface-space position.
    pub pos: Vec2,
    /// Radius in pixels.
    pub size: f32,
    /// Downward drift per frame.
    pub speed: f32,
    /// Brightness; kept in [MIN_OPACITY, MAX_OPACITY] after every tick.
    pub opacity: f32,
}

impl Star {
    pub const MAX_SIZE: f32 = 2.0;
    pub const MAX_SPEED: f32 = 0.5;
    pub const MIN_OPACITY: f32 = 0.3;
    pub const MAX_OPACITY: f32 = 1.0;

    /// Uniformly random star inside a `width` x `height` surface.
    /// Initial opacity is unclamped; the first tick pulls it into range.
    pub fn random(rng: &mut Rng, width: f32, height: f32) -> Self {
        Star {
            pos: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
            size: rng.range(0.0, Self::MAX_SIZE),
            speed: rng.range(0.0, Self::MAX_SPEED),
            opacity: rng.next_f32(),
        }
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, palette: &Palette) {
        surface.fill_circle(self.pos, self.size, palette.star_color(self.opacity));
    }

    /// Twinkle, fall, and wrap to the top edge once below `height`.
    pub fn tick(&mut self, rng: &mut Rng, twinkle_step: f32, width: f32, height: f32) {
        self.opacity = (self.opacity + rng.signed(twinkle_step))
            .clamp(Self::MIN_OPACITY, Self::MAX_OPACITY);

        self.pos.y += self.speed;
        if self.pos.y > height {
            self.pos.y = 0.0;
            self.pos.x = rng.range(0.0, width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_star_within_ranges() {
        let mut rng = Rng::new(1);
        for _ in 0..500 {
            let s = Star::random(&mut rng, 800.0, 600.0);
            assert!(s.pos.x >= 0.0 && s.pos.x < 800.0);
            assert!(s.pos.y >= 0.0 && s.pos.y < 600.0);
            assert!(s.size >= 0.0 && s.size < 2.0);
            assert!(s.speed >= 0.0 && s.speed < 0.5);
            assert!(s.opacity >= 0.0 && s.opacity < 1.0);
        }
    }

    #[test]
    fn dim_star_is_clamped_up() {
        let mut rng = Rng::new(2);
        let mut s = Star { pos: Vec2::new(10.0, 10.0), size: 1.0, speed: 0.0, opacity: 0.0 };
        s.tick(&mut rng, 0.01, 100.0, 100.0);
        assert_eq!(s.opacity, Star::MIN_OPACITY);
    }

    #[test]
    fn star_falls_by_speed() {
        let mut rng = Rng::new(3);
        let mut s = Star { pos: Vec2::new(10.0, 10.0), size: 1.0, speed: 0.25, opacity: 0.5 };
        s.tick(&mut rng, 0.01, 100.0, 100.0);
        assert_eq!(s.pos, Vec2::new(10.0, 10.25));
    }

    #[test]
    fn star_wraps_to_top() {
        let mut rng = Rng::new(4);
        let mut s = Star { pos: Vec2::new(10.0, 99.9), size: 1.0, speed: 0.4, opacity: 0.5 };
        s.tick(&mut rng, 0.01, 100.0, 100.0);
        assert_eq!(s.pos.y, 0.0);
        assert!(s.pos.x >= 0.0 && s.pos.x < 100.0);
    }

    #[test]
    fn star_exactly_at_bottom_edge_does_not_wrap() {
        let mut rng = Rng::new(5);
        let mut s = Star { pos: Vec2::new(10.0, 100.0), size: 1.0, speed: 0.0, opacity: 0.5 };
        s.tick(&mut rng, 0.01, 100.0, 100.0);
        assert_eq!(s.pos, Vec2::new(10.0, 100.0));
    }
}
