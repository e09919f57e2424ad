use std::f32::consts::{FRAC_PI_4, TAU};

use glam::Vec2;

use crate::renderer::{DrawSurface, Palette};
use crate::systems::rng::Rng;

/// A streaking comet drawn as a fading line behind its head.
#[derive(Debug, Clone, PartialEq)]
pub struct Comet {
    /// Head position.
    pub pos: Vec2,
    /// Tail length in pixels.
    pub length: f32,
    /// Heading in radians (surface space, y down).
    pub angle: f32,
    /// Distance travelled per frame.
    pub speed: f32,
}

impl Comet {
    pub const MIN_LENGTH: f32 = 50.0;
    pub const MAX_LENGTH: f32 = 150.0;
    pub const MIN_SPEED: f32 = 2.0;
    pub const MAX_SPEED: f32 = 5.0;
    pub const LINE_WIDTH: f32 = 2.0;
    /// Respawned comets start this far above the top edge.
    pub const RESPAWN_Y: f32 = -50.0;
    /// Respawn heading: down-right diagonal.
    pub const RESPAWN_ANGLE: f32 = FRAC_PI_4;
    /// Respawn heading is jittered within +/- this bound.
    pub const ANGLE_JITTER: f32 = 0.25;

    pub fn random(rng: &mut Rng, width: f32, height: f32) -> Self {
        Comet {
            pos: Vec2::new(rng.range(0.0, width), rng.range(0.0, height)),
            length: rng.range(Self::MIN_LENGTH, Self::MAX_LENGTH),
            angle: rng.range(0.0, TAU),
            speed: rng.range(Self::MIN_SPEED, Self::MAX_SPEED),
        }
    }

    /// Unit vector along the heading.
    pub fn direction(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    /// End of the streak: `length` pixels from the head along the heading.
    pub fn tail(&self) -> Vec2 {
        self.pos + self.direction() * self.length
    }

    pub fn draw<S: DrawSurface + ?Sized>(&self, surface: &mut S, palette: &Palette) {
        surface.stroke_gradient_line(
            self.pos,
            self.tail(),
            Self::LINE_WIDTH,
            palette.comet_head,
            palette.comet_tail(),
        );
    }

    /// Advance along the heading; respawn above the surface once out of
    /// bounds. Returns true if the comet was respawned.
    pub fn tick(&mut self, rng: &mut Rng, width: f32, height: f32) -> bool {
        self.pos += self.direction() * self.speed;

        if self.is_leaving(width, height) {
            self.respawn(rng, width);
            return true;
        }
        false
    }

    /// Outside [0, width] x [0, height] and not a comet still entering from
    /// above (above the top edge while heading downward).
    fn is_leaving(&self, width: f32, height: f32) -> bool {
        let entering = self.pos.y < 0.0 && self.direction().y > 0.0;
        self.pos.x < 0.0
            || self.pos.x > width
            || self.pos.y > height
            || (self.pos.y < 0.0 && !entering)
    }

    fn respawn(&mut self, rng: &mut Rng, width: f32) {
        self.pos = Vec2::new(rng.range(0.0, width), Self::RESPAWN_Y);
        self.angle = Self::RESPAWN_ANGLE + rng.signed(Self::ANGLE_JITTER);
    }
}
