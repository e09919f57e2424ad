//! In-memory `DrawSurface` that records every call.
//! Used by the engine's tests and by headless hosts.

use glam::Vec2;

use super::color::Rgba;
use super::traits::DrawSurface;

/// One recorded drawing call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Resize { width: u32, height: u32 },
    FillRect { origin: Vec2, extent: Vec2, color: Rgba },
    FillCircle { center: Vec2, radius: f32, color: Rgba },
    GradientLine { from: Vec2, to: Vec2, width: f32, from_color: Rgba, to_color: Rgba },
}

/// Records draw calls instead of rasterizing them.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::with_capacity(512),
        }
    }

    /// All commands recorded since the last `take_commands`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drain recorded commands (call once per frame to inspect it alone).
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn circle_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::FillCircle { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::GradientLine { .. }))
            .count()
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.push(DrawCommand::Resize { width, height });
    }

    fn fill_rect(&mut self, origin: Vec2, extent: Vec2, color: Rgba) {
        self.commands.push(DrawCommand::FillRect { origin, extent, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle { center, radius, color });
    }

    fn stroke_gradient_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        from_color: Rgba,
        to_color: Rgba,
    ) {
        self.commands.push(DrawCommand::GradientLine { from, to, width, from_color, to_color });
    }
}
