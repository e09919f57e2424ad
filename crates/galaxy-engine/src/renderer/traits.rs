//! Drawing surface contract.
//!
//! The engine never touches a platform canvas directly. Everything it draws
//! goes through `DrawSurface`, which `galaxy-web` implements on top of a
//! `CanvasRenderingContext2d` and `RecordingSurface` implements in memory for
//! tests and headless runs.

use glam::Vec2;

use super::color::Rgba;

/// A 2D raster target the scene is drawn onto.
///
/// Drawing is additive over whatever the surface already holds; the engine
/// relies on this for its trailing-fade effect and never clears explicitly.
pub trait DrawSurface {
    /// Current pixel dimensions.
    fn size(&self) -> (u32, u32);

    /// Resize the pixel buffer. Resizing clears the buffer's contents.
    fn set_size(&mut self, width: u32, height: u32);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, origin: Vec2, extent: Vec2, color: Rgba);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroke a straight line whose color fades linearly from `from_color`
    /// at `from` to `to_color` at `to`.
    fn stroke_gradient_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        from_color: Rgba,
        to_color: Rgba,
    );
}
