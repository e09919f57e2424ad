use crate::renderer::DrawSurface;

/// Keeps the drawing surface's pixel size in sync with the window.
///
/// Resizing only touches the surface. Entity positions are left alone; any
/// entity now outside a smaller surface is relocated by its own wrap or
/// respawn rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Push the current size onto the surface (which clears it).
    pub fn apply<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_size(self.width, self.height);
    }

    /// Record a new window size and re-apply it. Returns true if the size
    /// actually changed.
    pub fn resize<S: DrawSurface + ?Sized>(&mut self, width: u32, height: u32, surface: &mut S) -> bool {
        let changed = (width, height) != (self.width, self.height);
        self.width = width;
        self.height = height;
        self.apply(surface);
        changed
    }

    /// Size as floats, for simulation bounds.
    pub fn extent(&self) -> (f32, f32) {
        (self.width as f32, self.height as f32)
    }
}
