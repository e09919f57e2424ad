//! `DrawSurface` backed by a browser `<canvas>` and its 2D context.

use std::f64::consts::TAU;

use galaxy_engine::{DrawSurface, Rgba};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::error::MountError;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Look up `#id` and acquire its 2D context.
    ///
    /// `Ok(None)` means the canvas exists but has no 2D context; the engine
    /// reports that as a missing surface at mount.
    pub fn from_element_id(document: &Document, id: &str) -> Result<Option<Self>, MountError> {
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| MountError::ElementNotFound(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| MountError::WrongElementType { id: id.to_string(), expected: "canvas" })?;

        let ctx = canvas
            .get_context("2d")
            .map_err(MountError::dom)?
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok());

        Ok(ctx.map(|ctx| Self { canvas, ctx }))
    }

    /// The surface stops drawing once its canvas leaves the document.
    fn is_attached(&self) -> bool {
        self.canvas.is_connected()
    }
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn fill_rect(&mut self, origin: Vec2, extent: Vec2, color: Rgba) {
        if !self.is_attached() {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            origin.x as f64,
            origin.y as f64,
            extent.x as f64,
            extent.y as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if !self.is_attached() {
            return;
        }
        self.ctx.begin_path();
        // arc() only rejects negative radii
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill();
    }

    fn stroke_gradient_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        width: f32,
        from_color: Rgba,
        to_color: Rgba,
    ) {
        if !self.is_attached() {
            return;
        }
        let gradient = self
            .ctx
            .create_linear_gradient(from.x as f64, from.y as f64, to.x as f64, to.y as f64);
        if gradient.add_color_stop(0.0, &from_color.to_css()).is_err()
            || gradient.add_color_stop(1.0, &to_color.to_css()).is_err()
        {
            log::debug!("gradient color stop rejected; skipping comet");
            return;
        }

        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_canvas_gradient(&gradient);
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}
