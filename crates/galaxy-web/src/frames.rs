//! `requestAnimationFrame` as a `FrameRequester`.

use galaxy_engine::{FrameHandle, FrameRequester};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// Owns the JS callback handed to every `requestAnimationFrame` call.
///
/// One closure is reused for the whole loop. It must outlive every request
/// made with it, so it is only dropped after the scheduler has cancelled
/// the pending frame.
pub struct WebFrames {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
}

impl WebFrames {
    pub fn new(window: Window, on_frame: impl FnMut(f64) + 'static) -> Self {
        Self {
            window,
            callback: Closure::<dyn FnMut(f64)>::new(on_frame),
        }
    }
}

impl FrameRequester for WebFrames {
    fn request_frame(&mut self) -> FrameHandle {
        match self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
        {
            Ok(id) => FrameHandle(id),
            Err(err) => {
                // rAF handles start at 1, so 0 is never a live request.
                log::warn!("requestAnimationFrame failed: {:?}", err);
                FrameHandle(0)
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.window.cancel_animation_frame(handle.0).is_err() {
            log::debug!("cancelAnimationFrame({}) failed", handle.0);
        }
    }
}
