use galaxy_engine::{
    ArtifactId, BackgroundAnimation, BackgroundConfig, FrameScheduler, Theme, Viewport,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, Window};

use crate::canvas::CanvasSurface;
use crate::error::MountError;
use crate::frames::WebFrames;
use crate::trail_layer::TrailLayer;

/// Window listeners installed for one mount. Detached on drop, so every
/// exit path (teardown or a failed mount) removes them.
struct Listeners {
    window: Window,
    pointer_move: Closure<dyn FnMut(MouseEvent)>,
    resize: Closure<dyn FnMut(Event)>,
    pointer_attached: bool,
    resize_attached: bool,
}

impl Listeners {
    fn attach(
        window: &Window,
        pointer_move: impl FnMut(MouseEvent) + 'static,
        resize: impl FnMut(Event) + 'static,
    ) -> Result<Self, MountError> {
        let mut listeners = Self {
            window: window.clone(),
            pointer_move: Closure::<dyn FnMut(MouseEvent)>::new(pointer_move),
            resize: Closure::<dyn FnMut(Event)>::new(resize),
            pointer_attached: false,
            resize_attached: false,
        };
        // On error `listeners` drops here and detaches whatever was added.
        listeners
            .window
            .add_event_listener_with_callback("mousemove", listeners.pointer_move.as_ref().unchecked_ref())
            .map_err(MountError::dom)?;
        listeners.pointer_attached = true;
        listeners
            .window
            .add_event_listener_with_callback("resize", listeners.resize.as_ref().unchecked_ref())
            .map_err(MountError::dom)?;
        listeners.resize_attached = true;
        Ok(listeners)
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        if self.pointer_attached {
            let _ = self.window.remove_event_listener_with_callback(
                "mousemove",
                self.pointer_move.as_ref().unchecked_ref(),
            );
        }
        if self.resize_attached {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", self.resize.as_ref().unchecked_ref());
        }
    }
}

/// Browser host for one mounted background.
///
/// Wires the engine to the page: a canvas surface, the rAF-driven scheduler,
/// window listeners, and the DOM trail layer. Dropping the host tears
/// everything down synchronously.
pub struct BackgroundHost {
    anim: BackgroundAnimation<CanvasSurface>,
    scheduler: FrameScheduler,
    frames: WebFrames,
    trail: TrailLayer,
    listeners: Option<Listeners>,
    window: Window,
    theme: Theme,
    /// Distinguishes this mount's trail timers from a previous mount's.
    generation: u32,
}

impl BackgroundHost {
    pub fn mount(
        canvas_id: &str,
        glow_id: &str,
        trail_layer_id: &str,
        theme: Theme,
        config: BackgroundConfig,
        generation: u32,
    ) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;

        let surface = CanvasSurface::from_element_id(&document, canvas_id)?;
        let trail = TrailLayer::new(&document, glow_id, trail_layer_id, config.trail.glow_size)?;

        let seed = (js_sys::Math::random() * (1u64 << 53) as f64) as u64;
        let anim = BackgroundAnimation::mount(surface, window_viewport(&window), config, seed)?;

        let frames = WebFrames::new(window.clone(), |_timestamp| {
            crate::with_host(|host| host.on_frame());
        });
        let listeners = Listeners::attach(
            &window,
            |event: MouseEvent| {
                let (x, y) = (event.client_x() as f32, event.client_y() as f32);
                crate::with_host(|host| host.on_pointer_move(x, y));
            },
            |_event: Event| {
                crate::with_host(|host| host.on_resize());
            },
        )?;

        Ok(Self {
            anim,
            scheduler: FrameScheduler::new(),
            frames,
            trail,
            listeners: Some(listeners),
            window,
            theme,
            generation,
        })
    }

    /// Draw the first frame immediately and arm the loop.
    pub fn start(&mut self) {
        self.anim.frame(self.theme);
        self.scheduler.start(&mut self.frames);
    }

    fn on_frame(&mut self) {
        if !self.scheduler.fire() {
            return;
        }
        self.anim.frame(self.theme);
        self.scheduler.rearm(&mut self.frames);
    }

    fn on_pointer_move(&mut self, x: f32, y: f32) {
        let outcome = self.anim.pointer_move(x, y, js_sys::Date::now());
        if let Some(artifact) = self.trail.apply(&outcome) {
            self.schedule_removal(artifact.id);
        }
    }

    fn schedule_removal(&self, id: ArtifactId) {
        let Some(ttl_ms) = self.anim.trail().map(|t| t.ttl_ms()) else {
            return;
        };
        let generation = self.generation;
        let callback = Closure::once_into_js(move || {
            crate::with_host(|host| host.on_trail_timer(generation, id));
        });
        if let Err(err) = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), ttl_ms as i32)
        {
            log::warn!("could not schedule removal of {:?}: {:?}", id, err);
        }
    }

    fn on_trail_timer(&mut self, generation: u32, id: ArtifactId) {
        // Timers from an earlier mount must not touch this mount's artifacts.
        if generation != self.generation {
            return;
        }
        if self.anim.expire_artifact(id) {
            self.trail.remove(id);
        }
    }

    fn on_resize(&mut self) {
        let vp = window_viewport(&self.window);
        self.anim.resize(vp.width, vp.height);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn live_artifacts(&self) -> usize {
        self.trail.live_count()
    }
}

impl Drop for BackgroundHost {
    fn drop(&mut self) {
        self.scheduler.cancel(&mut self.frames);
        self.listeners.take();
        self.trail.clear();
        self.anim.teardown();
    }
}

fn window_viewport(window: &Window) -> Viewport {
    let dim = |v: Result<JsValue, JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0).max(0.0) as u32
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}
