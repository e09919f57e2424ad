//! WASM bridge for the galaxy background.
//!
//! The page calls `mount_background` once its canvas, glow and trail layer
//! elements exist, `set_theme` whenever the color scheme flips, and
//! `unmount_background` when the view goes away. Everything in between
//! (frame loop, pointer and resize listeners, trail timers) is driven from
//! Rust.
//!
//! # Usage
//!
//! ```ignore
//! import init, { mount_background, set_theme, unmount_background } from "galaxy-web";
//!
//! await init();
//! mount_background("galaxy-canvas", "cursor-glow", "cursor-trail", true);
//! // later
//! set_theme(false);
//! unmount_background();
//! ```

mod canvas;
mod error;
mod frames;
mod host;
mod trail_layer;

use std::cell::{Cell, RefCell};

use galaxy_engine::{BackgroundConfig, Theme};
use wasm_bindgen::prelude::*;

pub use canvas::CanvasSurface;
pub use error::MountError;
pub use host::BackgroundHost;
pub use trail_layer::{TrailLayer, ARTIFACT_CLASS};

thread_local! {
    static HOST: RefCell<Option<BackgroundHost>> = const { RefCell::new(None) };
    static CONFIG: RefCell<BackgroundConfig> = RefCell::new(BackgroundConfig::default());
    static GENERATION: Cell<u32> = const { Cell::new(0) };
}

/// Run `f` against the mounted host. Returns `None` (and does nothing) when
/// nothing is mounted, which is how late callbacks become no-ops.
pub(crate) fn with_host<R>(f: impl FnOnce(&mut BackgroundHost) -> R) -> Option<R> {
    HOST.with(|cell| {
        let mut borrow = cell.try_borrow_mut().ok()?;
        borrow.as_mut().map(f)
    })
}

/// Replace the configuration used by the next `mount_background`.
#[wasm_bindgen]
pub fn configure_background(json: &str) -> Result<(), JsValue> {
    let config = BackgroundConfig::from_json(json).map_err(MountError::from)?;
    CONFIG.with(|cell| *cell.borrow_mut() = config);
    Ok(())
}

/// Mount the background and start animating. Replaces any previous mount.
#[wasm_bindgen]
pub fn mount_background(
    canvas_id: &str,
    glow_id: &str,
    trail_layer_id: &str,
    dark: bool,
) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    unmount_background();

    let config = CONFIG.with(|cell| cell.borrow().clone());
    let generation = GENERATION.with(|g| {
        g.set(g.get().wrapping_add(1));
        g.get()
    });
    let host = BackgroundHost::mount(
        canvas_id,
        glow_id,
        trail_layer_id,
        Theme::from_dark_flag(dark),
        config,
        generation,
    )?;

    HOST.with(|cell| *cell.borrow_mut() = Some(host));
    with_host(|host| host.start());
    log::info!("galaxy-web: mounted on #{}", canvas_id);
    Ok(())
}

/// Switch between the dark and light palettes; visible on the next frame.
#[wasm_bindgen]
pub fn set_theme(dark: bool) {
    with_host(|host| host.set_theme(Theme::from_dark_flag(dark)));
}

/// Stop the frame loop, detach listeners and remove trail elements.
/// Safe to call when nothing is mounted.
#[wasm_bindgen]
pub fn unmount_background() {
    // Take the host out first so its teardown runs outside the borrow.
    let host = HOST.with(|cell| cell.try_borrow_mut().ok().and_then(|mut slot| slot.take()));
    if host.is_some() {
        drop(host);
        log::info!("galaxy-web: unmounted");
    }
}

/// Number of trail artifact elements currently on the page.
#[wasm_bindgen]
pub fn live_trail_artifacts() -> u32 {
    with_host(|host| host.live_artifacts() as u32).unwrap_or(0)
}
