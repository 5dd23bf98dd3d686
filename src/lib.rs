#![cfg(target_arch = "wasm32")]
use crate::constants::{DEFAULT_CANVAS_ID, LOG_LEVEL};
use crate::registry::Registry;
use crate::sim::{AnimationLoop, GlowParams, GlowScene, Surface};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod registry;
mod sim;

thread_local! {
    // One effect per canvas id; a canvas is never wired twice.
    static RUNNING: RefCell<Registry<frame::SharedFrame>> =
        const { RefCell::new(Registry::new()) };
}

/// A running effect bound to one canvas.
#[wasm_bindgen]
pub struct GlowHandle {
    frame: frame::SharedFrame,
}

#[wasm_bindgen]
impl GlowHandle {
    /// Resume frame scheduling after `stop`.
    pub fn start(&self) {
        frame::start_loop(&self.frame);
    }

    /// Stop requesting frames and release the frame callback.
    pub fn stop(&self) {
        frame::stop_loop(&self.frame);
    }

    #[wasm_bindgen(getter)]
    pub fn energy(&self) -> f64 {
        self.frame.borrow().anim.scene.orb.energy()
    }

    #[wasm_bindgen(getter, js_name = strandCount)]
    pub fn strand_count(&self) -> usize {
        self.frame.borrow().anim.scene.strands.len()
    }
}

fn init(canvas_id: &str) -> anyhow::Result<frame::SharedFrame> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::find_canvas(&document, canvas_id)?;
    let surface = canvas::CanvasSurface::new(canvas)?;

    let scene = GlowScene::new(
        GlowParams::default(),
        surface.width(),
        surface.height(),
        StdRng::from_entropy(),
    );
    log::info!(
        "[init] #{} {:.0}x{:.0}",
        canvas_id,
        surface.width(),
        surface.height()
    );

    let frame = Rc::new(RefCell::new(frame::FrameContext {
        anim: AnimationLoop::new(scene),
        surface,
        scheduler: frame::RafScheduler::default(),
    }));
    events::wire_resize(&frame);
    events::wire_input_handlers(&frame);
    frame::start_loop(&frame);
    Ok(frame)
}

fn attach(canvas_id: &str) -> anyhow::Result<GlowHandle> {
    let (frame, created) = RUNNING.with(|r| {
        r.borrow_mut()
            .get_or_try_insert_with(canvas_id, || init(canvas_id))
    })?;
    if !created {
        log::info!("[init] #{canvas_id} already has an effect; reusing it");
    }
    Ok(GlowHandle { frame })
}

/// Start the effect on the canvas with the given element id. A canvas that
/// already runs the effect (including the automatic `#vbCanvas` one) returns
/// a handle to that effect instead of a second copy.
#[wasm_bindgen(js_name = startOn)]
pub fn start_on(canvas_id: &str) -> Result<GlowHandle, JsValue> {
    attach(canvas_id).map_err(|e| JsValue::from_str(&format!("{e:#}")))
}

/// Stop the effect that was started automatically on page load.
#[wasm_bindgen]
pub fn stop() {
    if let Some(frame) = RUNNING.with(|r| r.borrow().get(DEFAULT_CANVAS_ID)) {
        frame::stop_loop(&frame);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(LOG_LEVEL).ok();
    log::info!("orb-glow starting");

    let has_default = dom::window_document()
        .and_then(|d| d.get_element_by_id(DEFAULT_CANVAS_ID))
        .is_some();
    if !has_default {
        log::info!("no #{DEFAULT_CANVAS_ID}; waiting for startOn()");
        return Ok(());
    }
    if let Err(e) = attach(DEFAULT_CANVAS_ID) {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}
