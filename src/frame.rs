use crate::canvas::CanvasSurface;
use crate::sim::{AnimationLoop, TickScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub type SharedFrame = Rc<RefCell<FrameContext>>;

/// State touched by both the frame callback and the input listeners.
pub struct FrameContext {
    pub anim: AnimationLoop,
    pub surface: CanvasSurface,
    pub scheduler: RafScheduler,
}

/// [`TickScheduler`] over `requestAnimationFrame`.
#[derive(Default)]
pub struct RafScheduler {
    tick: TickClosure,
    pending: Option<i32>,
}

impl RafScheduler {
    fn has_callback(&self) -> bool {
        self.tick.borrow().is_some()
    }

    /// Drop the frame closure. Must not be called from inside a tick.
    pub fn release(&mut self) {
        self.cancel();
        let released = self.tick.borrow_mut().take();
        drop(released);
    }
}

impl TickScheduler for RafScheduler {
    fn request_tick(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        let tick = self.tick.borrow();
        let Some(callback) = tick.as_ref() else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.pending = Some(id),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel(&mut self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
    }
}

/// Install the frame callback if needed and start the loop.
pub fn start_loop(frame_ctx: &SharedFrame) {
    if !frame_ctx.borrow().scheduler.has_callback() {
        let frame_ctx_tick = frame_ctx.clone();
        let closure = Closure::wrap(Box::new(move || {
            let mut guard = frame_ctx_tick.borrow_mut();
            let FrameContext {
                anim,
                surface,
                scheduler,
            } = &mut *guard;
            scheduler.pending = None;
            anim.tick(surface, scheduler);
        }) as Box<dyn FnMut()>);
        *frame_ctx.borrow().scheduler.tick.borrow_mut() = Some(closure);
    }
    let mut guard = frame_ctx.borrow_mut();
    let FrameContext {
        anim, scheduler, ..
    } = &mut *guard;
    anim.start(scheduler);
}

/// Halt the loop and free the frame callback.
pub fn stop_loop(frame_ctx: &SharedFrame) {
    let mut guard = frame_ctx.borrow_mut();
    let FrameContext {
        anim, scheduler, ..
    } = &mut *guard;
    anim.stop(scheduler);
    scheduler.release();
}
