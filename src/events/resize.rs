use crate::frame::SharedFrame;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas matched to the viewport and tell the orb before the next
/// frame is drawn.
pub fn wire_resize(ctx: &SharedFrame) {
    let ctx = ctx.clone();
    let closure = Closure::wrap(Box::new(move || {
        let mut frame = ctx.borrow_mut();
        let (w, h) = frame.surface.fit_viewport();
        frame.anim.scene.resize(w, h);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
