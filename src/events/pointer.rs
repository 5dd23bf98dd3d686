use crate::frame::SharedFrame;
use crate::input;
use crate::sim::PointerInput;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(ctx: &SharedFrame) {
    let canvas = ctx.borrow().surface.canvas().clone();
    if input::supports_pointer_events() {
        wire_pointer_events(&canvas, ctx);
    } else {
        log::info!("[input] no Pointer Events, falling back to mouse + touch");
        wire_mouse_events(&canvas, ctx);
        wire_touch_events(&canvas, ctx);
    }
}

fn listen(target: &web::EventTarget, kind: &str, handler: impl FnMut(web::Event) + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    if let Err(e) = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
    {
        log::warn!("[input] could not listen for {kind}: {:?}", e);
    }
    closure.forget();
}

/// Feed one input to the scene, suppressing browser gestures while a drag
/// is in progress.
fn dispatch(ctx: &SharedFrame, ev: &web::Event, transition: PointerInput) {
    let mut frame = ctx.borrow_mut();
    let was_down = frame.anim.scene.pointer().down;
    frame.anim.scene.handle_input(transition);
    if was_down || matches!(transition, PointerInput::Down(_)) {
        ev.prevent_default();
    }
}

fn wire_pointer_events(canvas: &web::HtmlCanvasElement, ctx: &SharedFrame) {
    {
        let ctx = ctx.clone();
        let canvas_c = canvas.clone();
        listen(canvas, "pointerdown", move |ev| {
            let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            _ = canvas_c.set_pointer_capture(pe.pointer_id());
            let pos = input::mouse_canvas_pos(pe, &canvas_c);
            dispatch(&ctx, &ev, PointerInput::Down(pos));
        });
    }
    {
        let ctx = ctx.clone();
        let canvas_c = canvas.clone();
        listen(canvas, "pointermove", move |ev| {
            let Some(pe) = ev.dyn_ref::<web::PointerEvent>() else {
                return;
            };
            let pos = input::mouse_canvas_pos(pe, &canvas_c);
            dispatch(&ctx, &ev, PointerInput::Move(pos));
        });
    }
    for kind in ["pointerup", "pointercancel"] {
        let ctx = ctx.clone();
        listen(canvas, kind, move |ev| dispatch(&ctx, &ev, PointerInput::Up));
    }
}

fn wire_mouse_events(canvas: &web::HtmlCanvasElement, ctx: &SharedFrame) {
    {
        let ctx = ctx.clone();
        let canvas_c = canvas.clone();
        listen(canvas, "mousedown", move |ev| {
            let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let pos = input::mouse_canvas_pos(me, &canvas_c);
            dispatch(&ctx, &ev, PointerInput::Down(pos));
        });
    }
    {
        let ctx = ctx.clone();
        let canvas_c = canvas.clone();
        listen(canvas, "mousemove", move |ev| {
            let Some(me) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let pos = input::mouse_canvas_pos(me, &canvas_c);
            dispatch(&ctx, &ev, PointerInput::Move(pos));
        });
    }
    {
        let ctx = ctx.clone();
        listen(canvas, "mouseleave", move |ev| {
            dispatch(&ctx, &ev, PointerInput::Up)
        });
    }
    // Releases outside the canvas still end the drag.
    if let Some(window) = web::window() {
        let ctx = ctx.clone();
        listen(&window, "mouseup", move |ev| {
            dispatch(&ctx, &ev, PointerInput::Up)
        });
    }
}

fn wire_touch_events(canvas: &web::HtmlCanvasElement, ctx: &SharedFrame) {
    for (kind, pressed) in [("touchstart", true), ("touchmove", false)] {
        let ctx = ctx.clone();
        let canvas_c = canvas.clone();
        listen(canvas, kind, move |ev| {
            let Some(te) = ev.dyn_ref::<web::TouchEvent>() else {
                return;
            };
            let Some(pos) = input::touch_canvas_pos(te, &canvas_c) else {
                return;
            };
            let transition = if pressed {
                PointerInput::Down(pos)
            } else {
                PointerInput::Move(pos)
            };
            dispatch(&ctx, &ev, transition);
        });
    }
    for kind in ["touchend", "touchcancel"] {
        let ctx = ctx.clone();
        listen(canvas, kind, move |ev| dispatch(&ctx, &ev, PointerInput::Up));
    }
}
