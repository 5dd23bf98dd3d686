use glam::DVec2;
use web_sys as web;

// ---------------- Event -> surface coordinates ----------------

/// Client coordinates relative to the canvas' top-left corner, in CSS pixels.
#[inline]
pub fn client_to_canvas(client_x: f64, client_y: f64, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    DVec2::new(client_x - rect.left(), client_y - rect.top())
}

/// Mouse and pointer events (a `PointerEvent` derefs to `MouseEvent`).
#[inline]
pub fn mouse_canvas_pos(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    client_to_canvas(ev.client_x() as f64, ev.client_y() as f64, canvas)
}

/// First active touch point, if any finger is still down.
pub fn touch_canvas_pos(ev: &web::TouchEvent, canvas: &web::HtmlCanvasElement) -> Option<DVec2> {
    let touch = ev.touches().item(0)?;
    Some(client_to_canvas(
        touch.client_x() as f64,
        touch.client_y() as f64,
        canvas,
    ))
}

/// Whether the browser exposes Pointer Events at all.
pub fn supports_pointer_events() -> bool {
    web::window()
        .map(|w| js_sys::Reflect::has(&w, &"PointerEvent".into()).unwrap_or(false))
        .unwrap_or(false)
}
