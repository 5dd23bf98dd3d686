use crate::sim::{Blend, ColorStop, Paint, Rect, Rgba, Surface};
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] backed by a 2D canvas context.
///
/// Drawing happens in CSS pixels; the context transform maps them onto the
/// device-resolution backing store.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    width: f64,
    height: f64,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("get_context failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("not a 2d context"))?;
        let mut surface = Self {
            canvas,
            ctx,
            width: 1.0,
            height: 1.0,
        };
        surface.fit_viewport();
        Ok(surface)
    }

    pub fn canvas(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }

    /// Resize the canvas to the viewport and reset the pixel-ratio transform.
    /// Returns the new logical size.
    pub fn fit_viewport(&mut self) -> (f64, f64) {
        let (w, h, dpr) = crate::dom::sync_canvas_to_viewport(&self.canvas);
        self.width = w;
        self.height = h;
        // Resizing a canvas resets its state, so the transform is reapplied.
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        log::debug!("[canvas] {:.0}x{:.0} @{:.2}x", w, h, dpr);
        (w, h)
    }

    fn apply_fill(&self, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_fill_style_str(&c.to_string()),
            Paint::Linear(g) => {
                let grad = self
                    .ctx
                    .create_linear_gradient(g.from.x, g.from.y, g.to.x, g.to.y);
                add_stops(&grad, &g.stops);
                self.ctx.set_fill_style_canvas_gradient(&grad);
            }
            Paint::Radial(g) => {
                match self.ctx.create_radial_gradient(
                    g.center.x,
                    g.center.y,
                    g.inner_radius,
                    g.center.x,
                    g.center.y,
                    g.outer_radius.max(g.inner_radius),
                ) {
                    Ok(grad) => {
                        add_stops(&grad, &g.stops);
                        self.ctx.set_fill_style_canvas_gradient(&grad);
                    }
                    Err(e) => log::warn!("radial gradient rejected: {:?}", e),
                }
            }
        }
    }
}

fn add_stops(grad: &web::CanvasGradient, stops: &[ColorStop]) {
    for s in stops {
        _ = grad.add_color_stop(s.offset.clamp(0.0, 1.0) as f32, &s.color.to_string());
    }
}

impl Surface for CanvasSurface {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_blend(&mut self, blend: Blend) {
        let op = match blend {
            Blend::SourceOver => "source-over",
            Blend::Lighter => "lighter",
        };
        _ = self.ctx.set_global_composite_operation(op);
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.apply_fill(paint);
        self.ctx.fill_rect(rect.x, rect.y, rect.w, rect.h);
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, paint: &Paint) {
        if radius <= 0.0 {
            return;
        }
        self.apply_fill(paint);
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64, line_width: f64, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width);
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.stroke();
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, line_width: f64, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width);
        self.ctx.set_line_cap("round");
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }
}
