// Drawing-surface contract used by the simulation.
//
// The core never talks to a browser directly. Anything that can paint
// rectangles, arcs and lines with gradients and an additive blend mode
// can host the effect.

use glam::DVec2;
use smallvec::SmallVec;
use std::fmt;

/// Straight (non-premultiplied) colour with a fractional alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(rgb: [u8; 3], a: f64) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2], a)
    }

    /// Per-channel linear blend; `t` is clamped to \[0, 1\].
    pub fn lerp_rgb(from: [u8; 3], to: [u8; 3], t: f64, a: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
        Self::new(
            mix(from[0], to[0]),
            mix(from[1], to[1]),
            mix(from[2], to[2]),
            a,
        )
    }
}

// CSS colour syntax, accepted by 2D canvas fill/stroke styles.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            self.a.clamp(0.0, 1.0)
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgba,
}

/// Ordered stops; four inline covers every gradient the effect draws.
pub type Stops = SmallVec<[ColorStop; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: DVec2,
    pub to: DVec2,
    pub stops: Stops,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: DVec2,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub stops: Stops,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Linear(LinearGradient),
    Radial(RadialGradient),
}

/// Compositing mode for subsequent draws.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Blend {
    /// Normal painter's-order compositing.
    #[default]
    SourceOver,
    /// Additive: overlapping light sums brightness.
    Lighter,
}

/// Axis-aligned rectangle in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

/// A 2D drawing surface whose dimensions may change between frames.
///
/// Coordinates are logical pixels with the origin at the top-left corner.
/// Implementations must scope blend mode and line settings between
/// `save` and `restore`.
pub trait Surface {
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    fn save(&mut self);
    fn restore(&mut self);
    fn set_blend(&mut self, blend: Blend);

    fn fill_rect(&mut self, rect: Rect, paint: &Paint);
    fn fill_circle(&mut self, center: DVec2, radius: f64, paint: &Paint);
    fn stroke_circle(&mut self, center: DVec2, radius: f64, line_width: f64, color: Rgba);
    /// Stroke a single segment with round caps.
    fn stroke_line(&mut self, from: DVec2, to: DVec2, line_width: f64, color: Rgba);
}

#[inline]
pub fn stop(offset: f64, color: Rgba) -> ColorStop {
    ColorStop { offset, color }
}
