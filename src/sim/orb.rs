use super::constants::*;
use super::surface::{stop, Blend, LinearGradient, Paint, RadialGradient, Rect, Rgba, Surface};
use glam::DVec2;
use smallvec::smallvec;

#[derive(Clone, Debug, PartialEq)]
pub struct OrbParams {
    pub grow_rate: f64,
    pub decay_rate: f64,
    pub base_radius_fraction: f64,
    pub max_radius_fraction: f64,
}

impl Default for OrbParams {
    fn default() -> Self {
        Self {
            grow_rate: ENERGY_GROW_RATE,
            decay_rate: ENERGY_DECAY_RATE,
            base_radius_fraction: ORB_BASE_RADIUS_FRACTION,
            max_radius_fraction: ORB_MAX_RADIUS_FRACTION,
        }
    }
}

/// The pulsing centre light. Energy charges while the pointer is held and
/// drains otherwise; the drawn radius follows energy linearly.
#[derive(Clone, Debug)]
pub struct Orb {
    pub params: OrbParams,
    energy: f64,
    base_radius: f64,
    max_radius: f64,
    center: DVec2,
}

impl Orb {
    /// A calm orb sized for a `width` x `height` surface.
    pub fn new(params: OrbParams, width: f64, height: f64) -> Self {
        let mut orb = Self {
            params,
            energy: 0.0,
            base_radius: 0.0,
            max_radius: 0.0,
            center: DVec2::ZERO,
        };
        orb.on_resize(width, height);
        orb
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Advance energy by one frame.
    pub fn update(&mut self, pointer_down: bool) {
        let step = if pointer_down {
            self.params.grow_rate
        } else {
            -self.params.decay_rate
        };
        self.energy = (self.energy + step).clamp(0.0, 1.0);
    }

    pub fn current_radius(&self) -> f64 {
        self.base_radius + (self.max_radius - self.base_radius) * self.energy
    }

    /// Recompute radius bounds and centre. Call at startup and whenever the
    /// surface dimensions change.
    pub fn on_resize(&mut self, width: f64, height: f64) {
        let s = width.min(height).max(0.0);
        self.base_radius = s * self.params.base_radius_fraction;
        self.max_radius = s * self.params.max_radius_fraction;
        self.center = DVec2::new(width * 0.5, height * 0.5);
        log::debug!(
            "[orb] resize {:.0}x{:.0} radius {:.1}..{:.1}",
            width,
            height,
            self.base_radius,
            self.max_radius
        );
    }

    /// Beam, then glow, then ring, all additive.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        let radius = self.current_radius();
        let e = self.energy;
        let c = self.center;
        let height = surface.height();

        surface.save();
        surface.set_blend(Blend::Lighter);

        // Vertical beam across the full height, brightest on the orb's x.
        let core_alpha = BEAM_CORE_ALPHA_BASE + BEAM_CORE_ALPHA_SPAN * e;
        let half = (radius * BEAM_HALF_WIDTH_FACTOR).max(1.0);
        let beam = LinearGradient {
            from: DVec2::new(c.x - half, 0.0),
            to: DVec2::new(c.x + half, 0.0),
            stops: smallvec![
                stop(0.0, Rgba::from_rgb(BEAM_COLOR, 0.0)),
                stop(0.5, Rgba::from_rgb(BEAM_COLOR, core_alpha)),
                stop(1.0, Rgba::from_rgb(BEAM_COLOR, 0.0)),
            ],
        };
        surface.fill_rect(
            Rect::new(c.x - half, 0.0, half * 2.0, height),
            &Paint::Linear(beam),
        );

        let outer_alpha = GLOW_OUTER_ALPHA_BASE + GLOW_OUTER_ALPHA_SPAN * e;
        let glow = RadialGradient {
            center: c,
            inner_radius: 0.0,
            outer_radius: radius,
            stops: smallvec![
                stop(0.0, Rgba::from_rgb(GLOW_CORE_COLOR, 0.55 + 0.4 * e)),
                stop(0.25, Rgba::from_rgb(GLOW_INNER_COLOR, 0.35 + 0.4 * e)),
                stop(0.6, Rgba::from_rgb(GLOW_MID_COLOR, 0.12 + 0.3 * e)),
                stop(1.0, Rgba::from_rgb(GLOW_OUTER_COLOR, outer_alpha)),
            ],
        };
        surface.fill_circle(c, radius, &Paint::Radial(glow));

        let ring_alpha = RING_ALPHA_BASE + RING_ALPHA_SPAN * e;
        surface.stroke_circle(
            c,
            radius * RING_RADIUS_FACTOR,
            RING_LINE_WIDTH,
            Rgba::from_rgb(RING_COLOR, ring_alpha),
        );

        surface.restore();
    }
}
