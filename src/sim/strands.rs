use super::constants::*;
use super::surface::{Blend, Rgba, Surface};
use glam::DVec2;
use rand::prelude::*;
use std::collections::VecDeque;
use std::ops::Range;

#[derive(Clone, Debug, PartialEq)]
pub struct StrandParams {
    pub speed_cap: f64,
    pub velocity_scale: f64,
    pub max_life: Range<f64>,
    pub thickness: Range<f64>,
    pub damping: f64,
    pub upward_drift: f64,
    pub tail_factor: f64,
    pub alpha_peak: f64,
    pub thinning: f64,
    /// Upper bound on live strands; the oldest is dropped to make room.
    /// `None` leaves the pool unbounded.
    pub max_strands: Option<usize>,
}

impl Default for StrandParams {
    fn default() -> Self {
        Self {
            speed_cap: STRAND_SPEED_CAP,
            velocity_scale: STRAND_VELOCITY_SCALE,
            max_life: STRAND_MAX_LIFE_MIN..STRAND_MAX_LIFE_MAX,
            thickness: STRAND_THICKNESS_MIN..STRAND_THICKNESS_MAX,
            damping: STRAND_DAMPING,
            upward_drift: STRAND_UPWARD_DRIFT,
            tail_factor: STRAND_TAIL_FACTOR,
            alpha_peak: STRAND_ALPHA_PEAK,
            thinning: STRAND_THINNING,
            max_strands: None,
        }
    }
}

/// A short-lived streak of light emitted along a drag.
#[derive(Clone, Debug, PartialEq)]
pub struct Strand {
    pub pos: DVec2,
    pub vel: DVec2,
    /// Frames survived so far.
    pub life: u32,
    pub max_life: f64,
    pub thickness: f64,
}

impl Strand {
    /// Build a strand at `pos` heading along the drag `delta`.
    ///
    /// The drag length is capped at `params.speed_cap` before scaling; a
    /// zero-length drag yields a motionless strand.
    pub fn from_drag(
        pos: DVec2,
        delta: DVec2,
        max_life: f64,
        thickness: f64,
        params: &StrandParams,
    ) -> Self {
        let speed = delta.length().min(params.speed_cap);
        // atan2(0, 0) is 0 already; guard NaN deltas too.
        let angle = match delta.y.atan2(delta.x) {
            a if a.is_finite() => a,
            _ => 0.0,
        };
        let vel = DVec2::from_angle(angle) * (speed * params.velocity_scale);
        Self {
            pos,
            vel,
            life: 0,
            max_life,
            thickness,
        }
    }

    /// Normalised age in \[0, 1\] while alive.
    pub fn age(&self) -> f64 {
        if self.max_life > 0.0 {
            (self.life as f64 / self.max_life).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    pub fn is_expired(&self) -> bool {
        self.life as f64 > self.max_life
    }

    pub fn alpha(&self, params: &StrandParams) -> f64 {
        (1.0 - self.age()) * params.alpha_peak
    }

    pub fn line_width(&self, params: &StrandParams) -> f64 {
        self.thickness * (1.0 - self.age() * params.thinning)
    }

    pub fn color(&self, params: &StrandParams) -> Rgba {
        Rgba::lerp_rgb(
            STRAND_COLOR_YOUNG,
            STRAND_COLOR_OLD,
            self.age(),
            self.alpha(params),
        )
    }

    /// Trailing end of the drawn segment.
    pub fn tail(&self, params: &StrandParams) -> DVec2 {
        self.pos - self.vel * params.tail_factor
    }

    fn integrate(&mut self, params: &StrandParams) {
        self.pos += self.vel * params.damping;
        self.pos.y -= params.upward_drift;
    }
}

/// Owns every live strand in insertion order.
pub struct StrandPool {
    pub params: StrandParams,
    strands: VecDeque<Strand>,
    rng: StdRng,
}

impl StrandPool {
    pub fn new(params: StrandParams, rng: StdRng) -> Self {
        Self {
            params,
            strands: VecDeque::new(),
            rng,
        }
    }

    pub fn with_seed(params: StrandParams, seed: u64) -> Self {
        Self::new(params, StdRng::seed_from_u64(seed))
    }

    pub fn len(&self) -> usize {
        self.strands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Strand> {
        self.strands.iter()
    }

    pub fn clear(&mut self) {
        self.strands.clear();
    }

    /// Emit a strand for one drag step, sampling its lifetime and thickness.
    pub fn spawn(&mut self, pos: DVec2, delta: DVec2) {
        let max_life = sample(&mut self.rng, &self.params.max_life);
        let thickness = sample(&mut self.rng, &self.params.thickness);
        let strand = Strand::from_drag(pos, delta, max_life, thickness, &self.params);
        self.push(strand);
    }

    /// Append an already-built strand, honouring `max_strands`.
    pub fn push(&mut self, strand: Strand) {
        if let Some(cap) = self.params.max_strands {
            if cap == 0 {
                return;
            }
            while self.strands.len() >= cap {
                self.strands.pop_front();
            }
        }
        self.strands.push_back(strand);
    }

    /// Age, cull, move and draw every strand. Expired strands are removed
    /// before they are drawn.
    pub fn advance_and_render<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        if self.strands.is_empty() {
            return;
        }
        let params = &self.params;
        surface.save();
        surface.set_blend(Blend::Lighter);
        self.strands.retain_mut(|s| {
            s.life += 1;
            if s.is_expired() {
                return false;
            }
            s.integrate(params);
            surface.stroke_line(s.pos, s.tail(params), s.line_width(params), s.color(params));
            true
        });
        surface.restore();
    }
}

// Uniform draw from `[start, end)`; an empty range pins to its start.
fn sample(rng: &mut StdRng, range: &Range<f64>) -> f64 {
    if range.is_empty() {
        range.start
    } else {
        rng.gen_range(range.clone())
    }
}
