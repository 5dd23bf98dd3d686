use super::constants::{BACKGROUND_BOTTOM, BACKGROUND_TOP};
use super::orb::{Orb, OrbParams};
use super::pointer::{PointerInput, PointerState};
use super::strands::{StrandParams, StrandPool};
use super::surface::{stop, LinearGradient, Paint, Rect, Rgba, Surface};
use glam::DVec2;
use rand::prelude::*;
use smallvec::smallvec;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlowParams {
    pub orb: OrbParams,
    pub strands: StrandParams,
}

/// Everything the effect mutates between frames: the orb, the strand pool
/// and the pointer. Built once per surface and fed input and frames from
/// the host.
pub struct GlowScene {
    pub orb: Orb,
    pub strands: StrandPool,
    pointer: PointerState,
    size: DVec2,
    frames: u64,
}

impl GlowScene {
    pub fn new(params: GlowParams, width: f64, height: f64, rng: StdRng) -> Self {
        Self {
            orb: Orb::new(params.orb, width, height),
            strands: StrandPool::new(params.strands, rng),
            pointer: PointerState::default(),
            size: DVec2::new(width, height),
            frames: 0,
        }
    }

    pub fn with_seed(params: GlowParams, width: f64, height: f64, seed: u64) -> Self {
        Self::new(params, width, height, StdRng::seed_from_u64(seed))
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn size(&self) -> DVec2 {
        self.size
    }

    /// Frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn handle_input(&mut self, input: PointerInput) {
        if let Some(step) = self.pointer.apply(input) {
            self.strands.spawn(step.pos, step.delta);
        }
    }

    pub fn pointer_down(&mut self, pos: DVec2) {
        self.handle_input(PointerInput::Down(pos));
    }

    pub fn pointer_move(&mut self, pos: DVec2) {
        self.handle_input(PointerInput::Move(pos));
    }

    pub fn pointer_up(&mut self) {
        self.handle_input(PointerInput::Up);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = DVec2::new(width, height);
        self.orb.on_resize(width, height);
    }

    /// One full tick: background, strands, then the orb on top.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        let (w, h) = (surface.width(), surface.height());
        if w != self.size.x || h != self.size.y {
            self.resize(w, h);
        }

        paint_background(surface);
        self.strands.advance_and_render(surface);
        self.orb.update(self.pointer.down);
        self.orb.draw(surface);
        self.frames += 1;

        if self.frames % 600 == 0 {
            log::trace!(
                "[scene] frame {} energy {:.2} strands {}",
                self.frames,
                self.orb.energy(),
                self.strands.len()
            );
        }
    }
}

/// Vertical navy-to-black fill covering the whole surface.
pub fn paint_background<S: Surface + ?Sized>(surface: &mut S) {
    let (w, h) = (surface.width(), surface.height());
    let gradient = LinearGradient {
        from: DVec2::ZERO,
        to: DVec2::new(0.0, h),
        stops: smallvec![
            stop(0.0, Rgba::from_rgb(BACKGROUND_TOP, 1.0)),
            stop(1.0, Rgba::from_rgb(BACKGROUND_BOTTOM, 1.0)),
        ],
    };
    surface.fill_rect(Rect::new(0.0, 0.0, w, h), &Paint::Linear(gradient));
}
