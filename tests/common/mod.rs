// Host-side harness for the simulation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.
#![allow(dead_code)]

pub mod sim {
    pub mod animation {
        include!("../../src/sim/animation.rs");
    }
    pub mod constants {
        include!("../../src/sim/constants.rs");
    }
    pub mod orb {
        include!("../../src/sim/orb.rs");
    }
    pub mod pointer {
        include!("../../src/sim/pointer.rs");
    }
    pub mod scene {
        include!("../../src/sim/scene.rs");
    }
    pub mod strands {
        include!("../../src/sim/strands.rs");
    }
    pub mod surface {
        include!("../../src/sim/surface.rs");
    }

    pub use animation::*;
    pub use constants::*;
    pub use orb::*;
    pub use pointer::*;
    pub use scene::*;
    pub use strands::*;
    pub use surface::*;
}

use glam::DVec2;
use sim::{Blend, Paint, Rect, Rgba, Surface, TickScheduler};

#[derive(Clone, Debug, PartialEq)]
pub enum Cmd {
    Save,
    Restore,
    Blend(Blend),
    FillRect(Rect, Paint),
    FillCircle(DVec2, f64, Paint),
    StrokeCircle(DVec2, f64, f64, Rgba),
    StrokeLine(DVec2, DVec2, f64, Rgba),
}

/// Surface that remembers every call instead of drawing.
pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub cmds: Vec<Cmd>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            cmds: Vec::new(),
        }
    }

    pub fn take(&mut self) -> Vec<Cmd> {
        std::mem::take(&mut self.cmds)
    }

    pub fn lines(&self) -> Vec<&Cmd> {
        self.cmds
            .iter()
            .filter(|c| matches!(c, Cmd::StrokeLine(..)))
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> f64 {
        self.width
    }
    fn height(&self) -> f64 {
        self.height
    }
    fn save(&mut self) {
        self.cmds.push(Cmd::Save);
    }
    fn restore(&mut self) {
        self.cmds.push(Cmd::Restore);
    }
    fn set_blend(&mut self, blend: Blend) {
        self.cmds.push(Cmd::Blend(blend));
    }
    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.cmds.push(Cmd::FillRect(rect, paint.clone()));
    }
    fn fill_circle(&mut self, center: DVec2, radius: f64, paint: &Paint) {
        self.cmds.push(Cmd::FillCircle(center, radius, paint.clone()));
    }
    fn stroke_circle(&mut self, center: DVec2, radius: f64, line_width: f64, color: Rgba) {
        self.cmds
            .push(Cmd::StrokeCircle(center, radius, line_width, color));
    }
    fn stroke_line(&mut self, from: DVec2, to: DVec2, line_width: f64, color: Rgba) {
        self.cmds.push(Cmd::StrokeLine(from, to, line_width, color));
    }
}

#[derive(Default)]
pub struct CountingScheduler {
    pub requested: usize,
    pub cancelled: usize,
}

impl TickScheduler for CountingScheduler {
    fn request_tick(&mut self) {
        self.requested += 1;
    }
    fn cancel(&mut self) {
        self.cancelled += 1;
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
