use super::scene::GlowScene;
use super::surface::Surface;

/// Host hook that asks for one more tick on the next display refresh.
pub trait TickScheduler {
    fn request_tick(&mut self);
    /// Drop any tick requested but not yet delivered.
    fn cancel(&mut self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    Stopped,
}

/// Drives a [`GlowScene`] one frame per host tick and re-arms itself until
/// stopped.
pub struct AnimationLoop {
    pub scene: GlowScene,
    state: LoopState,
}

impl AnimationLoop {
    pub fn new(scene: GlowScene) -> Self {
        Self {
            scene,
            state: LoopState::Idle,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == LoopState::Running
    }

    /// Begin (or resume) ticking. A no-op while already running.
    pub fn start<T: TickScheduler + ?Sized>(&mut self, scheduler: &mut T) {
        if self.state == LoopState::Running {
            return;
        }
        self.state = LoopState::Running;
        log::info!("[loop] start at frame {}", self.scene.frames());
        scheduler.request_tick();
    }

    /// Halt scheduling; a tick that still arrives is ignored.
    pub fn stop<T: TickScheduler + ?Sized>(&mut self, scheduler: &mut T) {
        if self.state != LoopState::Running {
            return;
        }
        self.state = LoopState::Stopped;
        scheduler.cancel();
        log::info!("[loop] stopped after {} frames", self.scene.frames());
    }

    /// Handle one host tick. Returns whether a frame was rendered.
    pub fn tick<S, T>(&mut self, surface: &mut S, scheduler: &mut T) -> bool
    where
        S: Surface + ?Sized,
        T: TickScheduler + ?Sized,
    {
        if self.state != LoopState::Running {
            return false;
        }
        self.scene.frame(surface);
        scheduler.request_tick();
        true
    }
}
