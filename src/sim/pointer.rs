use glam::DVec2;

/// Normalised input transition in surface coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Down(DVec2),
    Move(DVec2),
    /// Release, cancel, or the pointer leaving the surface.
    Up,
}

/// One step of a drag: where the pointer is now and how far it moved.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragStep {
    pub pos: DVec2,
    pub delta: DVec2,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub down: bool,
    pub last: Option<DVec2>,
}

impl PointerState {
    /// Apply an input and report the drag step it produced, if any.
    ///
    /// Only moves while held produce steps, and the first move after a press
    /// needs the press position as its origin.
    pub fn apply(&mut self, input: PointerInput) -> Option<DragStep> {
        match input {
            PointerInput::Down(pos) => {
                self.down = true;
                self.last = Some(pos);
                None
            }
            PointerInput::Move(pos) => {
                if !self.down {
                    return None;
                }
                let step = self.last.map(|prev| DragStep {
                    pos,
                    delta: pos - prev,
                });
                self.last = Some(pos);
                step
            }
            PointerInput::Up => {
                self.down = false;
                self.last = None;
                None
            }
        }
    }
}
