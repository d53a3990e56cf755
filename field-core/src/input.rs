use glam::Vec2;

/// Pointer state as last reported by the host.
///
/// Hosts feed this through [`PointerState::moved`] and
/// [`PointerState::left`]; the field reads it once per update.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Last known pointer position in surface space.
    pub pos: Vec2,
    /// `true` while the pointer is known to be over the surface.
    pub active: bool,
}

impl PointerState {
    pub fn moved(&mut self, pos: Vec2) {
        self.pos = pos;
        self.active = true;
    }

    /// Marks the pointer inactive; the last position is kept.
    pub fn left(&mut self) {
        self.active = false;
    }

    /// Returns the pointer position if it is active.
    pub fn active_pos(&self) -> Option<Vec2> {
        self.active.then_some(self.pos)
    }
}
