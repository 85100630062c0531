//! Per-frame input snapshots.
//!
//! Presentation translates whatever raw events it has (keyboard, gamepad,
//! touch) into a [`Buttons`] set each frame. The engine needs both the
//! currently-held set and the edge-detected just-pressed set; the
//! [`InputTracker`] derives the latter from successive held sets.

use bitflags::bitflags;

bitflags! {
    /// Logical game buttons.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
    pub struct Buttons: u8 {
        const UP = 1;
        const DOWN = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
        /// Interact / confirm / advance dialogue.
        const INTERACT = 1 << 4;
        const INVENTORY = 1 << 5;
        const LEXICON = 1 << 6;
        /// Close an open panel.
        const CANCEL = 1 << 7;
    }
}

/// Input state for one frame: what is held down, and what went down this
/// frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub held: Buttons,
    pub pressed: Buttons,
}

impl InputFrame {
    pub const IDLE: Self = Self {
        held: Buttons::empty(),
        pressed: Buttons::empty(),
    };

    /// Frame with buttons both held and freshly pressed — the common case in
    /// tests and scripted playback.
    pub fn press(buttons: Buttons) -> Self {
        Self {
            held: buttons,
            pressed: buttons,
        }
    }

    /// Frame with buttons held but not freshly pressed.
    pub fn hold(buttons: Buttons) -> Self {
        Self {
            held: buttons,
            pressed: Buttons::empty(),
        }
    }

    /// Raw movement direction from the held set. Opposed directions resolve
    /// last-writer-wins: down beats up, right beats left.
    pub fn direction(&self) -> (f32, f32) {
        let mut dx = 0.0;
        let mut dy = 0.0;
        if self.held.contains(Buttons::UP) {
            dy = -1.0;
        }
        if self.held.contains(Buttons::DOWN) {
            dy = 1.0;
        }
        if self.held.contains(Buttons::LEFT) {
            dx = -1.0;
        }
        if self.held.contains(Buttons::RIGHT) {
            dx = 1.0;
        }
        (dx, dy)
    }
}

/// Edge detector turning a stream of held sets into [`InputFrame`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputTracker {
    prev: Buttons,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the frame for the current held set; `pressed` is everything
    /// held now that was not held last frame.
    pub fn frame(&mut self, held: Buttons) -> InputFrame {
        let pressed = held & !self.prev;
        self.prev = held;
        InputFrame { held, pressed }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_detects_edges_once() {
        let mut tracker = InputTracker::new();
        let first = tracker.frame(Buttons::INTERACT);
        assert!(first.pressed.contains(Buttons::INTERACT));
        let second = tracker.frame(Buttons::INTERACT);
        assert!(!second.pressed.contains(Buttons::INTERACT));
        let released = tracker.frame(Buttons::empty());
        assert!(released.pressed.is_empty());
        let again = tracker.frame(Buttons::INTERACT);
        assert!(again.pressed.contains(Buttons::INTERACT));
    }

    #[test]
    fn opposed_directions_resolve_deterministically() {
        let frame = InputFrame::hold(Buttons::UP | Buttons::DOWN | Buttons::LEFT);
        assert_eq!(frame.direction(), (-1.0, 1.0));
    }
}
