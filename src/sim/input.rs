//! Per-frame input snapshot
//!
//! The shell maps keyboard/controller state to logical actions; the
//! simulation never sees device details.

use std::ops::{BitOr, BitOrAssign};

/// Bitmask of logical actions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Actions(u16);

impl Actions {
    pub const NONE: Actions = Actions(0);
    pub const LEFT: Actions = Actions(1 << 0);
    pub const RIGHT: Actions = Actions(1 << 1);
    pub const DOWN: Actions = Actions(1 << 2);
    pub const UP: Actions = Actions(1 << 3);
    pub const FIRE: Actions = Actions(1 << 4);
    pub const QUIT: Actions = Actions(1 << 5);
    pub const PAUSE: Actions = Actions(1 << 6);
    pub const INVINCIBLE: Actions = Actions(1 << 7);

    pub const fn from_bits(bits: u16) -> Self {
        Actions(bits)
    }

    /// True if any bit of `other` is set
    pub fn contains(self, other: Actions) -> bool {
        self.0 & other.0 != 0
    }

    pub fn without(self, other: Actions) -> Actions {
        Actions(self.0 & !other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Actions {
    type Output = Actions;

    fn bitor(self, rhs: Actions) -> Actions {
        Actions(self.0 | rhs.0)
    }
}

impl BitOrAssign for Actions {
    fn bitor_assign(&mut self, rhs: Actions) {
        self.0 |= rhs.0;
    }
}

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    /// Key-down events this frame (menu navigation, toggles)
    pub pressed: Actions,
    /// Actions held down right now (movement, firing)
    pub held: Actions,
    /// The key-down events are OS key-repeats
    pub repeat: bool,
}

impl FrameInput {
    pub fn press(actions: Actions) -> Self {
        Self {
            pressed: actions,
            ..Default::default()
        }
    }

    pub fn hold(actions: Actions) -> Self {
        Self {
            held: actions,
            ..Default::default()
        }
    }

    /// A pressed action that is not a key-repeat
    pub fn fresh(&self, action: Actions) -> bool {
        self.pressed.contains(action) && !self.repeat
    }
}
