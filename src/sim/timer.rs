//! Frame-based countdowns
//!
//! Everything time-related in the simulation counts whole frames: weapon
//! cooldowns, invulnerability, spawn delays, banners.

use serde::{Deserialize, Serialize};

use crate::cyclic;

/// A countdown that stops at zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Countdown(u32);

impl Countdown {
    pub const fn new(frames: u32) -> Self {
        Self(frames)
    }

    pub fn reset(&mut self, frames: u32) {
        self.0 = frames;
    }

    /// Step one frame toward zero
    pub fn tick(&mut self) {
        self.0 = self.0.saturating_sub(1);
    }

    pub fn is_done(&self) -> bool {
        self.0 == 0
    }

    pub fn remaining(&self) -> u32 {
        self.0
    }
}

/// Sprite animation clock: counts 2, 1, 0, 2, ... and sprite frames step on 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnimationClock(i32);

impl AnimationClock {
    const PERIOD_MAX: i32 = 2;

    pub fn tick(&mut self) {
        self.0 = cyclic(self.0 - 1, 0, Self::PERIOD_MAX);
    }

    /// True on the frame sprites should move to their next image
    pub fn on_beat(&self) -> bool {
        self.0 == 0
    }
}

/// Advance a looping sprite frame index
#[inline]
pub fn next_frame(frame: usize, total: usize) -> usize {
    if frame + 1 >= total { 0 } else { frame + 1 }
}
