//! Platform abstraction layer
//!
//! Everything outside the simulation that the game needs from its host:
//! - Audio playback and volume
//! - Window mode
//! - Frame pacing
//!
//! `Headless` implements all of it without a window so the game can run in
//! tests and from the command line.

pub mod autopilot;
pub mod headless;

pub use autopilot::Autopilot;
pub use headless::Headless;

use std::thread;
use std::time::{Duration, Instant};

use crate::audio::AudioSink;

/// Host services used by the scene state machine
pub trait Platform: AudioSink {
    fn set_fullscreen(&mut self, fullscreen: bool);
}

/// Sleeps away the remainder of each frame to hold a fixed rate
#[derive(Debug)]
pub struct FrameLimiter {
    frame: Duration,
    next: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        let frame = Duration::from_secs(1) / fps.max(1);
        Self {
            frame,
            next: Instant::now() + frame,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Block until the next frame is due
    pub fn delay(&mut self) {
        let now = Instant::now();
        if now < self.next {
            thread::sleep(self.next - now);
            self.next += self.frame;
        } else {
            // Running behind: don't try to catch up with a burst of frames
            self.next = now + self.frame;
        }
    }
}
