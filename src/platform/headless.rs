//! Windowless host
//!
//! Logs collaborator calls and keeps simple tallies instead of making noise
//! or pixels.

use std::collections::{HashMap, HashSet};

use super::Platform;
use crate::audio::{AudioSink, Channel, SoundEffect};
use crate::renderer::{Canvas, Sprite};

#[derive(Debug, Default)]
pub struct Headless {
    pub sounds: HashMap<SoundEffect, u32>,
    pub volumes: HashMap<Channel, u8>,
    pub music_starts: u32,
    pub music_fades: u32,
    pub fullscreen: bool,
    pub blits: Vec<(Sprite, i32, i32)>,
    /// Sprite sheets referenced so far
    pub sheets: HashSet<&'static str>,
    pub texts: Vec<String>,
    pub shades: u32,
}

impl Headless {
    pub fn sound_count(&self, effect: SoundEffect) -> u32 {
        self.sounds.get(&effect).copied().unwrap_or(0)
    }

    pub fn total_sounds(&self) -> u32 {
        self.sounds.values().sum()
    }

    pub fn volume(&self, channel: Channel) -> Option<u8> {
        self.volumes.get(&channel).copied()
    }

    pub fn blit_count(&self, sprite: Sprite) -> usize {
        self.blits.iter().filter(|(s, _, _)| *s == sprite).count()
    }

    /// Forget the previous frame's drawing
    pub fn clear_frame(&mut self) {
        self.blits.clear();
        self.texts.clear();
        self.shades = 0;
    }
}

impl AudioSink for Headless {
    fn play_sound(&mut self, effect: SoundEffect) {
        log::trace!("sfx {}", effect.file_name());
        *self.sounds.entry(effect).or_default() += 1;
    }

    fn play_music(&mut self) {
        log::debug!("music: fade in");
        self.music_starts += 1;
    }

    fn fade_out_music(&mut self) {
        log::debug!("music: fade out");
        self.music_fades += 1;
    }

    fn set_volume(&mut self, channel: Channel, level: u8) {
        self.volumes.insert(channel, level);
    }
}

impl Platform for Headless {
    fn set_fullscreen(&mut self, fullscreen: bool) {
        log::debug!("fullscreen: {fullscreen}");
        self.fullscreen = fullscreen;
    }
}

impl Canvas for Headless {
    fn blit(&mut self, sprite: Sprite, x: i32, y: i32) {
        let sheet = sprite.sheet();
        log::trace!("blit {sheet} {:?} at ({x}, {y})", sprite.cell());
        self.sheets.insert(sheet);
        self.blits.push((sprite, x, y));
    }

    fn draw_text(&mut self, _x: i32, _y: i32, text: &str) {
        self.texts.push(text.to_string());
    }

    fn shade(&mut self, _x: i32, _y: i32, _w: i32, _h: i32, _alpha: u8) {
        self.shades += 1;
    }
}
