//! Game settings and preferences
//!
//! Read once at startup and written once at shutdown as pretty JSON in the
//! preference directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::audio::Channel;
use crate::consts::MAX_VOLUME;

/// Settings file name inside the preference directory
pub const SETTINGS_FILE: &str = "espada.json";

/// Per-channel volume levels (0..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    pub sound: u8,
    pub music: u8,
}

impl Default for Volume {
    fn default() -> Self {
        Self { sound: 6, music: 8 }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Sound effects enabled
    pub sound: bool,
    /// Background music enabled
    pub music: bool,
    pub fullscreen: bool,
    pub volume: Volume,
    /// Debug: player ignores damage (never persisted)
    #[serde(skip)]
    pub invincible: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            music: true,
            fullscreen: false,
            volume: Volume::default(),
            invincible: false,
        }
    }
}

impl Settings {
    /// Path of the settings file inside `pref_dir`
    pub fn path_in(pref_dir: &Path) -> PathBuf {
        pref_dir.join(SETTINGS_FILE)
    }

    /// Load settings, falling back to defaults on a missing or corrupt file
    pub fn load(path: &Path) -> Self {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::info!("No settings at {} ({e}), using defaults", path.display());
                return Self::default();
            }
        };

        match serde_json::from_str::<Settings>(&json) {
            Ok(mut settings) => {
                settings.clamp_volumes();
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Corrupt settings file {}: {e}; using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        log::info!("Saving settings to {}", path.display());
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    pub fn volume(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Sound => self.volume.sound,
            Channel::Music => self.volume.music,
        }
    }

    /// Step a channel volume by `delta`, staying within 0..=12
    pub fn adjust_volume(&mut self, channel: Channel, delta: i32) -> u8 {
        let current = i32::from(self.volume(channel));
        let level = (current + delta).clamp(0, i32::from(MAX_VOLUME)) as u8;
        match channel {
            Channel::Sound => self.volume.sound = level,
            Channel::Music => self.volume.music = level,
        }
        level
    }

    fn clamp_volumes(&mut self) {
        self.volume.sound = self.volume.sound.min(MAX_VOLUME);
        self.volume.music = self.volume.music.min(MAX_VOLUME);
    }
}
