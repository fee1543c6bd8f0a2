//! Scene state machine
//!
//! `Game` is what the shell drives: one `update` and one `render` per frame.
//! TITLE runs the menu, PLAY and GAMEOVER run the simulation of the current
//! session, and session events are turned into collaborator calls here.

use crate::audio::{Channel, SoundEffect};
use crate::consts::*;
use crate::menu::{Menu, MenuCommand};
use crate::platform::Platform;
use crate::renderer::{self, Canvas};
use crate::settings::Settings;
use crate::sim::{FrameInput, GameEvent, Scene, Session, tick};

/// Top-level game: settings, title menu and the current play session
pub struct Game {
    settings: Settings,
    menu: Menu,
    session: Option<Session>,
    running: bool,
    background_y: i32,
    seed: u64,
    games_started: u64,
    /// Most recent wave reached in the current session
    last_wave: u32,
}

impl Game {
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self {
            settings,
            menu: Menu::default(),
            session: None,
            running: true,
            background_y: 0,
            seed,
            games_started: 0,
            last_wave: 0,
        }
    }

    pub fn scene(&self) -> Scene {
        self.session.as_ref().map_or(Scene::Title, |s| s.scene)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn into_settings(self) -> Settings {
        self.settings
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn background_y(&self) -> i32 {
        self.background_y
    }

    pub fn last_wave(&self) -> u32 {
        self.last_wave
    }

    pub fn is_paused(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.paused)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop the main loop after the current frame
    pub fn quit(&mut self) {
        log::info!("Quit requested");
        self.running = false;
    }

    /// Per-frame entry point
    pub fn update(&mut self, input: &FrameInput, platform: &mut dyn Platform) {
        match self.scene() {
            Scene::Title => {
                if let Some(cmd) = self.menu.handle(input, &mut self.settings) {
                    self.apply_menu_command(cmd, platform);
                }
            }
            Scene::Play | Scene::GameOver => {
                if let Some(session) = self.session.as_mut() {
                    tick(session, input);
                    let events = session.drain_events();
                    self.dispatch(events, platform);
                }
            }
        }

        if !self.is_paused() {
            self.background_y = if self.background_y < BACKGROUND_HEIGHT {
                self.background_y + BACKGROUND_SCROLL
            } else {
                0
            };
        }
    }

    /// Per-frame draw
    pub fn render(&self, canvas: &mut dyn Canvas) {
        renderer::render(self, canvas);
    }

    /// Begin a fresh session in PLAY
    pub fn start_game(&mut self, platform: &mut dyn Platform) {
        let seed = self.seed.wrapping_add(self.games_started);
        self.games_started += 1;
        self.last_wave = 0;
        self.session = Some(Session::new(seed, self.settings.invincible));
        if self.settings.music {
            platform.set_volume(Channel::Music, self.settings.volume.music);
            platform.play_music();
        }
        log::info!("New game started (seed {seed})");
    }

    /// Drop the session and go back to the title menu
    pub fn reset_to_title(&mut self, platform: &mut dyn Platform) {
        if let Some(session) = self.session.take() {
            log::info!(
                "Back to title (score {}, waves {})",
                session.player.score,
                session.spawner.waves
            );
        }
        self.menu = Menu::default();
        platform.fade_out_music();
    }

    fn apply_menu_command(&mut self, cmd: MenuCommand, platform: &mut dyn Platform) {
        match cmd {
            MenuCommand::StartGame => self.start_game(platform),
            MenuCommand::Quit => self.quit(),
            MenuCommand::SetFullscreen(on) => platform.set_fullscreen(on),
            MenuCommand::SetVolume(channel, level) => platform.set_volume(channel, level),
        }
    }

    fn play_sound(&self, effect: SoundEffect, platform: &mut dyn Platform) {
        if self.settings.sound {
            platform.set_volume(Channel::Sound, self.settings.volume.sound);
            platform.play_sound(effect);
        }
    }

    fn dispatch(&mut self, events: Vec<GameEvent>, platform: &mut dyn Platform) {
        let mut back_to_title = false;
        for event in events {
            match event {
                GameEvent::Sound(effect) => self.play_sound(effect, platform),
                GameEvent::Paused(paused) => {
                    let music = self.settings.volume.music;
                    platform.set_volume(Channel::Music, if paused { music / 2 } else { music });
                }
                GameEvent::InvincibleToggled(on) => self.settings.invincible = on,
                GameEvent::ReturnToTitle => back_to_title = true,
                GameEvent::WaveStarted(wave) => self.last_wave = wave,
                GameEvent::PlayerDied => {
                    log::debug!("Game over screen (reached wave {})", self.last_wave);
                }
            }
        }
        if back_to_title {
            self.reset_to_title(platform);
        }
    }
}
