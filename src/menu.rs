//! Title screen menu
//!
//! Two pages: the main menu (Start / Options / Quit) and the options page.
//! Option changes are written straight into `Settings`; anything that needs
//! a collaborator call comes back as a `MenuCommand`.

use crate::audio::Channel;
use crate::cyclic;
use crate::settings::Settings;
use crate::sim::{Actions, FrameInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuPage {
    #[default]
    Main,
    Options,
}

/// Main page entries
const MAIN_ITEMS: usize = 3;
const START: usize = 0;
const OPTIONS: usize = 1;
const QUIT: usize = 2;

/// Options page entries
const OPTION_ITEMS: usize = 6;
const FULLSCREEN: usize = 0;
const SFX: usize = 1;
const MUSIC: usize = 2;
const SFX_VOLUME: usize = 3;
const MUSIC_VOLUME: usize = 4;
const BACK: usize = 5;

/// Something the menu needs the caller to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    StartGame,
    Quit,
    SetFullscreen(bool),
    SetVolume(Channel, u8),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    pub page: MenuPage,
    pub selection: usize,
}

impl Menu {
    fn item_count(&self) -> usize {
        match self.page {
            MenuPage::Main => MAIN_ITEMS,
            MenuPage::Options => OPTION_ITEMS,
        }
    }

    fn move_selector(&mut self, pressed: Actions) {
        let max = self.item_count() as i32 - 1;
        if pressed.contains(Actions::DOWN) {
            self.selection = cyclic(self.selection as i32 + 1, 0, max) as usize;
        }
        if pressed.contains(Actions::UP) {
            self.selection = cyclic(self.selection as i32 - 1, 0, max) as usize;
        }
    }

    fn open(&mut self, page: MenuPage) {
        self.page = page;
        self.selection = 0;
    }

    /// Handle one frame of key-down events
    pub fn handle(&mut self, input: &FrameInput, settings: &mut Settings) -> Option<MenuCommand> {
        let pressed = input.pressed;
        if pressed.is_empty() {
            return None;
        }
        self.move_selector(pressed);

        match self.page {
            MenuPage::Main => {
                if !pressed.contains(Actions::FIRE) {
                    return None;
                }
                match self.selection {
                    START => Some(MenuCommand::StartGame),
                    OPTIONS => {
                        self.open(MenuPage::Options);
                        None
                    }
                    QUIT => Some(MenuCommand::Quit),
                    _ => None,
                }
            }
            MenuPage::Options => self.handle_options(input, settings),
        }
    }

    fn handle_options(&mut self, input: &FrameInput, settings: &mut Settings) -> Option<MenuCommand> {
        let pressed = input.pressed;
        if !pressed.contains(Actions::FIRE | Actions::LEFT | Actions::RIGHT) {
            return None;
        }

        let step = match (pressed.contains(Actions::LEFT), pressed.contains(Actions::RIGHT)) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        };

        match self.selection {
            FULLSCREEN if !input.repeat => {
                settings.fullscreen = !settings.fullscreen;
                Some(MenuCommand::SetFullscreen(settings.fullscreen))
            }
            SFX if !input.repeat => {
                settings.sound = !settings.sound;
                None
            }
            MUSIC if !input.repeat => {
                settings.music = !settings.music;
                None
            }
            SFX_VOLUME => {
                let level = settings.adjust_volume(Channel::Sound, step);
                Some(MenuCommand::SetVolume(Channel::Sound, level))
            }
            MUSIC_VOLUME => {
                let level = settings.adjust_volume(Channel::Music, step);
                Some(MenuCommand::SetVolume(Channel::Music, level))
            }
            BACK if pressed.contains(Actions::FIRE) => {
                self.open(MenuPage::Main);
                None
            }
            _ => None,
        }
    }

    /// Labels for the current page, top to bottom
    pub fn labels(&self, settings: &Settings) -> Vec<String> {
        let toggle = |on: bool| if on { "on" } else { "off" };
        match self.page {
            MenuPage::Main => vec!["Start".into(), "Options".into(), "Quit".into()],
            MenuPage::Options => vec![
                format!("Fullscreen:   {}", toggle(settings.fullscreen)),
                format!("SFX:          {}", toggle(settings.sound)),
                format!("Music:        {}", toggle(settings.music)),
                format!("SFX Volume:   {}", settings.volume.sound),
                format!("Music Volume: {}", settings.volume.music),
                "Back".into(),
            ],
        }
    }
}
