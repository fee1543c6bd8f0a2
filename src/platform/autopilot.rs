//! Scripted player for headless runs
//!
//! Looks at the game each frame and decides what keys a person would press:
//! start from the title menu, chase the nearest enemy while firing, and
//! leave the game-over screen after a short wait. Once `games` sessions are
//! over it selects Quit on the menu.

use crate::game::Game;
use crate::sim::{Actions, FrameInput, Scene, Session};

/// Frames spent looking at the game-over banner before quitting it
pub const GAME_OVER_WAIT: u32 = 60;
/// Horizontal slack before the ship starts steering
const AIM_DEADZONE: i32 = 8;

#[derive(Debug, Clone)]
pub struct Autopilot {
    games: u32,
    finished: u32,
    game_over_frames: u32,
    last_scene: Scene,
    quitting: bool,
}

impl Autopilot {
    /// Play `games` sessions, then quit from the menu
    pub fn new(games: u32) -> Self {
        Self {
            games,
            finished: 0,
            game_over_frames: 0,
            last_scene: Scene::Title,
            quitting: false,
        }
    }

    pub fn games_finished(&self) -> u32 {
        self.finished
    }

    /// Input for the next frame
    pub fn next_input(&mut self, game: &Game) -> FrameInput {
        let scene = game.scene();
        if scene == Scene::Title && self.last_scene != Scene::Title {
            self.finished += 1;
            log::debug!("autopilot: game {} over", self.finished);
        }
        self.last_scene = scene;

        match (scene, game.session()) {
            (Scene::Play, Some(session)) => {
                self.game_over_frames = 0;
                FrameInput::hold(steer(session) | Actions::FIRE)
            }
            (Scene::GameOver, _) => {
                self.game_over_frames += 1;
                if self.game_over_frames >= GAME_OVER_WAIT {
                    FrameInput::press(Actions::QUIT)
                } else {
                    FrameInput::default()
                }
            }
            _ => self.title_input(),
        }
    }

    fn title_input(&mut self) -> FrameInput {
        if self.finished < self.games {
            return FrameInput::press(Actions::FIRE);
        }
        if !self.quitting {
            // Start wraps up to Quit
            self.quitting = true;
            return FrameInput::press(Actions::UP);
        }
        FrameInput::press(Actions::FIRE)
    }
}

/// Direction toward the closest enemy that has entered the screen
fn steer(session: &Session) -> Actions {
    let player = &session.player;
    let me = player.rect.center_x();
    let target = session
        .enemies
        .iter()
        .filter(|e| e.alive && e.rect.bottom() >= 0)
        .max_by_key(|e| e.rect.y)
        .map(|e| e.rect.center_x());

    match target {
        Some(x) if x < me - AIM_DEADZONE => Actions::LEFT,
        Some(x) if x > me + AIM_DEADZONE => Actions::RIGHT,
        _ => Actions::NONE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Headless;
    use crate::settings::Settings;
    use crate::sim::{EnemyKind, Rect};

    #[test]
    fn test_starts_game_from_title() {
        let mut game = Game::new(Settings::default(), 3);
        let mut host = Headless::default();
        let mut pilot = Autopilot::new(1);

        let input = pilot.next_input(&game);
        game.update(&input, &mut host);
        assert_eq!(game.scene(), Scene::Play);
    }

    #[test]
    fn test_steers_toward_lowest_enemy() {
        let mut session = Session::new(3, false);
        let e = &mut session.enemies[0];
        e.alive = true;
        e.kind = EnemyKind::Weak;
        e.rect = Rect::new(20, 100, 64, 32);
        session.live_enemies = 1;

        assert_eq!(steer(&session), Actions::LEFT);
        session.enemies[0].rect.x = 500;
        assert_eq!(steer(&session), Actions::RIGHT);
        session.enemies[0].rect.x = session.player.rect.x;
        assert_eq!(steer(&session), Actions::NONE);
    }

    #[test]
    fn test_plays_then_quits() {
        let mut game = Game::new(Settings::default(), 3);
        let mut host = Headless::default();
        let mut pilot = Autopilot::new(1);

        game.update(&pilot.next_input(&game), &mut host);
        if let Some(s) = game.session_mut() {
            s.player.health = 1;
            s.damage_player(1);
        }

        for _ in 0..GAME_OVER_WAIT + 5 {
            if !game.is_running() {
                break;
            }
            let input = pilot.next_input(&game);
            game.update(&input, &mut host);
        }
        assert_eq!(pilot.games_finished(), 1);
        assert!(!game.is_running());
    }
}
