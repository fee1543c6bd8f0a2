//! Fixed timestep simulation tick
//!
//! Advances one play session by exactly one frame.

use super::collision::resolve_collisions;
use super::input::{Actions, FrameInput};
use super::state::{BannerTtl, GameEvent, Scene, Session};
use crate::audio::SoundEffect;
use crate::consts::*;

pub const PAUSE_BANNER: &str = "Game Paused | Press 'q' to quit";
pub const GAME_OVER_BANNER: &str = "Game Over | Press 'q' to continue";

/// Advance the session by one frame
pub fn tick(state: &mut Session, input: &FrameInput) {
    state.banner.tick();

    match state.scene {
        Scene::Play => {
            if handle_play_input(state, input) {
                return;
            }
        }
        Scene::GameOver => {
            if input.pressed.contains(Actions::QUIT) {
                state.emit(GameEvent::ReturnToTitle);
                return;
            }
        }
        Scene::Title => return,
    }

    if state.paused {
        return;
    }

    state.frame += 1;
    state.explosions.advance();

    if state.scene != Scene::GameOver {
        state.player.invuln_tick();
        state.player.update_movement();
        if state.player.try_fire() {
            state.play(SoundEffect::PlayerFire);
        }
        state.player.cool_down();
        resolve_collisions(state);
    }

    spawn_enemies(state);
    move_enemies(state);
    enemies_fire(state);
    move_lasers(state);

    if state.scene == Scene::GameOver {
        state.banner.show(GAME_OVER_BANNER, BannerTtl::Persistent);
    }

    state.anim.tick();
    if state.anim.on_beat() {
        state.player.advance_animation();
        for enemy in state.enemies.iter_mut().filter(|e| e.alive) {
            enemy.advance_animation();
        }
    }

    debug_assert_eq!(state.live_enemies, state.alive_enemy_count());
}

/// PLAY-scene input. Returns true when the frame should stop here.
fn handle_play_input(state: &mut Session, input: &FrameInput) -> bool {
    if input.fresh(Actions::INVINCIBLE) {
        state.invincible = !state.invincible;
        log::info!("invincible: {}", if state.invincible { "on" } else { "off" });
        state.emit(GameEvent::InvincibleToggled(state.invincible));
    }

    if input.pressed.contains(Actions::PAUSE) {
        state.paused = !state.paused;
        if state.paused {
            state.banner.show(PAUSE_BANNER, BannerTtl::Persistent);
        } else {
            state.banner.hide();
        }
        state.emit(GameEvent::Paused(state.paused));
    }

    if state.paused && input.pressed.contains(Actions::QUIT) {
        state.emit(GameEvent::ReturnToTitle);
        return true;
    }

    state.transition.tick();
    state.player.action = if state.transition.is_done() {
        input.held
    } else {
        input.held.without(Actions::FIRE)
    };
    false
}

fn spawn_enemies(state: &mut Session) {
    let wave = state
        .spawner
        .tick(&mut state.enemies, &mut state.live_enemies, &mut state.rng);
    if let Some(wave) = wave {
        log::info!("Wave {wave} incoming");
        state
            .banner
            .show(format!("Wave: {wave}"), BannerTtl::Frames(WAVE_BANNER_FRAMES));
        state.emit(GameEvent::WaveStarted(wave));
    }
}

/// Move every enemy. While the game is running, the first escape applies its
/// penalty and ends the pass for this frame.
fn move_enemies(state: &mut Session) {
    for i in 0..state.enemies.len() {
        if !state.enemies[i].advance(&mut state.rng) {
            continue;
        }

        state.live_enemies -= 1;
        if state.scene != Scene::GameOver {
            let penalty = state.enemies[i].kind.stats().escape_penalty;
            state.player.penalize(penalty);
            log::debug!("Enemy {i} escaped (-{penalty})");
            break;
        }
    }
}

fn enemies_fire(state: &mut Session) {
    let mut shots = 0;
    for enemy in state.enemies.iter_mut() {
        if enemy.try_fire(&mut state.rng) {
            shots += 1;
        }
        enemy.cool_down();
    }
    for _ in 0..shots {
        state.play(SoundEffect::EnemyFire);
    }
}

fn move_lasers(state: &mut Session) {
    state.player.lasers.advance();
    for enemy in state.enemies.iter_mut() {
        enemy.lasers.advance();
    }
}
