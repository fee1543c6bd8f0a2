//! The player's ship

use glam::IVec2;

use super::input::Actions;
use super::laser::{LaserOwner, LaserPool};
use super::rect::Rect;
use super::timer::{Countdown, next_frame};
use crate::consts::*;

/// Number of images in each player animation row
pub const PLAYER_FRAMES: usize = 2;
pub const PLAYER_SIZE: i32 = 64;
/// Spawn position, horizontally centered
pub const PLAYER_START_X: i32 = 295;

/// Result of a damage request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageOutcome {
    /// Invincible, invulnerable or already dead
    Ignored,
    Hurt,
    /// Health reached zero this hit
    Killed,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub rect: Rect,
    pub alive: bool,
    pub health: i32,
    pub score: i64,
    pub vel: IVec2,
    pub invulnerable: bool,
    pub invuln_timer: Countdown,
    pub fire_cooldown: Countdown,
    pub lasers: LaserPool,
    pub frame: usize,
    /// Actions held this frame, set by the scene before movement
    pub action: Actions,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            rect: Rect::new(PLAYER_START_X, BOTTOM - PLAYER_SIZE, PLAYER_SIZE, PLAYER_SIZE),
            alive: true,
            health: MAX_HEALTH,
            score: 0,
            vel: IVec2::ZERO,
            invulnerable: false,
            invuln_timer: Countdown::default(),
            fire_cooldown: Countdown::default(),
            lasers: LaserPool::new(LaserOwner::Player),
            frame: 0,
            action: Actions::NONE,
        }
    }

    /// Count down the post-hit immunity window
    pub fn invuln_tick(&mut self) {
        if self.invuln_timer.is_done() {
            self.invulnerable = false;
        } else {
            self.invuln_timer.tick();
        }
    }

    /// Accelerate toward held directions, drift back to rest on release,
    /// integrate and clamp to the play field.
    pub fn update_movement(&mut self) {
        let max_x = PLAYER_MAX_SPEED;
        let max_y = PLAYER_MAX_SPEED / 2;
        let action = self.action;
        let held = |a: Actions| action.contains(a);

        if held(Actions::LEFT) {
            if self.vel.x > -max_x {
                self.vel.x -= 1;
            }
        } else if held(Actions::RIGHT) && self.vel.x < max_x {
            self.vel.x += 1;
        }

        if held(Actions::UP) {
            if self.vel.y > -max_y {
                self.vel.y -= 1;
            }
        } else if held(Actions::DOWN) && self.vel.y < max_y {
            self.vel.y += 1;
        }

        // Inertia: released directions bleed off one unit per frame
        if !held(Actions::LEFT) && self.vel.x < 0 {
            self.vel.x += 1;
        }
        if !held(Actions::RIGHT) && self.vel.x > 0 {
            self.vel.x -= 1;
        }
        if !held(Actions::UP) && self.vel.y < 0 {
            self.vel.y += 1;
        }
        if !held(Actions::DOWN) && self.vel.y > 0 {
            self.vel.y -= 1;
        }

        self.rect.x = (self.rect.x + self.vel.x).clamp(0, WIDTH - self.rect.w);
        self.rect.y = (self.rect.y + self.vel.y).clamp(0, BOTTOM - self.rect.h);
    }

    /// Muzzle: horizontally centered, laser sitting just above the nose
    fn muzzle(&self) -> (i32, i32) {
        (self.rect.center_x(), self.rect.y - LASER_HEIGHT)
    }

    /// Fire if the trigger is held, the weapon is cool and a slot is free
    pub fn try_fire(&mut self) -> bool {
        if !self.action.contains(Actions::FIRE) || !self.fire_cooldown.is_done() {
            return false;
        }
        let (x, y) = self.muzzle();
        if self.lasers.fire(x, y) {
            self.fire_cooldown.reset(PLAYER_FIRE_COOLDOWN);
            true
        } else {
            false
        }
    }

    pub fn cool_down(&mut self) {
        self.fire_cooldown.tick();
    }

    /// Apply `amount` damage. Death clamps health to 0 and marks the ship dead;
    /// the caller handles effects and the scene change.
    pub fn apply_damage(&mut self, amount: i32, invincible: bool) -> DamageOutcome {
        if invincible || !self.alive || self.invulnerable {
            return DamageOutcome::Ignored;
        }

        self.invulnerable = true;
        self.invuln_timer.reset(INVULN_FRAMES);
        self.health -= amount;

        if self.health <= 0 {
            self.health = 0;
            self.alive = false;
            DamageOutcome::Killed
        } else {
            DamageOutcome::Hurt
        }
    }

    pub fn award(&mut self, points: u32) {
        self.score += i64::from(points);
    }

    /// Deduct points, never below zero
    pub fn penalize(&mut self, points: u32) {
        self.score = (self.score - i64::from(points)).max(0);
    }

    pub fn advance_animation(&mut self) {
        self.frame = next_frame(self.frame, PLAYER_FRAMES);
    }
}
