//! Enemy ships
//!
//! Enemies live in a fixed pool owned by the session. A dead slot keeps its
//! memory (including its laser pool) and is recycled by the next wave.

use std::ops::RangeInclusive;

use rand::Rng;

use super::laser::{LaserOwner, LaserPool};
use super::rect::Rect;
use super::timer::{Countdown, next_frame};
use crate::consts::*;

pub const ENEMY_FRAMES: usize = 2;

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EnemyKind {
    #[default]
    Weak,
    Strong,
}

/// Balancing data for one enemy kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindStats {
    pub width: i32,
    pub height: i32,
    /// Pixels descended per frame
    pub descent: i32,
    /// Pixels moved sideways per patrol step
    pub patrol_speed: i32,
    /// Frames between shots, re-rolled after each shot
    pub fire_interval: RangeInclusive<u32>,
    /// Points for shooting it down
    pub bounty: u32,
    /// Points lost when it slips past the bottom
    pub escape_penalty: u32,
}

static WEAK: KindStats = KindStats {
    width: 64,
    height: 32,
    descent: 2,
    patrol_speed: 2,
    fire_interval: 100..=250,
    bounty: 50,
    escape_penalty: 100,
};

static STRONG: KindStats = KindStats {
    width: 64,
    height: 64,
    descent: 3,
    patrol_speed: 3,
    fire_interval: 50..=100,
    bounty: 100,
    escape_penalty: 200,
};

impl EnemyKind {
    pub fn stats(self) -> &'static KindStats {
        match self {
            EnemyKind::Weak => &WEAK,
            EnemyKind::Strong => &STRONG,
        }
    }

    /// Kind spawned by the burst that follows `waves_cleared` waves
    pub fn for_wave(waves_cleared: u32) -> Self {
        if waves_cleared < STRONG_WAVE_THRESHOLD {
            EnemyKind::Weak
        } else {
            EnemyKind::Strong
        }
    }
}

/// Horizontal patrol heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Patrol {
    #[default]
    Right,
    Left,
}

impl Patrol {
    fn flipped(self) -> Self {
        match self {
            Patrol::Right => Patrol::Left,
            Patrol::Left => Patrol::Right,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub rect: Rect,
    pub alive: bool,
    pub kind: EnemyKind,
    /// Patrol steps left before turning around; 0 means "pick a new path"
    pub path_length: u32,
    pub dir: Patrol,
    pub fire_cooldown: Countdown,
    pub lasers: LaserPool,
    pub frame: usize,
}

impl Default for Enemy {
    fn default() -> Self {
        Self::new()
    }
}

impl Enemy {
    /// An empty (dead) pool slot
    pub fn new() -> Self {
        Self {
            rect: Rect::default(),
            alive: false,
            kind: EnemyKind::Weak,
            path_length: 0,
            dir: Patrol::Right,
            fire_cooldown: Countdown::default(),
            lasers: LaserPool::new(LaserOwner::Enemy),
            frame: 0,
        }
    }

    /// Bring this slot to life somewhere above the visible field
    pub fn activate<R: Rng + ?Sized>(&mut self, kind: EnemyKind, rng: &mut R) {
        let stats = kind.stats();
        self.kind = kind;
        self.rect.w = stats.width;
        self.rect.h = stats.height;
        self.rect.x = rng.random_range(0..=WIDTH - stats.width);
        self.rect.y = rng.random_range(-192..=-64);
        self.dir = if rng.random_bool(0.5) {
            Patrol::Left
        } else {
            Patrol::Right
        };
        self.alive = true;
        self.frame = 0;
        self.path_length = 0;
        self.fire_cooldown.reset(0);
    }

    /// Patrol sideways and descend. Returns true if the enemy just slipped
    /// past the bottom of the field, in which case it has been deactivated.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.alive {
            return false;
        }

        let stats = self.kind.stats();
        if self.path_length == 0 {
            self.path_length = rng.random_range(10..=(WIDTH / 2) as u32);
        }

        match self.dir {
            Patrol::Right => {
                if self.rect.right() < WIDTH {
                    self.rect.x = (self.rect.x + stats.patrol_speed).min(WIDTH - self.rect.w);
                    self.path_length -= 1;
                }
                if self.rect.right() >= WIDTH || self.path_length == 0 {
                    self.turn();
                }
            }
            Patrol::Left => {
                if self.rect.x > 0 {
                    self.rect.x = (self.rect.x - stats.patrol_speed).max(0);
                    self.path_length -= 1;
                }
                if self.rect.x <= 0 || self.path_length == 0 {
                    self.turn();
                }
            }
        }

        self.rect.y += stats.descent;

        if self.rect.y > BOTTOM + self.rect.h {
            self.alive = false;
            self.rect.x = 0;
            self.rect.y = 0;
            return true;
        }
        false
    }

    fn turn(&mut self) {
        self.dir = self.dir.flipped();
        self.path_length = 0;
    }

    fn muzzle(&self) -> (i32, i32) {
        (self.rect.center_x(), self.rect.bottom())
    }

    /// Fire once the enemy is on screen and its weapon is ready
    pub fn try_fire<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.alive || self.rect.y < 0 || !self.fire_cooldown.is_done() {
            return false;
        }
        let (x, y) = self.muzzle();
        if !self.lasers.fire(x, y) {
            return false;
        }
        let interval = self.kind.stats().fire_interval.clone();
        self.fire_cooldown.reset(rng.random_range(interval));
        true
    }

    pub fn cool_down(&mut self) {
        self.fire_cooldown.tick();
    }

    pub fn advance_animation(&mut self) {
        self.frame = next_frame(self.frame, ENEMY_FRAMES);
    }
}
