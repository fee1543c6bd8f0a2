//! Laser projectiles
//!
//! Each shooter owns a fixed pool of `MAX_LASERS` slots. Firing claims the
//! first dead slot; leaving the screen returns it.

use super::rect::Rect;
use crate::consts::*;

/// Who fired a laser: decides direction, speed and sprite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaserOwner {
    Player,
    Enemy,
}

impl LaserOwner {
    /// Vertical displacement per frame
    pub fn velocity(self) -> i32 {
        match self {
            LaserOwner::Player => -PLAYER_LASER_SPEED,
            LaserOwner::Enemy => ENEMY_LASER_SPEED,
        }
    }

    fn out_of_bounds(self, rect: &Rect) -> bool {
        match self {
            LaserOwner::Player => rect.y < 0,
            LaserOwner::Enemy => rect.y > HEIGHT,
        }
    }
}

/// A single projectile slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Laser {
    pub rect: Rect,
    pub alive: bool,
}

impl Default for Laser {
    fn default() -> Self {
        Self {
            rect: Rect::new(0, 0, LASER_WIDTH, LASER_HEIGHT),
            alive: false,
        }
    }
}

/// Fixed-capacity laser pool for one shooter
#[derive(Debug, Clone)]
pub struct LaserPool {
    owner: LaserOwner,
    slots: [Laser; MAX_LASERS],
}

impl LaserPool {
    pub fn new(owner: LaserOwner) -> Self {
        Self {
            owner,
            slots: [Laser::default(); MAX_LASERS],
        }
    }

    pub fn owner(&self) -> LaserOwner {
        self.owner
    }

    /// Activate the first free slot with its top-left at `(x, y)`.
    ///
    /// Returns false and leaves the pool untouched when every slot is in
    /// flight.
    pub fn fire(&mut self, x: i32, y: i32) -> bool {
        match self.slots.iter_mut().find(|l| !l.alive) {
            Some(laser) => {
                laser.alive = true;
                laser.rect.x = x;
                laser.rect.y = y;
                true
            }
            None => false,
        }
    }

    /// Move every live laser one frame and retire those off screen
    pub fn advance(&mut self) {
        let owner = self.owner;
        let dy = owner.velocity();
        for laser in self.slots.iter_mut().filter(|l| l.alive) {
            laser.rect.y += dy;
            if owner.out_of_bounds(&laser.rect) {
                laser.alive = false;
            }
        }
    }

    pub fn slot(&self, index: usize) -> &Laser {
        &self.slots[index]
    }

    /// Return slot `index` to the pool
    pub fn retire(&mut self, index: usize) {
        self.slots[index].alive = false;
    }

    pub fn is_saturated(&self) -> bool {
        self.slots.iter().all(|l| l.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.slots.iter().filter(|l| l.alive).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Laser> {
        self.slots.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Laser> {
        self.slots.iter_mut()
    }

    pub fn iter_alive(&self) -> impl Iterator<Item = &Laser> {
        self.slots.iter().filter(|l| l.alive)
    }
}
