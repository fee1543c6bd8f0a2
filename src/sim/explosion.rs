//! Explosion effects pool
//!
//! Purely visual: explosions never affect gameplay, but they are simulated
//! frame-by-frame so they freeze while paused.

use super::rect::Rect;
use crate::consts::*;

/// One explosion slot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Explosion {
    pub rect: Rect,
    pub alive: bool,
    /// Index into the 8-frame explosion sheet
    pub frame: usize,
}

/// Global fixed-capacity explosion pool
#[derive(Debug, Clone)]
pub struct ExplosionPool {
    slots: [Explosion; MAX_EXPLOSIONS],
}

impl Default for ExplosionPool {
    fn default() -> Self {
        Self {
            slots: [Explosion::default(); MAX_EXPLOSIONS],
        }
    }
}

impl ExplosionPool {
    /// Start an explosion at `(x, y)`. No-op when every slot is busy.
    pub fn spawn(&mut self, x: i32, y: i32) -> bool {
        match self.slots.iter_mut().find(|e| !e.alive) {
            Some(slot) => {
                *slot = Explosion {
                    rect: Rect::new(x, y, EXPLOSION_SIZE, EXPLOSION_SIZE),
                    alive: true,
                    frame: 0,
                };
                true
            }
            None => false,
        }
    }

    /// Step every live explosion to its next frame; finished ones free their slot
    pub fn advance(&mut self) {
        for slot in self.slots.iter_mut().filter(|e| e.alive) {
            slot.frame += 1;
            if slot.frame >= EXPLOSION_FRAMES {
                slot.alive = false;
            }
        }
    }

    pub fn iter_alive(&self) -> impl Iterator<Item = &Explosion> {
        self.slots.iter().filter(|e| e.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.iter_alive().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_and_finish() {
        let mut pool = ExplosionPool::default();
        assert!(pool.spawn(100, 50));
        let e = pool.iter_alive().next().copied();
        assert_eq!(e.map(|e| (e.rect.x, e.rect.y, e.frame)), Some((100, 50, 0)));

        for _ in 0..EXPLOSION_FRAMES - 1 {
            pool.advance();
        }
        assert_eq!(pool.iter_alive().next().map(|e| e.frame), Some(7));
        pool.advance();
        assert_eq!(pool.alive_count(), 0);
    }

    #[test]
    fn test_full_pool_drops_spawn() {
        let mut pool = ExplosionPool::default();
        for i in 0..MAX_EXPLOSIONS as i32 {
            assert!(pool.spawn(i, i));
        }
        assert!(!pool.spawn(0, 0));
        assert_eq!(pool.alive_count(), MAX_EXPLOSIONS);
    }
}
