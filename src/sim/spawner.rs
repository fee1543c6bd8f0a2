//! Wave spawner
//!
//! Refills the whole enemy pool in one burst once the field is empty and the
//! reload countdown has run out.

use rand::Rng;

use super::enemy::{Enemy, EnemyKind};
use super::timer::Countdown;
use crate::consts::*;

#[derive(Debug, Clone)]
pub struct WaveSpawner {
    pub countdown: Countdown,
    /// Waves spawned so far (saturates at `MAX_WAVES`)
    pub waves: u32,
}

impl Default for WaveSpawner {
    fn default() -> Self {
        Self {
            countdown: Countdown::new(SPAWN_RELOAD),
            waves: 0,
        }
    }
}

impl WaveSpawner {
    /// Run one frame of the spawner.
    ///
    /// `live` is the session's live-enemy counter and is incremented once per
    /// activated slot. Returns the new wave number when a burst happened.
    pub fn tick<R: Rng + ?Sized>(
        &mut self,
        enemies: &mut [Enemy],
        live: &mut usize,
        rng: &mut R,
    ) -> Option<u32> {
        if *live != 0 {
            // Full grace period after the last enemy of a wave is gone
            self.countdown.reset(SPAWN_RELOAD);
            return None;
        }

        if !self.countdown.is_done() {
            self.countdown.tick();
            return None;
        }

        let kind = EnemyKind::for_wave(self.waves);
        for enemy in enemies.iter_mut().filter(|e| !e.alive) {
            enemy.activate(kind, rng);
            *live += 1;
        }

        if self.waves < MAX_WAVES {
            self.waves += 1;
        }
        self.countdown.reset(SPAWN_RELOAD);
        log::debug!("Wave {} spawned: {} x {:?}", self.waves, *live, kind);
        Some(self.waves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn pool() -> Vec<Enemy> {
        (0..MAX_ENEMIES).map(|_| Enemy::new()).collect()
    }

    #[test]
    fn test_burst_fills_pool_with_weak_enemies() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut enemies = pool();
        let mut live = 0;
        let mut spawner = WaveSpawner {
            countdown: Countdown::new(0),
            waves: 3,
        };

        assert_eq!(spawner.tick(&mut enemies, &mut live, &mut rng), Some(4));
        assert_eq!(live, MAX_ENEMIES);
        for e in &enemies {
            assert!(e.alive);
            assert_eq!(e.kind, EnemyKind::Weak);
            assert_eq!((e.rect.w, e.rect.h), (64, 32));
        }
        assert_eq!(spawner.waves, 4);
        assert_eq!(spawner.countdown.remaining(), SPAWN_RELOAD);
    }

    #[test]
    fn test_strong_after_threshold() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut enemies = pool();
        let mut live = 0;
        let mut spawner = WaveSpawner {
            countdown: Countdown::new(0),
            waves: STRONG_WAVE_THRESHOLD,
        };
        spawner.tick(&mut enemies, &mut live, &mut rng);
        assert!(enemies.iter().all(|e| e.kind == EnemyKind::Strong));
    }

    #[test]
    fn test_countdown_before_first_wave() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut enemies = pool();
        let mut live = 0;
        let mut spawner = WaveSpawner::default();

        for _ in 0..SPAWN_RELOAD {
            assert_eq!(spawner.tick(&mut enemies, &mut live, &mut rng), None);
        }
        assert_eq!(live, 0);
        assert_eq!(spawner.tick(&mut enemies, &mut live, &mut rng), Some(1));
        assert_eq!(live, MAX_ENEMIES);
    }

    #[test]
    fn test_countdown_held_while_enemies_live() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut enemies = pool();
        let mut live = 1;
        let mut spawner = WaveSpawner {
            countdown: Countdown::new(3),
            waves: 1,
        };
        assert_eq!(spawner.tick(&mut enemies, &mut live, &mut rng), None);
        assert_eq!(spawner.countdown.remaining(), SPAWN_RELOAD);
        assert_eq!(spawner.waves, 1);
    }

    #[test]
    fn test_wave_counter_saturates() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut enemies = pool();
        let mut live = 0;
        let mut spawner = WaveSpawner {
            countdown: Countdown::new(0),
            waves: MAX_WAVES,
        };
        assert_eq!(spawner.tick(&mut enemies, &mut live, &mut rng), Some(MAX_WAVES));
    }
}
