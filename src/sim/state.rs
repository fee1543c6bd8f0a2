//! Session state and core simulation types
//!
//! A `Session` is one play-through: created by "start game", thrown away on
//! return to the title screen.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::enemy::Enemy;
use super::explosion::ExplosionPool;
use super::player::Player;
use super::spawner::WaveSpawner;
use super::timer::{AnimationClock, Countdown};
use crate::audio::SoundEffect;
use crate::consts::*;

/// Top-level scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scene {
    /// Menu navigation, nothing simulated
    #[default]
    Title,
    /// Full simulation
    Play,
    /// Player dead; enemies keep flying until the player quits
    GameOver,
}

/// How long the status banner stays up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BannerTtl {
    #[default]
    Hidden,
    Frames(u32),
    Persistent,
}

/// Centered status line (wave number, pause, game over)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Banner {
    pub text: String,
    pub ttl: BannerTtl,
}

impl Banner {
    pub fn show(&mut self, text: impl Into<String>, ttl: BannerTtl) {
        self.text = text.into();
        self.ttl = ttl;
    }

    pub fn hide(&mut self) {
        self.text.clear();
        self.ttl = BannerTtl::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        self.ttl != BannerTtl::Hidden
    }

    pub fn tick(&mut self) {
        if let BannerTtl::Frames(n) = self.ttl {
            self.ttl = if n <= 1 {
                BannerTtl::Hidden
            } else {
                BannerTtl::Frames(n - 1)
            };
        }
    }
}

/// Side effects produced by a frame, drained by the scene owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Sound(SoundEffect),
    WaveStarted(u32),
    PlayerDied,
    Paused(bool),
    InvincibleToggled(bool),
    ReturnToTitle,
}

/// Complete state of one play session
#[derive(Debug, Clone)]
pub struct Session {
    pub scene: Scene,
    pub paused: bool,
    /// Debug flag: damage is ignored entirely
    pub invincible: bool,
    pub player: Player,
    pub enemies: [Enemy; MAX_ENEMIES],
    /// Maintained count of alive enemies
    pub live_enemies: usize,
    pub explosions: ExplosionPool,
    pub spawner: WaveSpawner,
    /// Fire suppression right after PLAY starts
    pub transition: Countdown,
    pub anim: AnimationClock,
    pub banner: Banner,
    pub rng: Pcg32,
    /// Simulated frames (excluding paused ones)
    pub frame: u64,
    pub events: Vec<GameEvent>,
}

impl Session {
    /// Fresh session in PLAY with the given RNG seed
    pub fn new(seed: u64, invincible: bool) -> Self {
        Self {
            scene: Scene::Play,
            paused: false,
            invincible,
            player: Player::new(),
            enemies: std::array::from_fn(|_| Enemy::new()),
            live_enemies: 0,
            explosions: ExplosionPool::default(),
            spawner: WaveSpawner::default(),
            transition: Countdown::new(TRANSITION_FRAMES),
            anim: AnimationClock::default(),
            banner: Banner::default(),
            rng: Pcg32::seed_from_u64(seed),
            frame: 0,
            events: Vec::new(),
        }
    }

    /// Count alive enemies by scanning the pool
    pub fn alive_enemy_count(&self) -> usize {
        self.enemies.iter().filter(|e| e.alive).count()
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn play(&mut self, effect: SoundEffect) {
        self.emit(GameEvent::Sound(effect));
    }

    /// Take this frame's events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Damage the player; death spawns an explosion and ends the game
    pub fn damage_player(&mut self, amount: i32) {
        use super::player::DamageOutcome;

        match self.player.apply_damage(amount, self.invincible) {
            DamageOutcome::Ignored => {}
            DamageOutcome::Hurt => self.play(SoundEffect::Explosion),
            DamageOutcome::Killed => {
                self.play(SoundEffect::Explosion);
                let (x, y) = (self.player.rect.x, self.player.rect.y);
                self.explosions.spawn(x, y);
                self.scene = Scene::GameOver;
                log::info!(
                    "Player destroyed on wave {} with score {}",
                    self.spawner.waves,
                    self.player.score
                );
                self.emit(GameEvent::PlayerDied);
            }
        }
    }

    /// Destroy enemy `index` without touching the score
    pub(crate) fn kill_enemy(&mut self, index: usize) {
        let enemy = &mut self.enemies[index];
        if enemy.alive {
            enemy.alive = false;
            self.live_enemies -= 1;
        }
    }
}
