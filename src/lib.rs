//! Espada - A vertical arcade shooter
//!
//! Core modules:
//! - `sim`: Fixed-timestep simulation (entities, pools, collisions, waves)
//! - `game`: Scene state machine and per-frame entry points
//! - `menu`: Title screen navigation and options
//! - `renderer`: Sprite drawing through an abstract canvas
//! - `audio` / `platform`: Collaborators the core calls into
//! - `settings`: Persisted preferences

pub mod audio;
pub mod game;
pub mod menu;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::Game;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions
    pub const WIDTH: i32 = 640;
    pub const HEIGHT: i32 = 480;
    /// Height of the HUD band below the play field
    pub const HUD_HEIGHT: i32 = 32;
    /// Bottom edge of the play field
    pub const BOTTOM: i32 = HEIGHT - HUD_HEIGHT;
    /// Target frame rate
    pub const FPS: u32 = 60;

    /// Pool capacities
    pub const MAX_LASERS: usize = 5;
    pub const MAX_ENEMIES: usize = 4;
    pub const MAX_EXPLOSIONS: usize = 16;

    pub const MAX_HEALTH: i32 = 5;

    /// Player horizontal speed cap (vertical is half)
    pub const PLAYER_MAX_SPEED: i32 = 8;
    pub const PLAYER_FIRE_COOLDOWN: u32 = 15;
    /// Frames of damage immunity after a hit
    pub const INVULN_FRAMES: u32 = 100;
    /// Frames at PLAY entry during which the player cannot fire
    pub const TRANSITION_FRAMES: u32 = 10;

    /// Spawner grace period between waves
    pub const SPAWN_RELOAD: u32 = 180;
    /// Waves of weak enemies before strong ones appear
    pub const STRONG_WAVE_THRESHOLD: u32 = 5;
    pub const MAX_WAVES: u32 = 1_000_000_000;
    pub const WAVE_BANNER_FRAMES: u32 = 120;

    /// Projectiles
    pub const PLAYER_LASER_SPEED: i32 = 10;
    pub const ENEMY_LASER_SPEED: i32 = PLAYER_LASER_SPEED / 2;
    pub const LASER_WIDTH: i32 = 8;
    pub const LASER_HEIGHT: i32 = 16;

    /// Explosions
    pub const EXPLOSION_SIZE: i32 = 64;
    pub const EXPLOSION_FRAMES: usize = 8;

    /// Background texture height (scroll wraps here)
    pub const BACKGROUND_HEIGHT: i32 = 640;
    pub const BACKGROUND_SCROLL: i32 = 10;

    /// Volume levels are 0..=MAX_VOLUME
    pub const MAX_VOLUME: u8 = 12;
}

/// Wrap `x` into `[lo, hi]`: below the range jumps to `hi`, above jumps to `lo`
#[inline]
pub fn cyclic(x: i32, lo: i32, hi: i32) -> i32 {
    if x < lo {
        hi
    } else if x > hi {
        lo
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cyclic_wraps_both_ends() {
        assert_eq!(cyclic(-1, 0, 2), 2);
        assert_eq!(cyclic(3, 0, 2), 0);
        assert_eq!(cyclic(1, 0, 2), 1);
    }

    #[test]
    fn test_bottom_leaves_hud_band() {
        assert_eq!(consts::BOTTOM, 448);
        assert_eq!(consts::ENEMY_LASER_SPEED, 5);
    }
}
