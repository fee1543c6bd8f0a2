//! Fixed-timestep simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One call to `tick` per frame, no wall-clock time
//! - Seeded RNG only
//! - Fixed-capacity pools scanned in slot order
//! - No rendering or platform dependencies (side effects become `GameEvent`s)

pub mod collision;
pub mod enemy;
pub mod explosion;
pub mod input;
pub mod laser;
pub mod player;
pub mod rect;
pub mod spawner;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::resolve_collisions;
pub use enemy::{Enemy, EnemyKind, KindStats, Patrol};
pub use explosion::{Explosion, ExplosionPool};
pub use input::{Actions, FrameInput};
pub use laser::{Laser, LaserOwner, LaserPool};
pub use player::{DamageOutcome, Player};
pub use rect::Rect;
pub use spawner::WaveSpawner;
pub use state::{Banner, BannerTtl, GameEvent, Scene, Session};
pub use tick::tick;
pub use timer::{AnimationClock, Countdown};
