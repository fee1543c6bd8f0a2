//! Sprite identifiers and their location on the sprite sheets

use crate::sim::{EnemyKind, LaserOwner, Rect};

/// Everything the game can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Title,
    MenuCursor,
    /// `hurt` selects the invulnerability row
    Player { frame: usize, hurt: bool },
    HealthFull,
    HealthEmpty,
    Laser(LaserOwner),
    Enemy { kind: EnemyKind, frame: usize },
    Explosion { frame: usize },
}

/// Explosion animation reuses sheet cells; x offsets of each frame
const EXPLOSION_CELLS: [i32; 8] = [0, 64, 128, 192, 64, 128, 192, 192];

impl Sprite {
    /// Image file holding this sprite
    pub fn sheet(self) -> &'static str {
        match self {
            Sprite::Background => "background.png",
            Sprite::Title => "title.png",
            Sprite::MenuCursor => "menu_cursor.png",
            Sprite::Player { .. } => "player_ship.png",
            Sprite::HealthFull => "health_full.png",
            Sprite::HealthEmpty => "health_empty.png",
            Sprite::Laser(LaserOwner::Player) => "laser.png",
            Sprite::Laser(LaserOwner::Enemy) => "laser_enemy.png",
            Sprite::Enemy {
                kind: EnemyKind::Weak,
                ..
            } => "enemy_ship.png",
            Sprite::Enemy {
                kind: EnemyKind::Strong,
                ..
            } => "enemy_ship2.png",
            Sprite::Explosion { .. } => "explosion.png",
        }
    }

    /// Sub-rectangle of the sheet, or `None` for whole-image sprites
    pub fn cell(self) -> Option<Rect> {
        match self {
            Sprite::Player { frame, hurt } => {
                let x = frame as i32 * 64;
                let y = if hurt && frame > 0 { 64 } else { 0 };
                Some(Rect::new(x, y, 64, 64))
            }
            Sprite::Enemy { kind, frame } => {
                let stats = kind.stats();
                Some(Rect::new(frame as i32 * stats.width, 0, stats.width, stats.height))
            }
            Sprite::Explosion { frame } => {
                let x = EXPLOSION_CELLS[frame.min(EXPLOSION_CELLS.len() - 1)];
                Some(Rect::new(x, 0, 64, 64))
            }
            _ => None,
        }
    }
}
